//! Unit-capacity flow network for one word
//!
//! The network has four layers: source → dice → letter positions → sink.
//! Node identities are tagged ([`NodeId`]) and resolve to contiguous indices:
//!
//! | node            | index                   |
//! |-----------------|-------------------------|
//! | source          | 0                       |
//! | die `i`         | `1 + i`                 |
//! | letter `p`      | `1 + dice + p`          |
//! | sink            | `1 + dice + letters`    |
//!
//! Residual capacity lives in an explicit edge table. Every edge is stored as a
//! pair: the forward edge at an even id `e` and its reverse at `e ^ 1`. A
//! forward edge starts with residual 1 and its reverse with residual 0, and the
//! two always sum to 1.

use crate::core::DieSet;
use std::fmt;

/// Tagged node identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    Source,
    Die(usize),
    Letter(usize),
    Sink,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Die(i) => write!(f, "die {i}"),
            Self::Letter(p) => write!(f, "letter {p}"),
            Self::Sink => write!(f, "sink"),
        }
    }
}

/// One directed residual edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Target node index
    pub to: usize,
    /// Remaining capacity (0 or 1)
    pub residual: u8,
}

/// The immutable source → dice portion shared by every word
#[derive(Debug, Clone)]
struct Template {
    adjacency: Vec<Vec<usize>>,
    edges: Vec<Edge>,
}

/// Builds a fresh flow network per word from a shared die set
///
/// The source → dice edges are computed once in [`NetworkBuilder::new`];
/// [`NetworkBuilder::build`] copies them and adds the per-word letter layer.
#[derive(Debug, Clone)]
pub struct NetworkBuilder<'a> {
    dice: &'a DieSet,
    template: Template,
}

impl<'a> NetworkBuilder<'a> {
    /// Prepare the template for a die set
    #[must_use]
    pub fn new(dice: &'a DieSet) -> Self {
        let mut template = Template {
            adjacency: vec![Vec::new(); 1 + dice.len()],
            edges: Vec::with_capacity(2 * dice.len()),
        };

        for die in dice {
            add_edge(&mut template.adjacency, &mut template.edges, 0, 1 + die.index());
        }

        Self { dice, template }
    }

    /// The die set this builder was created for
    #[must_use]
    pub const fn dice(&self) -> &'a DieSet {
        self.dice
    }

    /// Instantiate the network for `word`
    ///
    /// Every character gets its own letter node, so repeated letters demand
    /// distinct dice.
    ///
    /// # Examples
    /// ```
    /// use word_dice::core::DieSet;
    /// use word_dice::solver::{NetworkBuilder, NodeId};
    ///
    /// let dice = DieSet::from_faces(["AEIOU", "BCDFG"]);
    /// let network = NetworkBuilder::new(&dice).build("AB");
    ///
    /// assert_eq!(network.node_count(), 6);
    /// assert_eq!(network.index_of(NodeId::Sink), 5);
    /// ```
    #[must_use]
    pub fn build(&self, word: &str) -> FlowNetwork<'a> {
        let letters: Vec<char> = word.chars().collect();
        let dice_count = self.dice.len();
        let node_count = 2 + dice_count + letters.len();
        let sink = node_count - 1;

        let mut adjacency = Vec::with_capacity(node_count);
        adjacency.extend(self.template.adjacency.iter().cloned());
        adjacency.resize(node_count, Vec::new());
        let mut edges = self.template.edges.clone();

        for (position, &letter) in letters.iter().enumerate() {
            let letter_node = 1 + dice_count + position;

            for die in self.dice.iter().filter(|die| die.contains(letter)) {
                add_edge(&mut adjacency, &mut edges, 1 + die.index(), letter_node);
            }
            add_edge(&mut adjacency, &mut edges, letter_node, sink);
        }

        FlowNetwork {
            dice: self.dice,
            letters,
            adjacency,
            edges,
        }
    }
}

fn add_edge(adjacency: &mut [Vec<usize>], edges: &mut Vec<Edge>, from: usize, to: usize) {
    let id = edges.len();
    edges.push(Edge { to, residual: 1 });
    edges.push(Edge {
        to: from,
        residual: 0,
    });
    adjacency[from].push(id);
    adjacency[to].push(id + 1);
}

/// Flow network for a single word
///
/// Owned by the call solving that word and discarded afterwards.
#[derive(Debug, Clone)]
pub struct FlowNetwork<'a> {
    dice: &'a DieSet,
    letters: Vec<char>,
    adjacency: Vec<Vec<usize>>,
    edges: Vec<Edge>,
}

impl FlowNetwork<'_> {
    /// Number of letter positions (the word length in characters)
    #[inline]
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn dice_count(&self) -> usize {
        self.dice.len()
    }

    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    /// Resolve a tagged id to its contiguous index
    ///
    /// # Panics
    /// Panics if a die or letter id is out of range for this network.
    #[must_use]
    pub fn index_of(&self, node: NodeId) -> usize {
        match node {
            NodeId::Source => 0,
            NodeId::Die(i) => {
                assert!(i < self.dice.len(), "die {i} out of range");
                1 + i
            }
            NodeId::Letter(p) => {
                assert!(p < self.letters.len(), "letter {p} out of range");
                1 + self.dice.len() + p
            }
            NodeId::Sink => self.node_count() - 1,
        }
    }

    /// Map a contiguous index back to its tagged id
    #[must_use]
    pub fn node_at(&self, index: usize) -> NodeId {
        let dice = self.dice.len();
        if index == 0 {
            NodeId::Source
        } else if index <= dice {
            NodeId::Die(index - 1)
        } else if index <= dice + self.letters.len() {
            NodeId::Letter(index - 1 - dice)
        } else {
            NodeId::Sink
        }
    }

    /// Diagnostic label: `SOURCE`, the die faces, the letter, or `SINK`
    #[must_use]
    pub fn label(&self, index: usize) -> String {
        match self.node_at(index) {
            NodeId::Source => "SOURCE".to_string(),
            NodeId::Die(i) => self
                .dice
                .get(i)
                .map(|die| die.faces().to_string())
                .unwrap_or_default(),
            NodeId::Letter(p) => self.letters[p].to_string(),
            NodeId::Sink => "SINK".to_string(),
        }
    }

    /// Edge ids leaving `node`, in insertion order
    #[inline]
    #[must_use]
    pub fn edge_ids(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    #[inline]
    #[must_use]
    pub fn edge(&self, id: usize) -> Edge {
        self.edges[id]
    }

    /// Source node of edge `id`
    #[inline]
    #[must_use]
    pub fn tail(&self, id: usize) -> usize {
        self.edges[id ^ 1].to
    }

    /// Targets reachable from `node` over edges with residual capacity
    pub fn residual_targets(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[node]
            .iter()
            .map(|&id| self.edges[id])
            .filter(|edge| edge.residual > 0)
            .map(|edge| edge.to)
    }

    /// Nodes `u` whose forward edge `u → node` currently carries flow
    pub fn saturated_into(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[node]
            .iter()
            .filter(|&&id| id & 1 == 1 && self.edges[id].residual > 0)
            .map(|&id| self.edges[id].to)
    }

    /// Push one unit of flow along edge `id`
    ///
    /// The edge's residual drops to 0 and its pair's rises to 1.
    pub(crate) fn push_unit(&mut self, id: usize) {
        debug_assert_eq!(self.edges[id].residual, 1, "edge {id} has no residual");
        self.edges[id].residual -= 1;
        self.edges[id ^ 1].residual += 1;
    }
}
