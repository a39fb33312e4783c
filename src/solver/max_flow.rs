//! Edmonds–Karp maximum flow for unit-capacity networks
//!
//! Repeatedly finds a shortest augmenting path by breadth-first search and
//! pushes one unit of flow along it. Every edge has capacity 1, so each path
//! carries exactly one unit and the loop runs at most `min(dice, letters)`
//! times.

use super::network::FlowNetwork;
use log::trace;
use std::collections::VecDeque;

/// How a node was reached during one BFS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unseen,
    /// The search root (the source is its own predecessor)
    Root,
    /// Reached through this edge id
    Via(usize),
}

/// Compute the maximum flow from `source` to `sink`
///
/// The network is left in its final residual state.
///
/// # Examples
/// ```
/// use word_dice::core::DieSet;
/// use word_dice::solver::{NetworkBuilder, NodeId, max_flow};
///
/// let dice = DieSet::from_faces(["AB", "BC", "CA"]);
/// let mut network = NetworkBuilder::new(&dice).build("ABC");
/// let source = network.index_of(NodeId::Source);
/// let sink = network.index_of(NodeId::Sink);
///
/// assert_eq!(max_flow(&mut network, source, sink), 3);
/// ```
pub fn max_flow(network: &mut FlowNetwork<'_>, source: usize, sink: usize) -> usize {
    let mut flow = 0;
    let mut visits = vec![Visit::Unseen; network.node_count()];
    let mut queue = VecDeque::with_capacity(network.node_count());

    while find_path(network, source, sink, &mut visits, &mut queue) {
        let path = augment(network, source, sink, &visits);
        flow += 1;
        trace!("augmenting path {flow}: {path:?}");
    }

    flow
}

/// Breadth-first search for a path with residual capacity
///
/// Neighbors are explored in edge insertion order, which fixes which path is
/// chosen when several exist. Returns as soon as the sink is reached.
fn find_path(
    network: &FlowNetwork<'_>,
    source: usize,
    sink: usize,
    visits: &mut [Visit],
    queue: &mut VecDeque<usize>,
) -> bool {
    visits.fill(Visit::Unseen);
    queue.clear();

    if source == sink {
        return false;
    }

    visits[source] = Visit::Root;
    queue.push_back(source);

    while let Some(node) = queue.pop_front() {
        for &id in network.edge_ids(node) {
            let edge = network.edge(id);
            if edge.residual == 0 || visits[edge.to] != Visit::Unseen {
                continue;
            }

            visits[edge.to] = Visit::Via(id);
            if edge.to == sink {
                return true;
            }
            queue.push_back(edge.to);
        }
    }

    false
}

/// Push one unit along the path recorded in `visits`, walking back from the sink
///
/// Returns the node indices of the path from source to sink.
fn augment(
    network: &mut FlowNetwork<'_>,
    source: usize,
    sink: usize,
    visits: &[Visit],
) -> Vec<usize> {
    let mut path = vec![sink];
    let mut node = sink;

    while node != source {
        let Visit::Via(id) = visits[node] else {
            break;
        };
        network.push_unit(id);
        node = network.tail(id);
        path.push(node);
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DieSet;
    use crate::solver::network::{NetworkBuilder, NodeId};

    fn solve<'a>(dice: &'a DieSet, word: &str) -> (usize, FlowNetwork<'a>) {
        let mut network = NetworkBuilder::new(dice).build(word);
        let source = network.index_of(NodeId::Source);
        let sink = network.index_of(NodeId::Sink);
        let flow = max_flow(&mut network, source, sink);
        (flow, network)
    }

    #[test]
    fn distinct_dice_for_distinct_letters() {
        let dice = DieSet::from_faces(["AEIOU", "BCDFG"]);
        let (flow, _) = solve(&dice, "AB");
        assert_eq!(flow, 2);
    }

    #[test]
    fn repeated_letter_needs_two_dice() {
        let dice = DieSet::from_faces(["AEIOU", "BCDFG"]);
        let (flow, _) = solve(&dice, "AA");
        assert_eq!(flow, 1);
    }

    #[test]
    fn single_die_caps_flow() {
        let dice = DieSet::from_faces(["ABC"]);
        let (flow, _) = solve(&dice, "ABC");
        assert_eq!(flow, 1);
    }

    #[test]
    fn perfect_matching_found() {
        let dice = DieSet::from_faces(["AB", "BC", "CA"]);
        let (flow, _) = solve(&dice, "ABC");
        assert_eq!(flow, 3);
    }

    #[test]
    fn reroutes_through_reverse_edge() {
        // First path sends die 0 to A; the second must move die 0 to B
        // so die 1 can take A.
        let dice = DieSet::from_faces(["AB", "A"]);
        let (flow, network) = solve(&dice, "AB");
        assert_eq!(flow, 2);

        let letter_a = network.index_of(NodeId::Letter(0));
        let letter_b = network.index_of(NodeId::Letter(1));
        assert_eq!(network.saturated_into(letter_a).collect::<Vec<_>>(), vec![2]);
        assert_eq!(network.saturated_into(letter_b).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn missing_letter_blocks_flow() {
        let dice = DieSet::from_faces(["ABC", "DEF"]);
        let (flow, _) = solve(&dice, "AZ");
        assert_eq!(flow, 1);
    }

    #[test]
    fn empty_word_has_zero_flow() {
        let dice = DieSet::from_faces(["ABC"]);
        let (flow, _) = solve(&dice, "");
        assert_eq!(flow, 0);
    }

    #[test]
    fn empty_die_set_has_zero_flow() {
        let dice = DieSet::default();
        let (flow, _) = solve(&dice, "A");
        assert_eq!(flow, 0);
    }

    #[test]
    fn flow_bounded_by_dice_and_letters() {
        let dice = DieSet::from_faces(["ABCD", "ABCD", "ABCD"]);
        let (flow, _) = solve(&dice, "ABCDABCD");
        assert_eq!(flow, 3);

        let (flow, _) = solve(&dice, "AB");
        assert_eq!(flow, 2);
    }

    #[test]
    fn residual_pairs_stay_unit() {
        let dice = DieSet::from_faces(["AB", "BC", "CA", "ABC"]);
        let (_, network) = solve(&dice, "CAB");

        for node in 0..network.node_count() {
            for &id in network.edge_ids(node) {
                let pair = network.edge(id).residual + network.edge(id ^ 1).residual;
                assert_eq!(pair, 1, "edge {id} pair sums to {pair}");
            }
        }
    }

    #[test]
    fn flow_conserved_at_inner_nodes() {
        let dice = DieSet::from_faces(["AB", "BC", "CA", "ABC"]);
        let (flow, network) = solve(&dice, "CAB");
        let sink = network.index_of(NodeId::Sink);

        assert_eq!(network.saturated_into(sink).count(), flow);
        for node in 1..sink {
            let inflow = network.saturated_into(node).count();
            let outflow = network
                .edge_ids(node)
                .iter()
                .filter(|&&id| id & 1 == 0 && network.edge(id).residual == 0)
                .count();
            assert_eq!(inflow, outflow, "node {node} leaks flow");
        }
    }
}
