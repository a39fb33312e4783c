//! Main word dice solver interface

use super::interpret::interpret;
use super::max_flow::max_flow;
use super::network::{FlowNetwork, NetworkBuilder, NodeId};
use crate::core::{DieSet, Verdict};
use log::debug;

/// Main word dice solver
///
/// Holds the network template for one die set and solves words against it.
/// Each word gets its own network, so no state carries over between words.
pub struct Speller<'a> {
    builder: NetworkBuilder<'a>,
}

impl<'a> Speller<'a> {
    /// Create a new solver for the given die set
    #[must_use]
    pub fn new(dice: &'a DieSet) -> Self {
        Self {
            builder: NetworkBuilder::new(dice),
        }
    }

    /// The die set this solver works with
    #[must_use]
    pub const fn dice(&self) -> &'a DieSet {
        self.builder.dice()
    }

    /// Build the unsolved network for `word`
    ///
    /// Useful for diagnostics; [`Speller::spell`] builds its own.
    #[must_use]
    pub fn network(&self, word: &str) -> FlowNetwork<'a> {
        self.builder.build(word)
    }

    /// Decide whether `word` can be spelled and with which dice
    ///
    /// # Examples
    /// ```
    /// use word_dice::core::DieSet;
    /// use word_dice::solver::Speller;
    ///
    /// let dice = DieSet::from_faces(["AB", "BC", "CA"]);
    /// let speller = Speller::new(&dice);
    ///
    /// let verdict = speller.spell("ABC");
    /// assert!(verdict.is_spellable());
    /// assert_eq!(verdict.dice_used(), &[0, 1, 2]);
    ///
    /// assert!(!speller.spell("ABCA").is_spellable());
    /// ```
    #[must_use]
    pub fn spell(&self, word: &str) -> Verdict {
        let mut network = self.builder.build(word);
        let source = network.index_of(NodeId::Source);
        let sink = network.index_of(NodeId::Sink);

        let flow = max_flow(&mut network, source, sink);
        debug!(
            "word {word:?}: flow {flow} of {} letters over {} dice",
            network.word_len(),
            network.dice_count()
        );

        interpret(&network, flow, word)
    }
}
