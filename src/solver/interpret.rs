//! Reading a verdict out of a solved network

use super::network::{FlowNetwork, NodeId};
use crate::core::Verdict;

/// Turn the final residual network into a verdict for `word`
///
/// The word is spellable when the flow covers every letter position. A die
/// is used when its source edge is saturated; the die assigned to a letter
/// is the one whose edge into that letter is saturated.
#[must_use]
pub fn interpret(network: &FlowNetwork<'_>, flow: usize, word: &str) -> Verdict {
    if flow < network.word_len() {
        return Verdict::Unspellable {
            word: word.to_string(),
            flow,
        };
    }

    Verdict::Spellable {
        word: word.to_string(),
        dice: used_dice(network),
        assignment: assignment(network),
    }
}

/// Indices of dice carrying one unit of flow, ascending
#[must_use]
pub fn used_dice(network: &FlowNetwork<'_>) -> Vec<usize> {
    let source = network.index_of(NodeId::Source);

    let mut dice: Vec<usize> = (0..network.dice_count())
        .filter(|&die| {
            let node = network.index_of(NodeId::Die(die));
            network.saturated_into(node).any(|from| from == source)
        })
        .collect();
    dice.sort_unstable();
    dice
}

/// Die index matched to each letter position, for positions that carry flow
fn assignment(network: &FlowNetwork<'_>) -> Vec<usize> {
    (0..network.word_len())
        .filter_map(|position| {
            let node = network.index_of(NodeId::Letter(position));
            network
                .saturated_into(node)
                .find_map(|from| match network.node_at(from) {
                    NodeId::Die(die) => Some(die),
                    _ => None,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DieSet;
    use crate::solver::max_flow::max_flow;
    use crate::solver::network::NetworkBuilder;

    fn verdict(dice: &DieSet, word: &str) -> Verdict {
        let mut network = NetworkBuilder::new(dice).build(word);
        let source = network.index_of(NodeId::Source);
        let sink = network.index_of(NodeId::Sink);
        let flow = max_flow(&mut network, source, sink);
        interpret(&network, flow, word)
    }

    #[test]
    fn spellable_reports_used_dice() {
        let dice = DieSet::from_faces(["AEIOU", "BCDFG"]);
        let result = verdict(&dice, "AB");

        assert!(result.is_spellable());
        assert_eq!(result.dice_used(), &[0, 1]);
        assert_eq!(result.assignment(), Some(&[0, 1][..]));
    }

    #[test]
    fn unspellable_reports_partial_flow() {
        let dice = DieSet::from_faces(["AEIOU", "BCDFG"]);
        let result = verdict(&dice, "AA");

        assert_eq!(
            result,
            Verdict::Unspellable {
                word: "AA".to_string(),
                flow: 1
            }
        );
    }

    #[test]
    fn unused_dice_not_reported() {
        let dice = DieSet::from_faces(["XYZ", "AEIOU", "QRS", "BCDFG"]);
        let result = verdict(&dice, "BA");

        assert_eq!(result.dice_used(), &[1, 3]);
        assert_eq!(result.assignment(), Some(&[3, 1][..]));
    }

    #[test]
    fn assignment_follows_rerouted_flow() {
        let dice = DieSet::from_faces(["AB", "A"]);
        let result = verdict(&dice, "AB");

        assert_eq!(result.dice_used(), &[0, 1]);
        assert_eq!(result.assignment(), Some(&[1, 0][..]));
    }

    #[test]
    fn empty_word_is_vacuously_spellable() {
        let dice = DieSet::from_faces(["AB"]);
        let result = verdict(&dice, "");

        assert!(result.is_spellable());
        assert!(result.dice_used().is_empty());
        assert_eq!(result.assignment(), Some(&[][..]));
    }
}
