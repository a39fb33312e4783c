//! Formatting utilities for result lines and diagnostics

use crate::core::Verdict;
use crate::solver::FlowNetwork;
use std::fmt::Write;

/// Format the result line for one word
///
/// Spellable words print their used dice (ascending, space separated), then
/// `: ` and the word. With `show_assignment` the per-letter dice follow in
/// parentheses.
///
/// # Examples
/// ```
/// use word_dice::core::Verdict;
/// use word_dice::output::formatters::format_verdict;
///
/// let verdict = Verdict::Spellable {
///     word: "AB".to_string(),
///     dice: vec![0, 1],
///     assignment: vec![1, 0],
/// };
/// assert_eq!(format_verdict(&verdict, false), "0 1: AB");
/// assert_eq!(format_verdict(&verdict, true), "0 1: AB (A=1 B=0)");
/// ```
#[must_use]
pub fn format_verdict(verdict: &Verdict, show_assignment: bool) -> String {
    match verdict {
        Verdict::Unspellable { word, .. } => format!("Cannot spell {word}"),
        Verdict::Spellable {
            word,
            dice,
            assignment,
        } => {
            let indices = join_indices(dice);
            if show_assignment {
                format!("{indices}: {word} ({})", format_assignment(word, assignment))
            } else {
                format!("{indices}: {word}")
            }
        }
    }
}

/// Format a letter → die assignment as `A=0 B=1`
#[must_use]
pub fn format_assignment(word: &str, assignment: &[usize]) -> String {
    word.chars()
        .zip(assignment)
        .map(|(letter, die)| format!("{letter}={die}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Dump a network as `Node <id>: <label> Edges to ...` lines
///
/// Only edges with residual capacity are listed, so an unsolved network shows
/// exactly its forward edges.
#[must_use]
pub fn format_network(network: &FlowNetwork<'_>, word: &str) -> String {
    let mut out = format!("Graph for word: {word}\n");

    for node in 0..network.node_count() {
        let _ = write!(out, "Node {node}: {}", network.label(node));

        let mut targets = network.residual_targets(node).peekable();
        if targets.peek().is_some() {
            out.push_str(" Edges to ");
            for target in targets {
                let _ = write!(out, "{target} ");
            }
        }
        out.push('\n');
    }

    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
