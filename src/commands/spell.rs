//! Spell command
//!
//! Solves every word in order and writes one result line per word.

use crate::output::formatters::{format_network, format_verdict};
use crate::solver::Speller;
use std::io::{self, Write};

/// Configuration for the spell command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpellConfig {
    /// Append the letter → die assignment to spellable lines
    pub show_assignment: bool,
    /// Dump each word's network before solving it
    pub dump_graph: bool,
}

/// Solve `words` in input order, writing result lines to `out`
///
/// Returns how many words were spellable.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
///
/// # Examples
/// ```
/// use word_dice::commands::{SpellConfig, run_spell};
/// use word_dice::core::DieSet;
/// use word_dice::solver::Speller;
///
/// let dice = DieSet::from_faces(["AEIOU", "BCDFG"]);
/// let words = vec!["AB".to_string(), "AA".to_string()];
///
/// let mut out = Vec::new();
/// let spellable = run_spell(&Speller::new(&dice), &words, SpellConfig::default(), &mut out).unwrap();
///
/// assert_eq!(spellable, 1);
/// assert_eq!(String::from_utf8(out).unwrap(), "0 1: AB\nCannot spell AA\n");
/// ```
pub fn run_spell<W: Write>(
    speller: &Speller<'_>,
    words: &[String],
    config: SpellConfig,
    out: &mut W,
) -> io::Result<usize> {
    let mut spellable = 0;

    for word in words {
        if config.dump_graph {
            write!(out, "{}", format_network(&speller.network(word), word))?;
        }

        let verdict = speller.spell(word);
        if verdict.is_spellable() {
            spellable += 1;
        }
        writeln!(out, "{}", format_verdict(&verdict, config.show_assignment))?;
    }

    out.flush()?;
    Ok(spellable)
}
