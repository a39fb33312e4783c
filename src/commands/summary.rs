//! Summary over a whole word list
//!
//! Solves every word with a progress bar and gathers statistics instead of
//! printing per-word lines.

use crate::core::{DieSet, Verdict};
use crate::solver::Speller;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Why a word could not be spelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shortfall {
    /// Some letter appears on no die at all
    MissingLetter,
    /// More letters than dice
    TooLong,
    /// Every letter is available, but not on enough distinct dice
    Conflict,
}

impl Shortfall {
    /// Classify an unspellable word against the die set
    #[must_use]
    pub fn classify(word: &str, dice: &DieSet) -> Self {
        if word.chars().any(|letter| !dice.any_contains(letter)) {
            Self::MissingLetter
        } else if word.chars().count() > dice.len() {
            Self::TooLong
        } else {
            Self::Conflict
        }
    }

    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::MissingLetter => "letter on no die",
            Self::TooLong => "more letters than dice",
            Self::Conflict => "dice conflict",
        }
    }
}

/// Statistics from solving a word list
#[derive(Debug)]
pub struct SummaryStatistics {
    pub total_words: usize,
    pub spellable: usize,
    pub unspellable: usize,
    /// How many spellable words used each die, indexed by die
    pub dice_usage: Vec<usize>,
    /// Unspellable word counts by cause
    pub shortfalls: BTreeMap<Shortfall, usize>,
    /// Word length (in letters) → (spellable, total)
    pub length_distribution: BTreeMap<usize, (usize, usize)>,
    pub longest_spellable: Option<String>,
    pub total_time: Duration,
}

impl SummaryStatistics {
    /// Fraction of words that were spellable, as a percentage
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.spellable as f64 / self.total_words as f64 * 100.0
        }
    }
}

/// Solve every word and collect statistics
///
/// With `show_progress` a progress bar is drawn on stderr while solving.
pub fn run_summary(speller: &Speller<'_>, words: &[String], show_progress: bool) -> SummaryStatistics {
    let dice = speller.dice();

    let pb = if show_progress {
        ProgressBar::new(words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let mut stats = SummaryStatistics {
        total_words: words.len(),
        spellable: 0,
        unspellable: 0,
        dice_usage: vec![0; dice.len()],
        shortfalls: BTreeMap::new(),
        length_distribution: BTreeMap::new(),
        longest_spellable: None,
        total_time: Duration::ZERO,
    };

    let start = Instant::now();

    for (idx, word) in words.iter().enumerate() {
        let verdict = speller.spell(word);
        let length = word.chars().count();
        let by_length = stats.length_distribution.entry(length).or_insert((0, 0));
        by_length.1 += 1;

        match &verdict {
            Verdict::Spellable { dice: used, .. } => {
                stats.spellable += 1;
                by_length.0 += 1;
                for &die in used {
                    stats.dice_usage[die] += 1;
                }

                let longer = stats
                    .longest_spellable
                    .as_ref()
                    .is_none_or(|best| length > best.chars().count());
                if longer {
                    stats.longest_spellable = Some(word.clone());
                }
            }
            Verdict::Unspellable { .. } => {
                stats.unspellable += 1;
                *stats
                    .shortfalls
                    .entry(Shortfall::classify(word, dice))
                    .or_insert(0) += 1;
            }
        }

        // Update progress
        if idx % 100 == 0 {
            pb.set_message(format!("Spellable: {}", stats.spellable));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    stats.total_time = start.elapsed();

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summarize(faces: &[&str], words: &[&str]) -> SummaryStatistics {
        let dice = DieSet::from_faces(faces.iter().copied());
        let words: Vec<String> = words.iter().map(ToString::to_string).collect();
        run_summary(&Speller::new(&dice), &words, false)
    }

    #[test]
    fn counts_add_up() {
        let stats = summarize(&["AEIOU", "BCDFG"], &["AB", "AA", "BA", "Z", ""]);

        assert_eq!(stats.total_words, 5);
        assert_eq!(stats.spellable, 3);
        assert_eq!(stats.unspellable, 2);
        assert_eq!(stats.spellable + stats.unspellable, stats.total_words);
    }

    #[test]
    fn dice_usage_counts_spellable_words() {
        let stats = summarize(&["AEIOU", "BCDFG", "XYZ"], &["AB", "A", "AA"]);

        assert_eq!(stats.dice_usage, vec![2, 1, 0]);
    }

    #[test]
    fn shortfalls_classified() {
        let stats = summarize(&["AEIOU", "BCDFG"], &["AQ", "ABE", "AA"]);

        assert_eq!(stats.shortfalls.get(&Shortfall::MissingLetter), Some(&1));
        assert_eq!(stats.shortfalls.get(&Shortfall::TooLong), Some(&1));
        assert_eq!(stats.shortfalls.get(&Shortfall::Conflict), Some(&1));
    }

    #[test]
    fn longest_spellable_keeps_first_of_max_length() {
        let stats = summarize(&["AB", "BC", "CA"], &["AB", "CAB", "ABC", "AAAA"]);

        assert_eq!(stats.longest_spellable.as_deref(), Some("CAB"));
    }

    #[test]
    fn length_distribution_tracks_totals() {
        let stats = summarize(&["AEIOU", "BCDFG"], &["AB", "AA", "A"]);

        assert_eq!(stats.length_distribution.get(&2), Some(&(1, 2)));
        assert_eq!(stats.length_distribution.get(&1), Some(&(1, 1)));
    }

    #[test]
    fn empty_word_list() {
        let stats = summarize(&["AB"], &[]);

        assert_eq!(stats.total_words, 0);
        assert!(stats.longest_spellable.is_none());
        assert!(stats.success_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn success_rate_percentage() {
        let stats = summarize(&["AEIOU", "BCDFG"], &["AB", "AA"]);
        assert!((stats.success_rate() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn classify_order_prefers_missing_letter() {
        let dice = DieSet::from_faces(["A"]);
        assert_eq!(Shortfall::classify("AQZ", &dice), Shortfall::MissingLetter);
        assert_eq!(Shortfall::classify("AA", &dice), Shortfall::TooLong);
    }
}
