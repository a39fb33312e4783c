//! Dice and word list loading utilities
//!
//! Every line is kept as-is apart from its terminator: an empty dice line is a
//! die with no faces and an empty word line is a zero-length word.

use crate::core::DieSet;
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

/// Options applied while loading dice and words
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Upper-case every line so matching ignores case
    pub ignore_case: bool,
}

impl LoadOptions {
    fn normalize(self, line: &str) -> String {
        if self.ignore_case {
            line.to_uppercase()
        } else {
            line.to_string()
        }
    }
}

/// Load a die set from a file, one die per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use word_dice::input::loader::{LoadOptions, load_dice};
///
/// let dice = load_dice("dice.txt", LoadOptions::default()).unwrap();
/// println!("Loaded {} dice", dice.len());
/// ```
pub fn load_dice<P: AsRef<Path>>(path: P, options: LoadOptions) -> io::Result<DieSet> {
    let content = fs::read_to_string(path)?;
    Ok(dice_from_str(&content, options))
}

/// Load a word list from a file, one word per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
pub fn load_words<P: AsRef<Path>>(path: P, options: LoadOptions) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_str(&content, options))
}

/// Read a word list from any buffered reader (e.g. stdin)
///
/// # Errors
///
/// Returns an I/O error if reading fails or a line is not valid UTF-8.
pub fn read_words<R: BufRead>(reader: R, options: LoadOptions) -> io::Result<Vec<String>> {
    reader
        .lines()
        .map(|line| line.map(|line| options.normalize(&line)))
        .collect()
}

/// Parse a die set from text, one die per line
///
/// # Examples
/// ```
/// use word_dice::input::loader::{LoadOptions, dice_from_str};
///
/// let dice = dice_from_str("AEIOU\nBCDFG\n", LoadOptions::default());
/// assert_eq!(dice.len(), 2);
/// ```
#[must_use]
pub fn dice_from_str(content: &str, options: LoadOptions) -> DieSet {
    DieSet::from_faces(content.lines().map(|line| options.normalize(line)))
}

/// Parse a word list from text, one word per line
#[must_use]
pub fn words_from_str(content: &str, options: LoadOptions) -> Vec<String> {
    content.lines().map(|line| options.normalize(line)).collect()
}

/// Convert an embedded face slice to a die set
///
/// # Examples
/// ```
/// use word_dice::input::loader::{LoadOptions, dice_from_slice};
/// use word_dice::input::CLASSIC_DICE;
///
/// let dice = dice_from_slice(CLASSIC_DICE, LoadOptions::default());
/// assert_eq!(dice.len(), CLASSIC_DICE.len());
/// ```
#[must_use]
pub fn dice_from_slice(slice: &[&str], options: LoadOptions) -> DieSet {
    DieSet::from_faces(slice.iter().map(|&faces| options.normalize(faces)))
}
