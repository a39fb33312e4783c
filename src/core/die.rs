//! Lettered die representation
//!
//! A Die stores its raw face string along with the set of distinct face letters
//! used for matching against letter positions.

use rustc_hash::FxHashSet;
use std::fmt;

/// A single die with its face letters
///
/// Repeated letters on the faces are harmless: only set membership matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Die {
    index: usize,
    faces: String,
    letters: FxHashSet<char>,
}

impl Die {
    /// Create a new die at `index` from its face string
    ///
    /// # Examples
    /// ```
    /// use word_dice::core::Die;
    ///
    /// let die = Die::new(0, "AEIOU");
    /// assert!(die.contains('E'));
    /// assert!(!die.contains('B'));
    /// ```
    #[must_use]
    pub fn new(index: usize, faces: impl Into<String>) -> Self {
        let faces = faces.into();
        let letters = faces.chars().collect();

        Self {
            index,
            faces,
            letters,
        }
    }

    /// Position of the die in the input list (0-based)
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The raw face string, as read from input
    #[inline]
    #[must_use]
    pub fn faces(&self) -> &str {
        &self.faces
    }

    /// Check if any face of the die shows `letter`
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Number of distinct letters on the die
    #[inline]
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.letters.len()
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.faces)
    }
}

/// An ordered, read-only collection of dice
///
/// Die indices always match their position in the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DieSet {
    dice: Vec<Die>,
}

impl DieSet {
    /// Build a die set from face strings, numbering dice in order
    ///
    /// # Examples
    /// ```
    /// use word_dice::core::DieSet;
    ///
    /// let dice = DieSet::from_faces(["AEIOU", "BCDFG"]);
    /// assert_eq!(dice.len(), 2);
    /// assert_eq!(dice.get(1).unwrap().faces(), "BCDFG");
    /// ```
    #[must_use]
    pub fn from_faces<I, S>(faces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dice = faces
            .into_iter()
            .enumerate()
            .map(|(index, faces)| Die::new(index, faces))
            .collect();

        Self { dice }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Die> {
        self.dice.get(index)
    }

    /// Iterate over the dice in index order
    pub fn iter(&self) -> std::slice::Iter<'_, Die> {
        self.dice.iter()
    }

    /// Check if at least one die shows `letter`
    #[must_use]
    pub fn any_contains(&self, letter: char) -> bool {
        self.dice.iter().any(|die| die.contains(letter))
    }
}

impl<'a> IntoIterator for &'a DieSet {
    type Item = &'a Die;
    type IntoIter = std::slice::Iter<'a, Die>;

    fn into_iter(self) -> Self::IntoIter {
        self.dice.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn die_contains_faces() {
        let die = Die::new(3, "AEIOU");
        assert_eq!(die.index(), 3);
        assert!(die.contains('A'));
        assert!(die.contains('U'));
        assert!(!die.contains('Z'));
    }

    #[test]
    fn die_is_case_sensitive() {
        let die = Die::new(0, "abc");
        assert!(die.contains('a'));
        assert!(!die.contains('A'));
    }

    #[test]
    fn die_repeated_faces_collapse() {
        let die = Die::new(0, "AAEEII");
        assert_eq!(die.distinct_letters(), 3);
        assert_eq!(die.faces(), "AAEEII"); // Raw label preserved
    }

    #[test]
    fn die_without_faces() {
        let die = Die::new(0, "");
        assert_eq!(die.distinct_letters(), 0);
        assert!(!die.contains('A'));
    }

    #[test]
    fn die_display_shows_faces() {
        let die = Die::new(0, "XYZ");
        assert_eq!(format!("{die}"), "XYZ");
    }

    #[test]
    fn die_set_numbers_in_order() {
        let dice = DieSet::from_faces(["AB", "BC", "CA"]);
        let indices: Vec<usize> = dice.iter().map(Die::index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn die_set_any_contains() {
        let dice = DieSet::from_faces(["AEIOU", "BCDFG"]);
        assert!(dice.any_contains('A'));
        assert!(dice.any_contains('G'));
        assert!(!dice.any_contains('Z'));
    }

    #[test]
    fn die_set_empty() {
        let dice = DieSet::from_faces(Vec::<String>::new());
        assert!(dice.is_empty());
        assert_eq!(dice.len(), 0);
        assert!(dice.get(0).is_none());
    }
}
