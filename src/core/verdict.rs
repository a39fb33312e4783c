//! Per-word spelling verdict
//!
//! The outcome of solving one word against a die set.

/// Result of trying to spell one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// No injective die-to-letter assignment exists
    Unspellable {
        word: String,
        /// Letters that could be covered simultaneously (the max flow)
        flow: usize,
    },
    /// Every letter position received its own die
    Spellable {
        word: String,
        /// Dice that carried flow, ascending by index
        dice: Vec<usize>,
        /// Die index assigned to each letter position, in word order
        assignment: Vec<usize>,
    },
}

impl Verdict {
    /// The word this verdict is about
    #[must_use]
    pub fn word(&self) -> &str {
        match self {
            Self::Unspellable { word, .. } | Self::Spellable { word, .. } => word,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_spellable(&self) -> bool {
        matches!(self, Self::Spellable { .. })
    }

    /// Dice used to spell the word (empty when unspellable)
    #[must_use]
    pub fn dice_used(&self) -> &[usize] {
        match self {
            Self::Spellable { dice, .. } => dice,
            Self::Unspellable { .. } => &[],
        }
    }

    /// Letter-to-die assignment, if the word is spellable
    #[must_use]
    pub fn assignment(&self) -> Option<&[usize]> {
        match self {
            Self::Spellable { assignment, .. } => Some(assignment),
            Self::Unspellable { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spellable_accessors() {
        let verdict = Verdict::Spellable {
            word: "AB".to_string(),
            dice: vec![0, 1],
            assignment: vec![0, 1],
        };
        assert!(verdict.is_spellable());
        assert_eq!(verdict.word(), "AB");
        assert_eq!(verdict.dice_used(), &[0, 1]);
        assert_eq!(verdict.assignment(), Some(&[0, 1][..]));
    }

    #[test]
    fn unspellable_accessors() {
        let verdict = Verdict::Unspellable {
            word: "AA".to_string(),
            flow: 1,
        };
        assert!(!verdict.is_spellable());
        assert_eq!(verdict.word(), "AA");
        assert!(verdict.dice_used().is_empty());
        assert!(verdict.assignment().is_none());
    }
}
