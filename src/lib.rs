//! Word Dice
//!
//! Decides whether words can be spelled with a set of lettered dice, one die per
//! letter, by computing a maximum flow through a unit-capacity network.
//!
//! # Quick Start
//!
//! ```rust
//! use word_dice::core::DieSet;
//! use word_dice::solver::Speller;
//!
//! let dice = DieSet::from_faces(["AEIOU", "BCDFG"]);
//! let speller = Speller::new(&dice);
//!
//! let verdict = speller.spell("AB");
//! assert!(verdict.is_spellable());
//! assert_eq!(verdict.dice_used(), &[0, 1]);
//!
//! // Only one die shows A
//! assert!(!speller.spell("AA").is_spellable());
//! ```

// Core domain types
pub mod core;

// Flow network and max-flow solving
pub mod solver;

// Dice and word inputs
pub mod input;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
