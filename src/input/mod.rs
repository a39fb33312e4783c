//! Dice and word inputs
//!
//! File and stdin loaders plus dice sets embedded in the binary.

mod embedded;
pub mod loader;

pub use embedded::{CLASSIC_DICE, CLASSIC_DICE_COUNT};
