//! Core domain types for word dice
//!
//! Plain data types shared by the solver, loaders and output layers.

mod die;
mod verdict;

pub use die::{Die, DieSet};
pub use verdict::Verdict;
