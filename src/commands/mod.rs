//! Command implementations

pub mod spell;
pub mod summary;

pub use spell::{SpellConfig, run_spell};
pub use summary::{Shortfall, SummaryStatistics, run_summary};
