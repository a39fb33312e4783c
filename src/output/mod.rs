//! Terminal output formatting
//!
//! Result lines, network dumps and pretty-printed summaries.

pub mod display;
pub mod formatters;

pub use display::print_summary;
pub use formatters::{format_network, format_verdict};
