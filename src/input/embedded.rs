//! Embedded dice sets
//!
//! Dice sets compiled into the binary at build time.

// Include generated dice sets from build script
include!(concat!(env!("OUT_DIR"), "/classic_dice.rs"));
