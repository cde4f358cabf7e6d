//! Automatic hangman player
//!
//! Used by the `solve` and `benchmark` commands.

mod frequency;

pub use frequency::{ENGLISH_FREQUENCY, FrequencySolver};
