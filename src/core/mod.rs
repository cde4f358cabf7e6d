//! Core domain types for hangman
//!
//! Pure, UI-free types: letters, secret words and the round state machine.

mod letter;
mod round;
mod word;

pub use letter::{Letter, LetterError};
pub use round::{GameState, MAX_ATTEMPTS, PLACEHOLDER, Round, Snapshot};
pub use word::{SecretWord, WordError};
