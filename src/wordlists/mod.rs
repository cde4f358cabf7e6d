//! Word lists for hangman
//!
//! Provides the embedded database-term list and loading of custom lists.

mod embedded;
pub mod loader;

pub use embedded::{DATABASE_TERMS, DATABASE_TERMS_COUNT};
