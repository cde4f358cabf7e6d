//! SQL Hangman
//!
//! Hangman over a list of database terms, with a terminal UI, a line-based
//! mode and a letter-frequency solver.
//!
//! # Quick Start
//!
//! ```rust
//! use sql_hangman::core::GameState;
//! use sql_hangman::game::Game;
//! use sql_hangman::wordlists::{DATABASE_TERMS, loader::words_from_slice};
//!
//! let mut game = Game::with_seed(words_from_slice(DATABASE_TERMS), 42).unwrap();
//!
//! let snapshot = game.guess_letter('e');
//! println!("{} ({} attempts left)", snapshot.revealed_display(), snapshot.remaining_attempts);
//!
//! if let Some(hint) = game.get_hint() {
//!     println!("Try {hint}");
//! }
//! assert_eq!(game.snapshot().state, GameState::InProgress);
//! ```

// Core domain types
pub mod core;

// Round control shared by the front ends
pub mod game;

// Automatic player
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
