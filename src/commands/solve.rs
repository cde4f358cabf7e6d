//! Word solving command
//!
//! Plays a round against a chosen secret word and returns every guess made.

use crate::core::{GameState, Letter, Round, SecretWord, WordError};
use crate::solver::FrequencySolver;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self { target }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub state: GameState,
    pub remaining_attempts: u8,
    pub misses: u8,
    pub steps: Vec<GuessStep>,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.state == GameState::Won
    }
}

/// A single letter guess in the solution
pub struct GuessStep {
    pub letter: Letter,
    pub hit: bool,
    pub candidates_before: usize,
    pub revealed: String,
    pub remaining_attempts: u8,
}

/// Play `config.target` to the end using the frequency solver over `words`
///
/// The target does not have to be in `words`; the solver falls back to
/// plain English letter frequency when nothing in the list fits.
///
/// # Errors
///
/// Returns an error if the target is empty or contains non-letters.
pub fn solve_word(config: SolveConfig, words: &[SecretWord]) -> Result<SolveResult, WordError> {
    let secret = SecretWord::new(config.target)?;
    let solver = FrequencySolver::new(words);
    let mut round = Round::new(secret);
    let mut steps = Vec::new();

    while round.state() == GameState::InProgress {
        let snapshot = round.snapshot();
        let candidates_before = solver.candidates(&snapshot).len();

        let Some(letter) = solver.next_letter(&snapshot) else {
            break;
        };
        let attempts_before = round.remaining_attempts();
        round.guess(letter);

        let after = round.snapshot();
        steps.push(GuessStep {
            letter,
            hit: after.remaining_attempts == attempts_before,
            candidates_before,
            revealed: after.revealed_display(),
            remaining_attempts: after.remaining_attempts,
        });
    }

    let last = round.snapshot();
    Ok(SolveResult {
        target: round.secret().text().to_string(),
        state: last.state,
        remaining_attempts: last.remaining_attempts,
        misses: last.misses(),
        steps,
    })
}
