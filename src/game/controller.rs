//! Game controller
//!
//! Owns the word list, the random source and the current round. This is the
//! single entry point presentation code talks to.

use crate::core::{Letter, Round, SecretWord, Snapshot};
use log::{debug, info};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Error type for building a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    EmptyWordList,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list contains no usable words"),
        }
    }
}

impl std::error::Error for GameError {}

/// A hangman session: one live round at a time
pub struct Game<R: Rng = StdRng> {
    words: Vec<SecretWord>,
    round: Round,
    rng: R,
}

impl Game<StdRng> {
    /// Create a game seeded from the operating system
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if `words` is empty.
    pub fn new(words: Vec<SecretWord>) -> Result<Self, GameError> {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Create a game with a reproducible sequence of words and hints
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if `words` is empty.
    pub fn with_seed(words: Vec<SecretWord>, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Create a game using the given random source and start the first round
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use sql_hangman::core::{GameState, SecretWord};
    /// use sql_hangman::game::Game;
    ///
    /// let words = vec![SecretWord::new("SQL").unwrap()];
    /// let mut game = Game::with_seed(words, 7).unwrap();
    ///
    /// game.guess_letter('s');
    /// game.guess_letter('q');
    /// let snapshot = game.guess_letter('l');
    /// assert_eq!(snapshot.state, GameState::Won);
    /// assert_eq!(snapshot.secret_word.as_deref(), Some("SQL"));
    /// ```
    pub fn with_rng(words: Vec<SecretWord>, mut rng: R) -> Result<Self, GameError> {
        let first = words.choose(&mut rng).cloned().ok_or(GameError::EmptyWordList)?;
        debug!("Starting first round ({} letters)", first.len());

        Ok(Self {
            words,
            round: Round::new(first),
            rng,
        })
    }

    /// Replace the current round with a fresh one on a random word
    ///
    /// Works the same whether the previous round was won, lost or unfinished.
    pub fn start_round(&mut self) -> Snapshot {
        let index = self.rng.random_range(0..self.words.len());
        let secret = self.words[index].clone();
        debug!("Starting new round ({} letters)", secret.len());

        self.round = Round::new(secret);
        self.round.snapshot()
    }

    /// Guess a letter, case-insensitive
    ///
    /// Non-letters, repeated letters and guesses after the round is over are
    /// ignored and return the unchanged snapshot.
    pub fn guess_letter(&mut self, input: char) -> Snapshot {
        if let Ok(letter) = Letter::new(input) {
            self.guess(letter);
        }
        self.round.snapshot()
    }

    /// Guess an already-parsed letter; returns whether the round changed
    pub fn guess(&mut self, letter: Letter) -> bool {
        let applied = self.round.guess(letter);
        if applied && self.round.state().is_over() {
            info!(
                "Round finished: {:?} with {} attempts left",
                self.round.state(),
                self.round.remaining_attempts()
            );
        }
        applied
    }

    /// Pick one hidden letter at random
    ///
    /// Returns `None` once the round is over. Nothing about the round changes.
    pub fn get_hint(&mut self) -> Option<Letter> {
        self.round.hint_candidates().choose(&mut self.rng).copied()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.round.snapshot()
    }
}
