//! Round state machine
//!
//! A `Round` is one play-through of a single secret word. It only moves
//! forward: letters are revealed, used letters accumulate, attempts run down,
//! and once the round is won or lost nothing changes until it is replaced.

use super::{Letter, SecretWord};

/// Wrong guesses allowed per round
pub const MAX_ATTEMPTS: u8 = 7;

/// Display marker for an unrevealed position
pub const PLACEHOLDER: char = '_';

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// True for `Won` and `Lost`
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One round of hangman
#[derive(Debug, Clone)]
pub struct Round {
    secret: SecretWord,
    revealed: Vec<Option<Letter>>,
    used_letters: Vec<Letter>,
    remaining_attempts: u8,
    state: GameState,
}

impl Round {
    /// Start a fresh round for `secret`
    ///
    /// # Examples
    /// ```
    /// use sql_hangman::core::{GameState, Letter, Round, SecretWord};
    ///
    /// let mut round = Round::new(SecretWord::new("SQL").unwrap());
    /// round.guess(Letter::new('q').unwrap());
    ///
    /// let snapshot = round.snapshot();
    /// assert_eq!(snapshot.revealed_display(), "_ Q _");
    /// assert_eq!(snapshot.state, GameState::InProgress);
    /// assert_eq!(snapshot.secret_word, None);
    /// ```
    #[must_use]
    pub fn new(secret: SecretWord) -> Self {
        let revealed = vec![None; secret.len()];
        Self {
            secret,
            revealed,
            used_letters: Vec::new(),
            remaining_attempts: MAX_ATTEMPTS,
            state: GameState::InProgress,
        }
    }

    /// Apply a guess
    ///
    /// Returns `false` without touching anything when the round is over or
    /// the letter was already used. Otherwise every position holding the
    /// letter is revealed, a miss costs one attempt, and the state is
    /// re-evaluated (win before loss).
    pub fn guess(&mut self, letter: Letter) -> bool {
        if self.state.is_over() || self.has_used(letter) {
            return false;
        }

        self.used_letters.push(letter);

        let positions = self.secret.positions_of(letter);
        if positions.is_empty() {
            self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
        } else {
            for &i in positions {
                self.revealed[i] = Some(letter);
            }
        }

        self.state = if self.revealed.iter().all(Option::is_some) {
            GameState::Won
        } else if self.remaining_attempts == 0 {
            GameState::Lost
        } else {
            GameState::InProgress
        };

        true
    }

    /// Distinct letters still hidden in the word, in order of first appearance
    ///
    /// Empty once the round is over.
    #[must_use]
    pub fn hint_candidates(&self) -> Vec<Letter> {
        if self.state.is_over() {
            return Vec::new();
        }

        let mut hidden = Vec::new();
        for (slot, &letter) in self.revealed.iter().zip(self.secret.letters()) {
            if slot.is_none() && !hidden.contains(&letter) {
                hidden.push(letter);
            }
        }
        hidden
    }

    /// Read-only view for presentation code
    ///
    /// The secret word is only included once the round is over.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            revealed: self.revealed.clone(),
            remaining_attempts: self.remaining_attempts,
            used_letters: self.used_letters.clone(),
            state: self.state,
            secret_word: self
                .state
                .is_over()
                .then(|| self.secret.text().to_string()),
        }
    }

    #[inline]
    #[must_use]
    pub fn has_used(&self, letter: Letter) -> bool {
        self.used_letters.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> u8 {
        self.remaining_attempts
    }

    #[inline]
    #[must_use]
    pub fn secret(&self) -> &SecretWord {
        &self.secret
    }
}

/// What callers see after each operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub revealed: Vec<Option<Letter>>,
    pub remaining_attempts: u8,
    pub used_letters: Vec<Letter>,
    pub state: GameState,
    pub secret_word: Option<String>,
}

impl Snapshot {
    /// Revealed letters separated by spaces, `_` for hidden positions
    #[must_use]
    pub fn revealed_display(&self) -> String {
        self.revealed
            .iter()
            .map(|slot| slot.map_or(PLACEHOLDER, Letter::as_char).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Used letters in the order they were guessed, comma separated
    #[must_use]
    pub fn used_letters_display(&self) -> String {
        self.used_letters
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Wrong guesses made so far
    #[inline]
    #[must_use]
    pub const fn misses(&self) -> u8 {
        MAX_ATTEMPTS - self.remaining_attempts
    }

    /// True if `letter` was guessed and is in the word
    ///
    /// A correct guess reveals every occurrence, so this never needs the
    /// secret word.
    #[must_use]
    pub fn is_hit(&self, letter: Letter) -> bool {
        self.revealed.contains(&Some(letter))
    }

    #[must_use]
    pub fn is_used(&self, letter: Letter) -> bool {
        self.used_letters.contains(&letter)
    }
}
