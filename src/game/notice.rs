//! Transient messages
//!
//! Hints are shown for a few seconds and then cleared. Expiry is a deadline
//! the UI checks on every tick; a passing deadline clears whatever notice is
//! showing at that moment, and starting a new round does not cancel it.

use crate::core::{Letter, Snapshot};
use std::time::{Duration, Instant};

/// How long a hint stays on screen
pub const HINT_DISPLAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStyle {
    Info,
    Hint,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub style: NoticeStyle,
}

impl Notice {
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: NoticeStyle::Info,
        }
    }

    #[must_use]
    pub fn hint(letter: Letter) -> Self {
        Self {
            text: format!("Hint: the word contains the letter \"{letter}\""),
            style: NoticeStyle::Hint,
        }
    }

    /// End-of-round message, or `None` while the round is still running
    #[must_use]
    pub fn outcome(snapshot: &Snapshot) -> Option<Self> {
        use crate::core::GameState;

        let word = snapshot.secret_word.as_deref()?;
        match snapshot.state {
            GameState::Won => Some(Self {
                text: format!("Congratulations! You guessed the word: {word}"),
                style: NoticeStyle::Success,
            }),
            GameState::Lost => Some(Self {
                text: format!("Game over! The word was: {word}"),
                style: NoticeStyle::Error,
            }),
            GameState::InProgress => None,
        }
    }
}

/// The single message slot shown under the board
#[derive(Debug, Default)]
pub struct NoticeBoard {
    current: Option<Notice>,
    clear_deadlines: Vec<Instant>,
}

impl NoticeBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notice until something replaces or clears it
    pub fn show(&mut self, notice: Notice) {
        self.current = Some(notice);
    }

    /// Show a notice and schedule a clear `ttl` after `now`
    pub fn show_for(&mut self, notice: Notice, ttl: Duration, now: Instant) {
        self.current = Some(notice);
        self.clear_deadlines.push(now + ttl);
    }

    /// Clear the slot immediately; scheduled clears stay pending
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Fire every deadline that has passed
    ///
    /// Returns true if anything fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.clear_deadlines.len();
        self.clear_deadlines.retain(|&deadline| deadline > now);

        let fired = self.clear_deadlines.len() != before;
        if fired {
            self.current = None;
        }
        fired
    }

    /// Time until the next scheduled clear, if any
    #[must_use]
    pub fn time_until_next_clear(&self, now: Instant) -> Option<Duration> {
        self.clear_deadlines
            .iter()
            .min()
            .map(|&deadline| deadline.saturating_duration_since(now))
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}
