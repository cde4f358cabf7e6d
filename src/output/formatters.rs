//! Formatting utilities for terminal output

use crate::core::{GameState, Letter, MAX_ATTEMPTS, Snapshot};

/// Figure for each number of misses, from a fresh round to a lost one
pub const FIGURES: [&str; MAX_ATTEMPTS as usize + 1] =
    ["🧠", "😊", "😐", "😟", "😨", "😰", "😵", "💀"];

/// On-screen keyboard, alphabetical, split in two rows
pub const KEYBOARD_ROWS: [&str; 2] = ["ABCDEFGHIJKLM", "NOPQRSTUVWXYZ"];

/// Figure for the given number of remaining attempts
#[must_use]
pub fn figure(remaining_attempts: u8) -> &'static str {
    let misses = usize::from(MAX_ATTEMPTS.saturating_sub(remaining_attempts));
    FIGURES[misses.min(FIGURES.len() - 1)]
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining attempts as a bar
#[must_use]
pub fn attempts_bar(remaining_attempts: u8, width: usize) -> String {
    let remaining = usize::from(remaining_attempts.min(MAX_ATTEMPTS));
    let filled = remaining * width / usize::from(MAX_ATTEMPTS);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// How a keyboard key should look for the current snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Unused,
    Hit,
    Miss,
}

#[must_use]
pub fn key_state(snapshot: &Snapshot, letter: Letter) -> KeyState {
    if !snapshot.is_used(letter) {
        KeyState::Unused
    } else if snapshot.is_hit(letter) {
        KeyState::Hit
    } else {
        KeyState::Miss
    }
}

/// Keyboard row as plain text, used keys replaced by `·`
#[must_use]
pub fn keyboard_row_text(snapshot: &Snapshot, row: &str) -> String {
    row.chars()
        .filter_map(|c| Letter::new(c).ok())
        .map(|letter| match key_state(snapshot, letter) {
            KeyState::Unused => letter.as_char(),
            KeyState::Hit | KeyState::Miss => '·',
        })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The full board as plain lines, for line-oriented output
#[must_use]
pub fn board_lines(snapshot: &Snapshot) -> Vec<String> {
    let mut lines = vec![
        format!("{}  {}", figure(snapshot.remaining_attempts), snapshot.revealed_display()),
        format!(
            "Attempts: [{}] {}/{}",
            attempts_bar(snapshot.remaining_attempts, MAX_ATTEMPTS as usize),
            snapshot.remaining_attempts,
            MAX_ATTEMPTS
        ),
    ];

    if snapshot.used_letters.is_empty() {
        lines.push("Used: -".to_string());
    } else {
        lines.push(format!("Used: {}", snapshot.used_letters_display()));
    }

    if snapshot.state == GameState::InProgress {
        for row in KEYBOARD_ROWS {
            lines.push(format!("  {}", keyboard_row_text(snapshot, row)));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Round, SecretWord};

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn figure_progression() {
        assert_eq!(figure(7), "🧠");
        assert_eq!(figure(6), "😊");
        assert_eq!(figure(1), "😵");
        assert_eq!(figure(0), "💀");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn attempts_bar_partial() {
        assert_eq!(attempts_bar(3, 7), "███░░░░");
    }

    #[test]
    fn keyboard_covers_alphabet() {
        let keys: String = KEYBOARD_ROWS.concat();
        assert_eq!(keys, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn key_states() {
        let mut round = Round::new(SecretWord::new("SQL").unwrap());
        round.guess(letter('S'));
        round.guess(letter('A'));
        let snapshot = round.snapshot();

        assert_eq!(key_state(&snapshot, letter('S')), KeyState::Hit);
        assert_eq!(key_state(&snapshot, letter('A')), KeyState::Miss);
        assert_eq!(key_state(&snapshot, letter('Q')), KeyState::Unused);
        assert_eq!(keyboard_row_text(&snapshot, "ABC"), "· B C");
    }

    #[test]
    fn board_lines_in_progress() {
        let mut round = Round::new(SecretWord::new("SQL").unwrap());
        round.guess(letter('Q'));
        round.guess(letter('Z'));
        let lines = board_lines(&round.snapshot());

        assert_eq!(lines[0], "😊  _ Q _");
        assert_eq!(lines[1], "Attempts: [██████░] 6/7");
        assert_eq!(lines[2], "Used: Q, Z");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn board_lines_hide_keyboard_when_over() {
        let mut round = Round::new(SecretWord::new("SQL").unwrap());
        for c in "SQL".chars() {
            round.guess(letter(c));
        }
        let lines = board_lines(&round.snapshot());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "🧠  S Q L");
    }
}
