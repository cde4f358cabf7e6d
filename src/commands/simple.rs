//! Simple interactive CLI mode
//!
//! Line-based hangman without the TUI. Reads from any `BufRead` and writes to
//! any `Write`, so it runs the same against stdin or a test buffer.

use crate::game::{Game, Notice};
use crate::output::formatters::board_lines;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What a line of input asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Guess(char),
    Hint,
    NewRound,
    Quit,
    Unknown,
}

fn parse_command(input: &str) -> Command {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "quit" | "exit" => Command::Quit,
        "new" | "restart" => Command::NewRound,
        "hint" | "?" => Command::Hint,
        _ => {
            let mut chars = input.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Command::Guess(c),
                _ => Command::Unknown,
            }
        }
    }
}

/// Run the simple interactive CLI mode
///
/// Returns when the player quits, declines another round, or input ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<G, R, W>(game: &mut Game<G>, mut reader: R, mut out: W) -> io::Result<()>
where
    G: Rng,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(out, "║        SQL Hangman - Database Terms          ║")?;
    writeln!(out, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the database term one letter at a time.")?;
    writeln!(out, "Commands: 'hint' for a hint, 'new' for a new word, 'quit' to exit\n")?;

    write_board(&mut out, game)?;

    loop {
        let Some(line) = read_line(&mut reader, &mut out, "Letter")? else {
            return Ok(());
        };

        match parse_command(&line) {
            Command::Quit => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            Command::NewRound => {
                game.start_round();
                writeln!(out, "\n🔄 New word!\n")?;
                write_board(&mut out, game)?;
            }
            Command::Hint => match game.get_hint() {
                Some(letter) => writeln!(out, "{}", Notice::hint(letter).text.yellow())?,
                None => writeln!(out, "No hint available.")?,
            },
            Command::Unknown => {
                writeln!(out, "Enter a single letter, 'hint', 'new' or 'quit'.")?;
            }
            Command::Guess(c) => {
                if !c.is_ascii_alphabetic() {
                    writeln!(out, "'{c}' is not a letter.")?;
                    continue;
                }

                let before = game.snapshot();
                let after = game.guess_letter(c);
                if after == before {
                    writeln!(out, "You already tried '{}'.", c.to_ascii_uppercase())?;
                    continue;
                }

                writeln!(out)?;
                write_board(&mut out, game)?;

                if let Some(notice) = Notice::outcome(&after) {
                    let text = if after.state == crate::core::GameState::Won {
                        notice.text.green().bold()
                    } else {
                        notice.text.red().bold()
                    };
                    writeln!(out, "\n{text}\n")?;

                    if !play_again(&mut reader, &mut out)? {
                        writeln!(out, "\n👋 Thanks for playing!\n")?;
                        return Ok(());
                    }
                    game.start_round();
                    writeln!(out, "\n🔄 New word!\n")?;
                    write_board(&mut out, game)?;
                }
            }
        }
    }
}

fn write_board<G: Rng, W: Write>(out: &mut W, game: &Game<G>) -> io::Result<()> {
    for line in board_lines(&game.snapshot()) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn play_again<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> io::Result<bool> {
    let answer = read_line(reader, out, "Play again? (yes/no)")?;
    Ok(matches!(
        answer.as_deref().map(str::to_lowercase).as_deref(),
        Some("yes" | "y")
    ))
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn sql_game() -> Game {
        Game::with_seed(words_from_slice(&["SQL"]), 11).unwrap()
    }

    fn run(game: &mut Game, input: &str) -> String {
        let mut out = Vec::new();
        run_simple(game, Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command(" EXIT "), Command::Quit);
        assert_eq!(parse_command("new"), Command::NewRound);
        assert_eq!(parse_command("hint"), Command::Hint);
        assert_eq!(parse_command("?"), Command::Hint);
        assert_eq!(parse_command("Q"), Command::Guess('q'));
        assert_eq!(parse_command("n"), Command::Guess('n'));
        assert_eq!(parse_command("7"), Command::Guess('7'));
        assert_eq!(parse_command("sql"), Command::Unknown);
        assert_eq!(parse_command(""), Command::Unknown);
    }

    #[test]
    fn immediate_quit() {
        let mut game = sql_game();
        let output = run(&mut game, "quit\n");
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn end_of_input_returns() {
        let mut game = sql_game();
        let output = run(&mut game, "s\n");
        assert!(output.contains("S _ _"));
    }

    #[test]
    fn win_then_decline() {
        let mut game = sql_game();
        let output = run(&mut game, "s\nq\nl\nno\n");
        assert!(output.contains("You guessed the word: SQL"));
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn loss_then_play_again() {
        let mut game = sql_game();
        let output = run(&mut game, "a\nb\nc\nd\ne\nf\ng\nyes\nquit\n");
        assert!(output.contains("The word was: SQL"));
        assert!(output.contains("New word!"));
        assert!(game.snapshot().used_letters.is_empty());
    }

    #[test]
    fn repeated_and_invalid_input_leave_game_alone() {
        let mut game = sql_game();
        let output = run(&mut game, "x\nx\n5\nselect\n");
        assert!(output.contains("already tried 'X'"));
        assert!(output.contains("'5' is not a letter"));
        assert!(output.contains("Enter a single letter"));

        let snapshot = game.snapshot();
        assert_eq!(snapshot.used_letters_display(), "X");
        assert_eq!(snapshot.remaining_attempts, 6);
    }

    #[test]
    fn hint_does_not_use_a_letter() {
        let mut game = sql_game();
        let output = run(&mut game, "hint\n");
        assert!(output.contains("Hint: the word contains the letter"));
        assert!(game.snapshot().used_letters.is_empty());
    }
}
