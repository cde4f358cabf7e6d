// Integration tests for sql_hangman
// These drive the public API the way the front ends do.

use sql_hangman::commands::{SolveConfig, run_simple, solve_word};
use sql_hangman::core::{GameState, MAX_ATTEMPTS, Snapshot};
use sql_hangman::game::{Game, HINT_DISPLAY, Notice, NoticeBoard};
use sql_hangman::wordlists::DATABASE_TERMS;
use sql_hangman::wordlists::loader::{words_from_lines, words_from_slice};
use std::io::Cursor;
use std::time::Instant;

fn sql_game(seed: u64) -> Game {
    Game::with_seed(words_from_slice(&["SQL"]), seed).unwrap()
}

fn revealed(snapshot: &Snapshot) -> Vec<String> {
    snapshot
        .revealed
        .iter()
        .map(|slot| slot.map_or("_".to_string(), |l| l.to_string()))
        .collect()
}

#[test]
fn test_sql_win_scenario() {
    let mut game = sql_game(1);

    let s = game.guess_letter('S');
    assert_eq!(revealed(&s), ["S", "_", "_"]);
    let q = game.guess_letter('Q');
    assert_eq!(revealed(&q), ["S", "Q", "_"]);
    let l = game.guess_letter('L');
    assert_eq!(revealed(&l), ["S", "Q", "L"]);

    assert_eq!(l.state, GameState::Won);
    assert_eq!(l.remaining_attempts, 7);
    assert_eq!(l.secret_word.as_deref(), Some("SQL"));
}

#[test]
fn test_sql_loss_scenario() {
    let mut game = sql_game(2);

    let mut last = game.snapshot();
    for c in ['B', 'C', 'D', 'E', 'F', 'G', 'H'] {
        let next = game.guess_letter(c);
        assert_eq!(next.remaining_attempts, last.remaining_attempts - 1);
        assert_eq!(next.revealed, last.revealed);
        last = next;
    }

    assert_eq!(last.remaining_attempts, 0);
    assert_eq!(last.state, GameState::Lost);
    assert_eq!(revealed(&last), ["_", "_", "_"]);
    assert_eq!(last.secret_word.as_deref(), Some("SQL"));
}

#[test]
fn test_hint_scenario() {
    let mut game = sql_game(3);
    game.guess_letter('S');
    let before = game.snapshot();

    for _ in 0..50 {
        let hint = game.get_hint().unwrap();
        assert!(
            matches!(hint.as_char(), 'Q' | 'L'),
            "hint {hint} was already revealed"
        );
    }

    let after = game.snapshot();
    assert_eq!(after.used_letters, before.used_letters);
    assert_eq!(after.remaining_attempts, before.remaining_attempts);
}

#[test]
fn test_hints_and_words_are_random() {
    let mut game = sql_game(12);
    game.guess_letter('S');
    let hints: Vec<char> = (0..200)
        .filter_map(|_| game.get_hint())
        .map(|l| l.as_char())
        .collect();
    assert!(hints.contains(&'Q') && hints.contains(&'L'));

    let mut game = Game::with_seed(words_from_slice(DATABASE_TERMS), 13).unwrap();
    let mut lengths: Vec<usize> = (0..200).map(|_| game.start_round().revealed.len()).collect();
    lengths.sort_unstable();
    lengths.dedup();
    assert!(lengths.len() > 1);
}

#[test]
fn test_terminal_state_is_frozen() {
    let mut game = sql_game(4);
    for c in "SQL".chars() {
        game.guess_letter(c);
    }
    let won = game.snapshot();

    for c in 'A'..='Z' {
        assert_eq!(game.guess_letter(c), won);
    }
    assert_eq!(game.get_hint(), None);
}

#[test]
fn test_start_round_after_terminal_resets() {
    let mut game = Game::with_seed(words_from_slice(DATABASE_TERMS), 5).unwrap();

    for outcome_letters in ["ETAOINSHRDLCUMWFGYPBVKJXQZ", "ZQXJKVBPYGFWMUCLDRHSNIOATE"] {
        for c in outcome_letters.chars() {
            game.guess_letter(c);
        }
        assert!(game.snapshot().state.is_over());

        let fresh = game.start_round();
        assert_eq!(fresh.state, GameState::InProgress);
        assert_eq!(fresh.remaining_attempts, MAX_ATTEMPTS);
        assert!(fresh.used_letters.is_empty());
        assert!(fresh.revealed.iter().all(Option::is_none));
        assert_eq!(fresh.secret_word, None);
    }
}

#[test]
fn test_invariants_hold_through_random_play() {
    let mut game = Game::with_seed(words_from_slice(DATABASE_TERMS), 6).unwrap();

    for round in 0..20 {
        let mut last = game.start_round();
        let len = last.revealed.len();

        // A different letter order each round
        let offset = round % 26;
        let letters: Vec<char> = (0..26u8)
            .map(|i| (b'A' + (i + offset as u8) % 26) as char)
            .collect();

        for c in letters {
            let next = game.guess_letter(c);
            assert_eq!(next.revealed.len(), len);
            assert!(next.remaining_attempts <= last.remaining_attempts);

            let mut unique = next.used_letters.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), next.used_letters.len());

            last = next;
        }
        assert!(last.state.is_over());
    }
}

#[test]
fn test_hint_expiry_with_new_round() {
    let mut game = sql_game(7);
    let mut board = NoticeBoard::new();
    let start = Instant::now();

    let hint = game.get_hint().unwrap();
    board.show_for(Notice::hint(hint), HINT_DISPLAY, start);
    assert!(board.current().is_some());

    game.start_round();
    board.clear();
    board.show(Notice::info("fresh round"));

    board.tick(start + HINT_DISPLAY);
    assert!(board.current().is_none());
}

#[test]
fn test_simple_mode_full_game() {
    let mut game = sql_game(8);
    let mut out = Vec::new();

    run_simple(&mut game, Cursor::new("x\ns\nq\nhint\nl\nn\n"), &mut out).unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Used: X, S"));
    assert!(output.contains("Hint: the word contains the letter \"L\""));
    assert!(output.contains("You guessed the word: SQL"));
    assert!(output.contains("Thanks for playing"));
}

#[test]
fn test_custom_word_list_game() {
    let words = words_from_lines("redis\n\nnot valid\ncassandra\n");
    assert_eq!(words.len(), 2);

    let mut game = Game::with_seed(words, 9).unwrap();
    let snapshot = game.start_round();
    assert!(matches!(snapshot.revealed.len(), 5 | 9));
}

#[test]
fn test_solver_plays_every_term() {
    let words = words_from_slice(DATABASE_TERMS);
    for &term in DATABASE_TERMS {
        let result = solve_word(SolveConfig::new(term.to_lowercase()), &words).unwrap();
        assert!(result.success(), "solver lost on {term}");
        assert_eq!(result.target, term);
    }
}
