//! TUI rendering with ratatui
//!
//! Board, keyboard and status bar for the hangman interface.

use super::app::App;
use crate::core::{GameState, Letter, MAX_ATTEMPTS, Snapshot};
use crate::game::NoticeStyle;
use crate::output::formatters::{KEYBOARD_ROWS, KeyState, figure, key_state};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let snapshot = app.game.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board
            Constraint::Length(3), // Attempts
            Constraint::Length(4), // Keyboard
            Constraint::Length(3), // Message
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, &snapshot, chunks[1]);
    render_attempts(f, &snapshot, chunks[2]);
    render_keyboard(f, &snapshot, chunks[3]);
    render_message(f, app, chunks[4]);
    render_status(f, app, &snapshot, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🗄️  SQL HANGMAN - Database Terms")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let word_style = match snapshot.state {
        GameState::InProgress => Style::default().fg(Color::Yellow),
        GameState::Won => Style::default().fg(Color::Green),
        GameState::Lost => Style::default().fg(Color::Red),
    }
    .add_modifier(Modifier::BOLD);

    let used = if snapshot.used_letters.is_empty() {
        "-".to_string()
    } else {
        snapshot.used_letters_display()
    };

    let mut content = vec![
        Line::from(figure(snapshot.remaining_attempts)),
        Line::from(""),
        Line::from(Span::styled(snapshot.revealed_display(), word_style)),
        Line::from(""),
        Line::from(vec![
            Span::raw("Used letters: "),
            Span::styled(used, Style::default().fg(Color::Gray)),
        ]),
    ];

    if let Some(word) = &snapshot.secret_word {
        content.push(Line::from(vec![
            Span::raw("The word was: "),
            Span::styled(word.clone(), word_style),
        ]));
    }

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_attempts(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let remaining = snapshot.remaining_attempts;
    let color = match remaining {
        0..=2 => Color::Red,
        3..=4 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(f64::from(remaining) / f64::from(MAX_ATTEMPTS))
        .label(format!("{remaining}/{MAX_ATTEMPTS} attempts left"));

    f.render_widget(gauge, area);
}

fn render_keyboard(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .filter_map(|c| Letter::new(c).ok())
                .map(|letter| {
                    let style = match key_state(snapshot, letter) {
                        KeyState::Unused => Style::default().fg(Color::White),
                        KeyState::Hit => Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::DIM),
                        KeyState::Miss => Style::default()
                            .fg(Color::Red)
                            .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT),
                    };
                    Span::styled(format!(" {letter} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));

    f.render_widget(keyboard, area);
}

fn render_message<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (text, style) = app.notices.current().map_or_else(
        || (String::new(), Style::default()),
        |notice| {
            let color = match notice.style {
                NoticeStyle::Info => Color::White,
                NoticeStyle::Hint => Color::Rgb(255, 165, 0),
                NoticeStyle::Success => Color::Green,
                NoticeStyle::Error => Color::Red,
            };
            (
                notice.text.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        },
    );

    let message = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Message ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );

    f.render_widget(message, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, snapshot: &Snapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if snapshot.state.is_over() {
        "Enter: New word | Esc: Quit"
    } else {
        "A-Z: Guess | ?: Hint | Ctrl-N: New word | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered_text(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_placeholders_and_help() {
        let app = App::new(Game::with_seed(words_from_slice(&["SQL"]), 1).unwrap());
        let text = rendered_text(&app);

        assert!(text.contains("_ _ _"));
        assert!(text.contains("7/7 attempts left"));
        assert!(text.contains("?: Hint"));
    }

    #[test]
    fn renders_secret_after_loss() {
        let mut app = App::new(Game::with_seed(words_from_slice(&["SQL"]), 1).unwrap());
        for c in "abcdefg".chars() {
            app.guess(c);
        }
        let text = rendered_text(&app);

        assert!(text.contains("The word was: SQL"));
        assert!(text.contains("Enter: New word"));
    }
}
