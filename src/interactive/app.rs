//! TUI application state and logic

use crate::core::GameState;
use crate::game::{Game, HINT_DISPLAY, Notice, NoticeBoard};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long to wait for input when no hint is waiting to expire
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Application state
pub struct App<R: Rng = StdRng> {
    pub game: Game<R>,
    pub notices: NoticeBoard,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// Results for this session only
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(game: Game<R>) -> Self {
        Self {
            game,
            notices: NoticeBoard::new(),
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Guess a letter and record the outcome if it ended the round
    pub fn guess(&mut self, c: char) {
        let before = self.game.snapshot();
        let after = self.game.guess_letter(c);

        if before.state == GameState::InProgress && after.state.is_over() {
            self.stats.total_games += 1;
            if after.state == GameState::Won {
                self.stats.games_won += 1;
            }
            if let Some(notice) = Notice::outcome(&after) {
                self.notices.show(notice);
            }
        }
    }

    /// Show a hint for a few seconds
    pub fn hint(&mut self, now: Instant) {
        if let Some(letter) = self.game.get_hint() {
            self.notices.show_for(Notice::hint(letter), HINT_DISPLAY, now);
        }
    }

    pub fn new_round(&mut self) {
        self.game.start_round();
        self.notices.clear();
    }

    /// Expire any hint whose time is up
    pub fn tick(&mut self, now: Instant) {
        self.notices.tick(now);
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let over = self.game.snapshot().state.is_over();

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_round(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter if over => self.new_round(),
            KeyCode::Char('?') | KeyCode::F(1) => self.hint(now),
            KeyCode::Char(c) if c.is_ascii_alphabetic() && !ctrl => self.guess(c),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    debug!("Terminal setup complete");

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = app
            .notices
            .time_until_next_clear(Instant::now())
            .map_or(IDLE_POLL, |wait| wait.min(IDLE_POLL));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
