//! TUI application state and logic

use crate::analytics::Tracker;
use crate::commands::{HintResult, Round, describe};
use crate::core::Letter;
use crate::engine::{Catalog, EndlessPool, GuessOutcome};
use crate::output::formatters::{share_text, share_text_from_scores};
use crate::storage::{
    JsonFileStore, ResultStore, StatsStore, StoreError, StoredResult, StoredStats,
};
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{info, warn};

/// Messages kept in the panel
const MAX_MESSAGES: usize = 6;

/// Application state
pub struct App<'a> {
    pub round: Round<'a>,
    pub tracker: &'a Tracker,
    pub store: JsonFileStore,
    pub endless: Option<EndlessPool>,
    pub today: NaiveDate,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    /// Result of an earlier game today, shown instead of a new board
    pub previous: Option<StoredResult>,
    pub stats: Option<StoredStats>,
    pub share_text: Option<String>,
    pub should_quit: bool,
    rng: ThreadRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    GameOver,
    AlreadyPlayed,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        catalog: &Catalog,
        tracker: &'a Tracker,
        store: JsonFileStore,
        endless: Option<EndlessPool>,
        today: NaiveDate,
    ) -> Self {
        let mut rng = rand::rng();
        let previous = match endless {
            Some(_) => Ok(None),
            None => store.read_result(today),
        };
        let round = match (endless, &previous) {
            (Some(pool), _) => Round::endless(pool, &mut rng, today, tracker),
            (None, Ok(Some(_))) => Round::played_daily(catalog, today, tracker),
            (None, _) => Round::daily(catalog, today, tracker),
        };

        let mut app = Self {
            round,
            tracker,
            store,
            endless,
            today,
            input_mode: InputMode::Playing,
            messages: Vec::new(),
            previous: None,
            stats: None,
            share_text: None,
            should_quit: false,
            rng,
        };

        app.show_previous_result(previous);
        if app.input_mode == InputMode::Playing {
            app.add_message(
                "Type letters to open boxes. '?' for a hint.",
                MessageStyle::Info,
            );
        }
        app
    }

    fn show_previous_result(&mut self, previous: Result<Option<StoredResult>, StoreError>) {
        match previous {
            Ok(Some(result)) => {
                self.share_text = Some(share_text_from_scores(
                    result.day_number,
                    result.total_score,
                    &result.row_scores,
                ));
                self.stats = self.store.read_stats().ok();
                self.previous = Some(result);
                self.input_mode = InputMode::AlreadyPlayed;
                self.add_message(
                    "You already played today's pyramid. Come back tomorrow!",
                    MessageStyle::Info,
                );
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "could not read today's result");
                self.add_message(
                    &format!("Could not read saved result: {e}"),
                    MessageStyle::Error,
                );
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Esc {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Playing => match key.code {
                KeyCode::Char('?') => self.use_hint(),
                KeyCode::Char('!') => self.show_share(),
                KeyCode::Char(c) => self.guess_char(c),
                _ => {}
            },
            InputMode::GameOver | InputMode::AlreadyPlayed => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') if self.endless.is_some() => self.new_game(),
                KeyCode::Char('!' | 's') => self.show_share(),
                _ => {}
            },
        }
    }

    pub fn guess_char(&mut self, c: char) {
        let Some(letter) = Letter::parse(c) else {
            self.add_message(
                &format!("'{c}' is not a Turkish letter"),
                MessageStyle::Error,
            );
            return;
        };
        let outcome = self.round.guess(letter);
        self.after_guess(letter, &outcome);
    }

    pub fn use_hint(&mut self) {
        match self.round.hint(&mut self.rng) {
            HintResult::NoneLeft => self.add_message("No hints left", MessageStyle::Error),
            HintResult::NothingToReveal => {
                self.add_message("Nothing left to reveal on this row", MessageStyle::Info);
            }
            HintResult::Used { letter, outcome } => {
                self.add_message(&format!("Hint used: {letter}"), MessageStyle::Info);
                self.after_guess(letter, &outcome);
            }
        }
    }

    fn after_guess(&mut self, letter: Letter, outcome: &GuessOutcome) {
        let style = match outcome {
            GuessOutcome::Correct { .. }
            | GuessOutcome::RowComplete { .. }
            | GuessOutcome::GameComplete { .. } => MessageStyle::Success,
            GuessOutcome::Wrong { .. } | GuessOutcome::GameOverNoLives { .. } => {
                MessageStyle::Error
            }
            GuessOutcome::None | GuessOutcome::AlreadyGuessed => MessageStyle::Info,
        };
        self.add_message(&describe(letter, outcome), style);

        if outcome.ends_game() {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        self.input_mode = InputMode::GameOver;
        self.share_text = Some(share_text(self.round.state()));

        match self.round.record(&mut self.store) {
            Ok(Some(stats)) => {
                info!(streak = stats.current_streak, "daily result saved");
                self.stats = Some(stats);
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "could not save result");
                self.add_message(
                    &format!("Could not save result: {e}"),
                    MessageStyle::Error,
                );
            }
        }

        let help = if self.endless.is_some() {
            "Press 'n' for a new pyramid, 's' to share or 'q' to quit."
        } else {
            "Press 's' to share or 'q' to quit."
        };
        self.add_message(help, MessageStyle::Info);
    }

    pub fn show_share(&mut self) {
        let text = match self.input_mode {
            InputMode::AlreadyPlayed => self.share_text.clone(),
            InputMode::Playing | InputMode::GameOver => Some(self.round.share()),
        };
        if let Some(text) = text {
            self.share_text = Some(text);
            self.add_message("Share text ready below the board", MessageStyle::Success);
        }
    }

    pub fn new_game(&mut self) {
        let Some(pool) = self.endless else {
            return;
        };
        self.round = Round::endless(pool, &mut self.rng, self.today, self.tracker);
        self.input_mode = InputMode::Playing;
        self.share_text = None;
        self.messages.clear();
        self.add_message("New pyramid! Good luck.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
