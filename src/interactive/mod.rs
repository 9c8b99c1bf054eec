//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};

use crate::config::Settings;
use crate::engine::EndlessPool;
use crate::engine::calendar::today;
use anyhow::{Context, Result};

/// Play in the TUI, today's puzzle or endless puzzles from `endless`
///
/// # Errors
///
/// Returns an error if the store or catalog cannot be opened, or the terminal
/// fails.
pub fn run_play(settings: &Settings, endless: Option<EndlessPool>) -> Result<()> {
    let store = settings.open_store()?;
    let catalog = settings
        .daily_catalog()
        .context("loading the daily catalog")?;
    let tracker = settings.tracker();

    let app = App::new(&catalog, &tracker, store, endless, today());
    let res = run_tui(app);
    tracker.end_session();
    res
}
