//! Daily result and aggregate statistics persistence
//!
//! The engine never touches storage. Front ends call
//! [`record_daily_result`] once a daily game is over; it writes the day's
//! result at most once and folds it into the running statistics.

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use crate::core::ROW_COUNT;
use crate::engine::calendar::{date_key, yesterday_of};
use crate::engine::{GameMode, GameState};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

/// Error type for store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One finished daily game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResult {
    pub day_number: i32,
    pub total_score: u32,
    pub row_scores: [u32; ROW_COUNT],
    /// `YYYY-MM-DD`
    pub date: String,
}

impl StoredResult {
    #[must_use]
    pub fn from_state(state: &GameState, date: NaiveDate) -> Self {
        Self {
            day_number: state.day_number(),
            total_score: state.total_score(),
            row_scores: *state.row_scores(),
            date: date_key(date),
        }
    }
}

/// Running totals across daily games
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredStats {
    pub games_played: u32,
    pub total_points: u64,
    /// Rounded to one decimal
    pub average_score: f64,
    pub current_streak: u32,
    pub max_streak: u32,
}

impl StoredStats {
    /// Statistics after one more finished game
    ///
    /// # Examples
    /// ```
    /// use piramit::storage::StoredStats;
    ///
    /// let stats = StoredStats::default().updated_with(100, false);
    /// let stats = stats.updated_with(51, true);
    /// assert_eq!(stats.games_played, 2);
    /// assert_eq!(stats.average_score, 75.5);
    /// assert_eq!(stats.current_streak, 2);
    /// ```
    #[must_use]
    pub fn updated_with(&self, score: u32, played_yesterday: bool) -> Self {
        let games_played = self.games_played + 1;
        let total_points = self.total_points + u64::from(score);
        let average_score = (total_points as f64 / f64::from(games_played) * 10.0).round() / 10.0;
        let current_streak = if played_yesterday {
            self.current_streak + 1
        } else {
            1
        };

        Self {
            games_played,
            total_points,
            average_score,
            current_streak,
            max_streak: self.max_streak.max(current_streak),
        }
    }
}

/// Per-day result records keyed by calendar date
pub trait ResultStore {
    /// # Errors
    /// Returns `StoreError` if the backing store cannot be read.
    fn read_result(&self, date: NaiveDate) -> Result<Option<StoredResult>, StoreError>;

    /// # Errors
    /// Returns `StoreError` if the backing store cannot be written.
    fn write_result(&mut self, date: NaiveDate, result: &StoredResult) -> Result<(), StoreError>;
}

/// The aggregate statistics record
pub trait StatsStore {
    /// Zeroed statistics if nothing has been stored yet
    ///
    /// # Errors
    /// Returns `StoreError` if the backing store cannot be read.
    fn read_stats(&self) -> Result<StoredStats, StoreError>;

    /// # Errors
    /// Returns `StoreError` if the backing store cannot be written.
    fn write_stats(&mut self, stats: &StoredStats) -> Result<(), StoreError>;
}

/// Whether a result exists for `date`
///
/// # Errors
/// Propagates read failures from the store.
pub fn has_played<S>(store: &S, date: NaiveDate) -> Result<bool, StoreError>
where
    S: ResultStore + ?Sized,
{
    Ok(store.read_result(date)?.is_some())
}

/// Persist a finished daily game and update statistics
///
/// Returns the new statistics, or `None` when nothing was recorded: the
/// game is not a finished daily one, or a result for `today` already
/// exists. The first result written for a date is kept, so replaying a
/// completion never counts twice.
///
/// # Errors
/// Propagates store failures.
pub fn record_daily_result<S>(
    store: &mut S,
    state: &GameState,
    today: NaiveDate,
) -> Result<Option<StoredStats>, StoreError>
where
    S: ResultStore + StatsStore + ?Sized,
{
    if state.mode() != GameMode::Daily || !state.is_complete() {
        debug!(mode = state.mode().as_str(), "not a finished daily game, skipping");
        return Ok(None);
    }
    if has_played(store, today)? {
        debug!(date = %date_key(today), "result already recorded");
        return Ok(None);
    }

    let result = StoredResult::from_state(state, today);
    store.write_result(today, &result)?;

    let played_yesterday = has_played(store, yesterday_of(today))?;
    let stats = store
        .read_stats()?
        .updated_with(result.total_score, played_yesterday);
    store.write_stats(&stats)?;

    info!(
        day = result.day_number,
        score = result.total_score,
        streak = stats.current_streak,
        "recorded daily result"
    );
    Ok(Some(stats))
}
