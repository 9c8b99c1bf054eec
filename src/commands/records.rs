//! Share and stats commands
//!
//! Both read what earlier daily games stored; neither starts a game.

use crate::analytics::{EventKind, Tracker};
use crate::engine::calendar::date_key;
use crate::output::formatters::share_text_from_scores;
use crate::storage::{ResultStore, StatsStore, StoredStats};
use anyhow::{Result, anyhow};
use chrono::NaiveDate;

/// Share text for the result stored on `date`
///
/// # Errors
///
/// Returns an error if the store cannot be read or nothing is stored for
/// `date`.
pub fn share_for_date<S>(store: &S, date: NaiveDate, tracker: &Tracker) -> Result<String>
where
    S: ResultStore + ?Sized,
{
    let result = store
        .read_result(date)?
        .ok_or_else(|| anyhow!("No daily result stored for {}", date_key(date)))?;

    let day = result.day_number;
    tracker.track(EventKind::Share, |e| e.with_day(day));
    Ok(share_text_from_scores(
        result.day_number,
        result.total_score,
        &result.row_scores,
    ))
}

/// Aggregate statistics
///
/// # Errors
///
/// Returns an error if the stats record exists but cannot be read.
pub fn load_stats<S: StatsStore + ?Sized>(store: &S) -> Result<StoredStats> {
    Ok(store.read_stats()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StoredResult};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    #[test]
    fn share_reads_stored_result() {
        let mut store = MemoryStore::new();
        store
            .write_result(
                date(),
                &StoredResult {
                    day_number: 250,
                    total_score: 150,
                    row_scores: [5, 10, 15, 20, 25, 30],
                    date: "2026-10-14".to_string(),
                },
            )
            .unwrap();

        let text = share_for_date(&store, date(), &Tracker::disabled()).unwrap();
        assert_eq!(text, "🔺 Piramit #250\n📊 Skor: 150/150\n\n🟩🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_without_result_is_error() {
        let store = MemoryStore::new();
        let err = share_for_date(&store, date(), &Tracker::disabled()).unwrap_err();
        assert!(err.to_string().contains("2026-10-14"));
    }

    #[test]
    fn stats_default_to_zero() {
        assert_eq!(load_stats(&MemoryStore::new()).unwrap(), StoredStats::default());
    }
}
