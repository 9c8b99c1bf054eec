//! In-memory store for tests and throwaway sessions

use super::{ResultStore, StatsStore, StoreError, StoredResult, StoredStats};
use chrono::NaiveDate;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    results: FxHashMap<NaiveDate, StoredResult>,
    stats: Option<StoredStats>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored daily results
    #[must_use]
    pub fn result_count(&self) -> usize {
        self.results.len()
    }
}

impl ResultStore for MemoryStore {
    fn read_result(&self, date: NaiveDate) -> Result<Option<StoredResult>, StoreError> {
        Ok(self.results.get(&date).cloned())
    }

    fn write_result(&mut self, date: NaiveDate, result: &StoredResult) -> Result<(), StoreError> {
        self.results.insert(date, result.clone());
        Ok(())
    }
}

impl StatsStore for MemoryStore {
    fn read_stats(&self) -> Result<StoredStats, StoreError> {
        Ok(self.stats.clone().unwrap_or_default())
    }

    fn write_stats(&mut self, stats: &StoredStats) -> Result<(), StoreError> {
        self.stats = Some(stats.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.result_count(), 0);
        assert_eq!(store.read_stats().unwrap(), StoredStats::default());
    }

    #[test]
    fn write_then_read() {
        let mut store = MemoryStore::new();
        let date = NaiveDate::from_ymd_opt(2026, 2, 6).unwrap();
        let result = StoredResult {
            day_number: 0,
            total_score: 5,
            row_scores: [5, 0, 0, 0, 0, 0],
            date: "2026-02-06".to_string(),
        };
        store.write_result(date, &result).unwrap();
        assert_eq!(store.read_result(date).unwrap(), Some(result));
        assert_eq!(store.result_count(), 1);
    }
}
