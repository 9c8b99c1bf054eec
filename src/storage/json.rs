//! JSON files in a data directory
//!
//! Each daily result is `piramit-YYYY-MM-DD.json`; statistics live in
//! `piramit-stats.json`. Writes go to a temp file in the same directory and
//! are renamed into place, so a crash never leaves a half-written record.

use super::{ResultStore, StatsStore, StoreError, StoredResult, StoredStats};
use crate::engine::calendar::date_key;
use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{instrument, trace};

const STATS_FILE: &str = "piramit-stats.json";

/// Temp file names tried before a write gives up
const MAX_TEMP_ATTEMPTS: u32 = 16;

/// File-backed store rooted at one directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store, creating the directory if needed
    ///
    /// # Errors
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn open<P: Into<PathBuf>>(dir: P) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn result_path(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("piramit-{}.json", date_key(date)))
    }

    #[must_use]
    pub fn stats_path(&self) -> PathBuf {
        self.dir.join(STATS_FILE)
    }
}

impl ResultStore for JsonFileStore {
    #[instrument(skip(self), level = "trace")]
    fn read_result(&self, date: NaiveDate) -> Result<Option<StoredResult>, StoreError> {
        read_json(&self.result_path(date))
    }

    #[instrument(skip(self, result), level = "trace")]
    fn write_result(&mut self, date: NaiveDate, result: &StoredResult) -> Result<(), StoreError> {
        write_json(&self.result_path(date), result)
    }
}

impl StatsStore for JsonFileStore {
    #[instrument(skip(self), level = "trace")]
    fn read_stats(&self) -> Result<StoredStats, StoreError> {
        Ok(read_json(&self.stats_path())?.unwrap_or_default())
    }

    #[instrument(skip_all, level = "trace")]
    fn write_stats(&mut self, stats: &StoredStats) -> Result<(), StoreError> {
        write_json(&self.stats_path(), stats)
    }
}

/// `None` if the file does not exist
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    write_atomic(path, &content).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    trace!(path = %path.display(), "wrote record");
    Ok(())
}

fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let base = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("record.json");

    for attempt in 0..MAX_TEMP_ATTEMPTS {
        let tmp_path = dir.join(temp_name(base, attempt));
        let mut tmp = match OpenOptions::new().write(true).create_new(true).open(&tmp_path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e),
        };

        let written = tmp
            .write_all(content.as_bytes())
            .and_then(|()| tmp.sync_all());
        drop(tmp);
        let result = written.and_then(|()| fs::rename(&tmp_path, path));
        if result.is_err()
            && let Err(e) = fs::remove_file(&tmp_path)
        {
            trace!(path = %tmp_path.display(), error = %e, "could not remove temp file");
        }
        return result;
    }

    Err(io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!("no free temp file name next to {}", path.display()),
    ))
}

fn temp_name(base: &str, attempt: u32) -> String {
    format!(".{base}.tmp-{}-{attempt}", std::process::id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameState;
    use crate::storage::{has_played, record_daily_result};
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_result() -> StoredResult {
        StoredResult {
            day_number: 250,
            total_score: 97,
            row_scores: [5, 7, 15, 15, 25, 30],
            date: "2026-10-14".to_string(),
        }
    }

    #[test]
    fn file_names_follow_date_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert_eq!(
            store.result_path(date(2026, 10, 14)),
            dir.path().join("piramit-2026-10-14.json")
        );
        assert_eq!(store.stats_path(), dir.path().join("piramit-stats.json"));
    }

    #[test]
    fn missing_records_read_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert_eq!(store.read_result(date(2026, 10, 14)).unwrap(), None);
        assert_eq!(store.read_stats().unwrap(), StoredStats::default());
    }

    #[test]
    fn result_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let today = date(2026, 10, 14);
        {
            let mut store = JsonFileStore::open(dir.path()).unwrap();
            store.write_result(today, &sample_result()).unwrap();
        }
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert_eq!(store.read_result(today).unwrap(), Some(sample_result()));
    }

    #[test]
    fn written_file_is_camel_case_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path()).unwrap();
        let today = date(2026, 10, 14);
        store.write_result(today, &sample_result()).unwrap();

        let raw = fs::read_to_string(store.result_path(today)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["dayNumber"], 250);
        assert_eq!(value["rowScores"][1], 7);
    }

    #[test]
    fn no_temp_files_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path()).unwrap();
        store.write_stats(&StoredStats::default().updated_with(40, false)).unwrap();
        store.write_stats(&StoredStats::default().updated_with(60, false)).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["piramit-stats.json".to_string()]);
        assert_eq!(store.read_stats().unwrap().total_points, 60);
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in the way makes the final rename fail
        let target = dir.path().join("piramit-stats.json");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "x").unwrap();

        assert!(write_atomic(&target, "{}").is_err());
        assert_eq!(file_names(dir.path()), vec!["piramit-stats.json".to_string()]);
    }

    #[test]
    fn write_gives_up_when_temp_names_are_taken() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("piramit-stats.json");
        for attempt in 0..MAX_TEMP_ATTEMPTS {
            fs::write(dir.path().join(temp_name("piramit-stats.json", attempt)), "").unwrap();
        }

        let err = write_atomic(&target, "{}").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert!(!target.exists());
        assert_eq!(file_names(dir.path()).len(), MAX_TEMP_ATTEMPTS as usize);
    }

    #[test]
    fn malformed_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        fs::write(store.stats_path(), "{ not json").unwrap();
        assert!(matches!(store.read_stats(), Err(StoreError::Json { .. })));
    }

    #[test]
    fn open_creates_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = JsonFileStore::open(&nested).unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn record_daily_result_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path()).unwrap();
        let today = date(2026, 10, 14);

        let mut game = GameState::daily(250);
        while !game.is_complete() {
            let letters = game.active_row().word().letters().to_vec();
            for l in letters {
                game = game.guess_letter(l).0;
            }
            game = game.advance_row();
        }

        let stats = record_daily_result(&mut store, &game, today).unwrap().unwrap();
        assert_eq!(stats.games_played, 1);
        assert!(has_played(&store, today).unwrap());
        assert_eq!(record_daily_result(&mut store, &game, today).unwrap(), None);
    }
}
