//! Analytics destinations

use super::AnalyticsEvent;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Where analytics events go
///
/// `send` cannot fail. Implementations swallow their own errors.
pub trait AnalyticsSink: Send + Sync {
    fn send(&self, event: &AnalyticsEvent);
}

impl<T: AnalyticsSink + ?Sized> AnalyticsSink for Arc<T> {
    fn send(&self, event: &AnalyticsEvent) {
        (**self).send(event);
    }
}

/// Drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl AnalyticsSink for NullSink {
    fn send(&self, _event: &AnalyticsEvent) {}
}

/// Emits each event as a `tracing` record
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn send(&self, event: &AnalyticsEvent) {
        match serde_json::to_string(event) {
            Ok(json) => info!(target: "piramit::analytics", kind = ?event.event, %json),
            Err(e) => debug!(error = %e, "could not serialise analytics event"),
        }
    }
}

/// Appends one JSON object per line to a file
#[derive(Debug)]
pub struct JsonLinesSink {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonLinesSink {
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        // A poisoned lock only means another append panicked; the file is fine
        let _guard = self.lock.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

impl AnalyticsSink for JsonLinesSink {
    fn send(&self, event: &AnalyticsEvent) {
        let result = serde_json::to_string(event)
            .map_err(std::io::Error::other)
            .and_then(|line| self.append(&line));
        if let Err(e) = result {
            debug!(path = %self.path.display(), error = %e, "dropped analytics event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{EventKind, Session};

    #[test]
    fn json_lines_appends_one_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonLinesSink::new(dir.path().join("events.jsonl"));
        let session = Session::ephemeral();

        sink.send(&session.event(EventKind::GameStart).with_mode("daily"));
        sink.send(&session.event(EventKind::GameOver).with_score(12));

        let content = std::fs::read_to_string(sink.path()).unwrap();
        let lines: Vec<serde_json::Value> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], "game_start");
        assert_eq!(lines[0]["mode"], "daily");
        assert_eq!(lines[1]["score"], 12);
    }

    #[test]
    fn unwritable_path_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonLinesSink::new(dir.path().join("missing").join("events.jsonl"));
        sink.send(&Session::ephemeral().event(EventKind::Share));
        assert!(!sink.path().exists());
    }

    #[test]
    fn null_and_log_sinks_accept_events() {
        let event = Session::ephemeral().event(EventKind::RowComplete).with_row(1);
        NullSink.send(&event);
        LogSink.send(&event);
    }
}
