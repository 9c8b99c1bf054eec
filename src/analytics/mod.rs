//! Gameplay analytics
//!
//! Front ends describe what happened with [`EventKind`] and hand stamped
//! [`AnalyticsEvent`]s to an [`AnalyticsSink`]. Delivery is best effort:
//! nothing in this module can fail a caller.

mod sink;

pub use sink::{AnalyticsSink, JsonLinesSink, LogSink, NullSink};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::debug;
use uuid::Uuid;

/// File holding the persistent visitor id
pub const VISITOR_ID_FILE: &str = "piramit-vid";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    GameStart,
    EndlessStart,
    RowComplete,
    GameComplete,
    GameOver,
    HintUsed,
    Share,
    SessionEnd,
}

/// One analytics record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    pub event: EventKind,
    pub visitor_id: Uuid,
    pub session_id: Uuid,
    /// Whole seconds since the session started
    pub session_duration: u64,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter: Option<char>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnalyticsEvent {
    #[must_use]
    pub const fn with_score(mut self, score: u32) -> Self {
        self.score = Some(score);
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    #[must_use]
    pub const fn with_day(mut self, day_number: i32) -> Self {
        self.day_number = Some(day_number);
        self
    }

    #[must_use]
    pub const fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    #[must_use]
    pub const fn with_letter(mut self, letter: char) -> Self {
        self.letter = Some(letter);
        self
    }

    /// Attach a free-form field, serialised next to the fixed ones
    #[must_use]
    pub fn with_extra(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }
}

/// Visitor and session identity plus the session clock
#[derive(Debug, Clone)]
pub struct Session {
    visitor_id: Uuid,
    session_id: Uuid,
    started: Instant,
}

impl Session {
    #[must_use]
    pub fn new(visitor_id: Uuid) -> Self {
        Self {
            visitor_id,
            session_id: Uuid::new_v4(),
            started: Instant::now(),
        }
    }

    /// Session with a throwaway visitor id
    #[must_use]
    pub fn ephemeral() -> Self {
        Self::new(Uuid::new_v4())
    }

    /// Session whose visitor id is kept in `data_dir`
    ///
    /// A missing or unreadable id is replaced with a fresh one. If it cannot
    /// be saved the session still works with the fresh id.
    #[must_use]
    pub fn persistent(data_dir: &Path) -> Self {
        Self::new(load_or_create_visitor_id(data_dir))
    }

    #[must_use]
    pub const fn visitor_id(&self) -> Uuid {
        self.visitor_id
    }

    #[must_use]
    pub const fn session_id(&self) -> Uuid {
        self.session_id
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }

    /// A new event stamped with this session
    #[must_use]
    pub fn event(&self, kind: EventKind) -> AnalyticsEvent {
        AnalyticsEvent {
            event: kind,
            visitor_id: self.visitor_id,
            session_id: self.session_id,
            session_duration: self.elapsed_secs(),
            timestamp: Utc::now(),
            score: None,
            mode: None,
            day_number: None,
            row: None,
            letter: None,
            extra: Map::new(),
        }
    }
}

fn load_or_create_visitor_id(data_dir: &Path) -> Uuid {
    let path = data_dir.join(VISITOR_ID_FILE);
    if let Ok(raw) = fs::read_to_string(&path)
        && let Ok(id) = Uuid::parse_str(raw.trim())
    {
        return id;
    }

    let id = Uuid::new_v4();
    if let Err(e) = fs::create_dir_all(data_dir).and_then(|()| fs::write(&path, id.to_string())) {
        debug!(path = %path.display(), error = %e, "could not save visitor id");
    }
    id
}

/// A session bound to the sink its events go to
pub struct Tracker {
    session: Session,
    sink: Box<dyn AnalyticsSink>,
}

impl Tracker {
    #[must_use]
    pub fn new(session: Session, sink: Box<dyn AnalyticsSink>) -> Self {
        Self { session, sink }
    }

    /// Tracker that drops everything
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(Session::ephemeral(), Box::new(NullSink))
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Build an event of `kind`, let `fill` add fields, and send it
    ///
    /// # Examples
    /// ```
    /// use piramit::analytics::{EventKind, Tracker};
    ///
    /// let tracker = Tracker::disabled();
    /// tracker.track(EventKind::GameStart, |e| e.with_mode("daily").with_day(3));
    /// ```
    pub fn track(&self, kind: EventKind, fill: impl FnOnce(AnalyticsEvent) -> AnalyticsEvent) {
        let event = fill(self.session.event(kind));
        self.sink.send(&event);
    }

    /// Send `session_end` with the total session length
    pub fn end_session(&self) {
        let total = self.session.elapsed_secs();
        self.track(EventKind::SessionEnd, |e| e.with_extra("totalDuration", total));
    }
}

impl std::fmt::Debug for Tracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracker")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
