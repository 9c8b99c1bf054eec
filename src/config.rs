//! Runtime settings
//!
//! Global command-line flags (with environment fallbacks) resolve into a
//! plain [`Settings`] value that the commands read from.

use crate::analytics::{JsonLinesSink, Session, Tracker};
use crate::engine::Catalog;
use crate::storage::{JsonFileStore, StoreError};
use crate::wordlists::loader::{LoadError, load_from_file};
use clap::Args;
use std::ffi::OsString;
use std::path::PathBuf;

/// Filter used when `--log` is not given
pub const DEFAULT_LOG_FILTER: &str = "piramit=warn";

/// Data directory name under the home directory
const DATA_DIR_NAME: &str = ".piramit";

/// Analytics events file inside the data directory
pub const EVENTS_FILE: &str = "piramit-events.jsonl";

/// Log file used while the TUI owns the terminal
pub const LOG_FILE: &str = "piramit.log";

/// Flags shared by every subcommand
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Directory for results, stats and analytics (default: ~/.piramit)
    #[arg(long, global = true, env = "PIRAMIT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Do not record analytics events
    #[arg(long, global = true, env = "PIRAMIT_NO_ANALYTICS")]
    pub no_analytics: bool,

    /// Custom daily catalog file (one six-word pyramid per line)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Tracing filter directive, e.g. "piramit=debug"
    #[arg(long, global = true, env = "PIRAMIT_LOG")]
    pub log: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub analytics: bool,
    pub catalog: Option<PathBuf>,
    pub log_filter: String,
}

impl Settings {
    #[must_use]
    pub fn from_cli(args: &GlobalArgs) -> Self {
        Self::resolve(args, std::env::var_os("HOME"))
    }

    fn resolve(args: &GlobalArgs, home: Option<OsString>) -> Self {
        let data_dir = args
            .data_dir
            .clone()
            .unwrap_or_else(|| default_data_dir(home));

        Self {
            data_dir,
            analytics: !args.no_analytics,
            catalog: args.catalog.clone(),
            log_filter: args
                .log
                .clone()
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Open the result and stats store in the data directory
    ///
    /// # Errors
    /// Returns `StoreError` if the directory cannot be created.
    pub fn open_store(&self) -> Result<JsonFileStore, StoreError> {
        JsonFileStore::open(&self.data_dir)
    }

    /// The daily catalog: the custom file if one was given, else the built-in one
    ///
    /// # Errors
    /// Returns `LoadError` if the custom file is unreadable or invalid.
    pub fn daily_catalog(&self) -> Result<Catalog, LoadError> {
        match &self.catalog {
            Some(path) => load_from_file(path),
            None => Ok(Catalog::daily().clone()),
        }
    }

    /// Analytics tracker for this run
    #[must_use]
    pub fn tracker(&self) -> Tracker {
        if !self.analytics {
            return Tracker::disabled();
        }
        Tracker::new(
            Session::persistent(&self.data_dir),
            Box::new(JsonLinesSink::new(self.data_dir.join(EVENTS_FILE))),
        )
    }

    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }
}

fn default_data_dir(home: Option<OsString>) -> PathBuf {
    match home {
        Some(home) if !home.is_empty() => PathBuf::from(home).join(DATA_DIR_NAME),
        _ => PathBuf::from(DATA_DIR_NAME),
    }
}
