use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{trace, warn};
use tracing_subscriber::{EnvFilter, prelude::*};

use crate::config::DEFAULT_LOG_FILTER;

/// Where log records go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Appended to a file, used while the TUI owns the terminal
    File(PathBuf),
}

/// Install the global subscriber
///
/// An invalid `filter` falls back to the default directive and logs a
/// warning once the subscriber is up.
///
/// # Errors
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init_tracing(filter: &str, target: &LogTarget) -> Result<()> {
    let (env_filter, bad_filter) = match EnvFilter::try_new(filter) {
        Ok(f) => (f, None),
        Err(e) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(e)),
    };

    let registry = tracing_subscriber::registry().with(env_filter);
    match target {
        LogTarget::Stderr => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?,
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()?;
        }
    }

    if let Some(e) = bad_filter {
        warn!(filter, error = %e, "invalid log filter, using default");
    }
    trace!("finished");
    Ok(())
}
