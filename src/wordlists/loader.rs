//! Catalog loading utilities
//!
//! Provides functions to load word-set catalogs from files or use embedded
//! constants. A catalog file has one pyramid per line: six words separated
//! by whitespace, shortest first. Blank lines and lines starting with `#`
//! are skipped.

use crate::core::WordSet;
use crate::engine::{Catalog, CatalogError};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error type for catalog files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Load a catalog from a file
///
/// Unlike the embedded catalogs, a bad line is an error rather than being
/// skipped: a silently shorter catalog would change which pyramid every
/// day maps to.
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read, a line is not a valid
/// word set, or the file holds no sets at all.
///
/// # Examples
/// ```no_run
/// use piramit::wordlists::loader::load_from_file;
///
/// let catalog = load_from_file("data/daily_sets.txt").unwrap();
/// println!("Loaded {} word sets", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_catalog(&content)
}

/// Parse catalog text
///
/// # Errors
///
/// Returns `LoadError::Parse` for the first invalid line and
/// `LoadError::Catalog` if no sets were found.
pub fn parse_catalog(content: &str) -> Result<Catalog, LoadError> {
    let mut sets = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let words: Vec<&str> = trimmed.split_whitespace().collect();
        let set = WordSet::new(&words).map_err(|e| LoadError::Parse {
            line: i + 1,
            message: e.to_string(),
        })?;
        sets.push(set);
    }

    Ok(Catalog::new(sets)?)
}
