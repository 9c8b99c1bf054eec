//! Word-set catalogs for the pyramid
//!
//! Provides embedded catalogs compiled into the binary, plus a loader for
//! custom catalog files.

mod embedded;
pub mod loader;

pub use embedded::{
    DAILY_LIFE_SETS, DAILY_LIFE_SETS_COUNT, DAILY_SETS, DAILY_SETS_COUNT, NATURE_SETS,
    NATURE_SETS_COUNT, OBJECT_SETS, OBJECT_SETS_COUNT,
};
