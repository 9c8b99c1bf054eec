//! Deterministic puzzle engine
//!
//! Seeded generation (PRNG, day index, word-set selection, letter-number
//! mapping), the game state machine, and scoring. Nothing in here touches
//! the clock, the file system, or ambient randomness except
//! [`calendar::today`].

pub mod calendar;
pub mod mapping;
pub mod rng;
pub mod scoring;
pub mod selection;
pub mod state;

pub use mapping::{LetterMapping, MappingError};
pub use rng::Mulberry32;
pub use scoring::{FinalScore, MAX_SCORE};
pub use selection::{Catalog, CatalogError, EndlessPool, draw_endless_seed};
pub use state::{
    GameMode, GameSetup, GameState, GuessOutcome, LetterBox, RevealKind, Row, RowStatus,
    TOTAL_LIVES,
};
