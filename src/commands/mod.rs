//! Command implementations

pub mod records;
pub mod reveal;
pub mod round;
pub mod simple;
pub mod simulate;

pub use records::{load_stats, share_for_date};
pub use reveal::{RevealReport, reveal_daily, reveal_endless};
pub use round::{HINTS_PER_GAME, HintResult, Round, describe};
pub use simple::run_simple;
pub use simulate::{BUCKET_COUNT, BUCKET_WIDTH, SimulatedGame, SimulationResult, run_simulation};
