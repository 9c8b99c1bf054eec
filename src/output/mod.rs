//! Terminal output formatting
//!
//! Display utilities for CLI results, share text and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_game_summary, print_reveal, print_simulation_result, print_stats,
    print_stored_result,
};
