//! Piramit
//!
//! A daily Turkish word-pyramid puzzle: six words of one to six letters, every
//! letter hidden behind a number, one shared pool of 30 lives.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use piramit::core::Letter;
//! use piramit::engine::GameState;
//!
//! // Day 0 of the calendar
//! let state = GameState::daily(0);
//! let letter = Letter::parse('a').unwrap();
//!
//! let (state, outcome) = state.guess_letter(letter);
//! println!("{outcome:?}, score {}", state.total_score());
//! ```

// Alphabet and word types
pub mod core;

// Puzzle generation and game rules
pub mod engine;

// Word catalogs
pub mod wordlists;

// Saved results and statistics
pub mod storage;

// Gameplay events
pub mod analytics;

// Command-line settings
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
