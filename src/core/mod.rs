//! Core domain types for the pyramid puzzle
//!
//! This module contains the alphabet and word types shared by the engine and
//! every front end. All types here are pure and validated at construction.

mod alphabet;
mod word;

pub use alphabet::{ALPHABET, ALPHABET_SIZE, Letter};
pub use word::{PuzzleWord, ROW_COUNT, WordError, WordSet, WordSetError};
