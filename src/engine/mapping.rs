//! Letter-number mapping generation
//!
//! Each puzzle hides its letters behind the numbers 1-29. The mapping is a
//! seeded Fisher-Yates shuffle of `1..=29` zipped against alphabet order.

use super::rng::Mulberry32;
use crate::core::{ALPHABET_SIZE, Letter};
use std::fmt;

/// Bijection between alphabet letters and the numbers 1-29
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterMapping {
    /// Number for each letter, indexed by alphabet position
    forward: [u8; ALPHABET_SIZE],
    /// Letter for each number, indexed by `number - 1`
    inverse: [Letter; ALPHABET_SIZE],
}

/// Error for a number table that is not a permutation of 1-29
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    OutOfRange(u8),
    Duplicate(u8),
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(n) => write!(f, "Mapping number {n} is outside 1-29"),
            Self::Duplicate(n) => write!(f, "Mapping number {n} is assigned twice"),
        }
    }
}

impl std::error::Error for MappingError {}

/// The mapping seed is derived from the root seed so that it is independent
/// of the word-selection draw
#[inline]
#[must_use]
pub const fn mapping_seed(seed: i32) -> i32 {
    seed.wrapping_mul(31).wrapping_add(7)
}

impl LetterMapping {
    /// Generate the mapping for a root seed
    ///
    /// # Examples
    /// ```
    /// use piramit::core::Letter;
    /// use piramit::engine::LetterMapping;
    ///
    /// let mapping = LetterMapping::generate(0);
    /// let a = Letter::from_char('A').unwrap();
    /// assert_eq!(mapping.number_of(a), 26);
    /// assert_eq!(mapping.letter_of(26), Some(a));
    /// ```
    #[must_use]
    pub fn generate(seed: i32) -> Self {
        let mut rng = Mulberry32::new(mapping_seed(seed));
        let mut numbers: [u8; ALPHABET_SIZE] = std::array::from_fn(|i| i as u8 + 1);

        for i in (1..ALPHABET_SIZE).rev() {
            let j = rng.next_index(i + 1);
            numbers.swap(i, j);
        }

        Self::from_shuffled(numbers)
    }

    /// Build a mapping from an explicit table (number for each letter in
    /// alphabet order)
    ///
    /// # Errors
    /// Returns `MappingError` unless the table is a permutation of 1-29.
    pub fn from_numbers(numbers: [u8; ALPHABET_SIZE]) -> Result<Self, MappingError> {
        let mut seen = [false; ALPHABET_SIZE];
        for &n in &numbers {
            if !(1..=ALPHABET_SIZE as u8).contains(&n) {
                return Err(MappingError::OutOfRange(n));
            }
            let slot = &mut seen[usize::from(n) - 1];
            if *slot {
                return Err(MappingError::Duplicate(n));
            }
            *slot = true;
        }
        Ok(Self::from_shuffled(numbers))
    }

    fn from_shuffled(numbers: [u8; ALPHABET_SIZE]) -> Self {
        let mut inverse = [Letter::from_index(0); ALPHABET_SIZE];
        for (index, &n) in numbers.iter().enumerate() {
            inverse[usize::from(n) - 1] = Letter::from_index(index);
        }
        Self {
            forward: numbers,
            inverse,
        }
    }

    /// Number hiding `letter`
    #[inline]
    #[must_use]
    pub const fn number_of(&self, letter: Letter) -> u8 {
        self.forward[letter.index()]
    }

    /// Letter behind `number`, or `None` outside 1-29
    #[inline]
    #[must_use]
    pub fn letter_of(&self, number: u8) -> Option<Letter> {
        usize::from(number)
            .checked_sub(1)
            .and_then(|i| self.inverse.get(i))
            .copied()
    }

    /// Numbers in alphabet order
    #[inline]
    #[must_use]
    pub const fn numbers(&self) -> &[u8; ALPHABET_SIZE] {
        &self.forward
    }

    /// `(letter, number)` pairs in alphabet order
    pub fn pairs(&self) -> impl Iterator<Item = (Letter, u8)> + '_ {
        Letter::all().map(|letter| (letter, self.number_of(letter)))
    }
}
