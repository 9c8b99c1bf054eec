//! The 29-letter Turkish alphabet
//!
//! Every puzzle symbol is a [`Letter`], an index into [`ALPHABET`]. Alphabet
//! order matters: the letter-number mapping is built by zipping a shuffled
//! sequence against it.

use std::fmt;

/// Number of symbols in the puzzle alphabet
pub const ALPHABET_SIZE: usize = 29;

/// The Turkish alphabet in canonical order
pub const ALPHABET: [char; ALPHABET_SIZE] = [
    'A', 'B', 'C', 'Ç', 'D', 'E', 'F', 'G', 'Ğ', 'H', 'I', 'İ', 'J', 'K', 'L', 'M', 'N', 'O', 'Ö',
    'P', 'R', 'S', 'Ş', 'T', 'U', 'Ü', 'V', 'Y', 'Z',
];

/// A single alphabet symbol
///
/// Stored as its position in [`ALPHABET`], so comparisons and table lookups
/// are plain integer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Look up an uppercase alphabet symbol exactly
    ///
    /// # Examples
    /// ```
    /// use piramit::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('Ş').unwrap().as_char(), 'Ş');
    /// assert!(Letter::from_char('Q').is_none());
    /// assert!(Letter::from_char('a').is_none());
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        ALPHABET
            .iter()
            .position(|&symbol| symbol == c)
            .map(|index| Self(index as u8))
    }

    /// Parse player input, folding case the Turkish way
    ///
    /// Dotted `i` becomes `İ` and dotless `ı` becomes `I`; everything else
    /// goes through its Unicode uppercase form.
    ///
    /// # Examples
    /// ```
    /// use piramit::core::Letter;
    ///
    /// assert_eq!(Letter::parse('i').unwrap().as_char(), 'İ');
    /// assert_eq!(Letter::parse('ı').unwrap().as_char(), 'I');
    /// assert_eq!(Letter::parse('ç').unwrap().as_char(), 'Ç');
    /// assert!(Letter::parse('w').is_none());
    /// ```
    #[must_use]
    pub fn parse(c: char) -> Option<Self> {
        let upper = match c {
            'i' => 'İ',
            'ı' => 'I',
            _ => {
                let mut upper = c.to_uppercase();
                match (upper.next(), upper.next()) {
                    (Some(single), None) => single,
                    _ => return None,
                }
            }
        };
        Self::from_char(upper)
    }

    /// Build a letter from its alphabet index
    ///
    /// # Panics
    /// Panics in debug mode if `index >= 29`
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        debug_assert!(index < ALPHABET_SIZE, "Letter index must be < 29");
        Self(index as u8)
    }

    /// Position in [`ALPHABET`] (0-28)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        ALPHABET[self.0 as usize]
    }

    /// All letters in alphabet order
    pub fn all() -> impl DoubleEndedIterator<Item = Self> {
        (0..ALPHABET_SIZE).map(Self::from_index)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_29_unique_symbols() {
        let unique: std::collections::HashSet<char> = ALPHABET.iter().copied().collect();
        assert_eq!(unique.len(), ALPHABET_SIZE);
    }

    #[test]
    fn from_char_round_trips_every_symbol() {
        for (i, &c) in ALPHABET.iter().enumerate() {
            let letter = Letter::from_char(c).unwrap();
            assert_eq!(letter.index(), i);
            assert_eq!(letter.as_char(), c);
        }
    }

    #[test]
    fn all_walks_the_alphabet_both_ways() {
        let forward: Vec<char> = Letter::all().map(Letter::as_char).collect();
        assert_eq!(forward, ALPHABET);

        let backward: Vec<char> = Letter::all().rev().map(Letter::as_char).collect();
        assert_eq!(backward.len(), ALPHABET_SIZE);
        assert_eq!(backward.first(), Some(&'Z'));
        assert_eq!(backward.last(), Some(&'A'));
    }

    #[test]
    fn from_char_rejects_letters_outside_alphabet() {
        for c in ['Q', 'W', 'X', '1', ' ', 'ß'] {
            assert!(Letter::from_char(c).is_none(), "{c} should be rejected");
        }
    }

    #[test]
    fn parse_folds_turkish_i_forms() {
        assert_eq!(Letter::parse('i').unwrap().as_char(), 'İ');
        assert_eq!(Letter::parse('ı').unwrap().as_char(), 'I');
        assert_eq!(Letter::parse('I').unwrap().as_char(), 'I');
        assert_eq!(Letter::parse('İ').unwrap().as_char(), 'İ');
    }

    #[test]
    fn parse_uppercases_other_letters() {
        assert_eq!(Letter::parse('ğ').unwrap().as_char(), 'Ğ');
        assert_eq!(Letter::parse('ş').unwrap().as_char(), 'Ş');
        assert_eq!(Letter::parse('ü').unwrap().as_char(), 'Ü');
        assert_eq!(Letter::parse('k').unwrap().as_char(), 'K');
    }

    #[test]
    fn parse_rejects_non_alphabet_input() {
        assert!(Letter::parse('q').is_none());
        assert!(Letter::parse('5').is_none());
        // Uppercases to two characters
        assert!(Letter::parse('ß').is_none());
    }

    #[test]
    fn all_iterates_in_order() {
        let letters: Vec<char> = Letter::all().map(Letter::as_char).collect();
        assert_eq!(letters, ALPHABET.to_vec());
    }

    #[test]
    fn letter_display() {
        assert_eq!(format!("{}", Letter::from_char('Ö').unwrap()), "Ö");
    }
}
