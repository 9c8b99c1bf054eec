//! Puzzle words and pyramid word sets
//!
//! A [`PuzzleWord`] stores its letters along with letter position indices for
//! reveal lookups. A [`WordSet`] is the six words of one pyramid.

use super::Letter;
use rustc_hash::FxHashMap;
use std::fmt;

/// Number of rows (and words) in a pyramid
pub const ROW_COUNT: usize = 6;

/// A word over the puzzle alphabet with letter position tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleWord {
    text: String,
    letters: Vec<Letter>,
    letter_positions: FxHashMap<Letter, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidSymbol(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidSymbol(c) => {
                write!(f, "Word contains '{c}', which is not in the alphabet")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl PuzzleWord {
    /// Create a new word from a string
    ///
    /// Input goes through Turkish case folding, so `"kuş"` and `"KUŞ"` are
    /// the same word.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains a symbol outside
    /// the 29-letter alphabet.
    ///
    /// # Examples
    /// ```
    /// use piramit::core::PuzzleWord;
    ///
    /// let word = PuzzleWord::new("bahçe").unwrap();
    /// assert_eq!(word.text(), "BAHÇE");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(PuzzleWord::new("").is_err());
    /// assert!(PuzzleWord::new("quiz").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let letters = text
            .chars()
            .map(|c| Letter::parse(c).ok_or(WordError::InvalidSymbol(c)))
            .collect::<Result<Vec<_>, _>>()?;

        if letters.is_empty() {
            return Err(WordError::Empty);
        }

        let mut letter_positions: FxHashMap<Letter, Vec<usize>> = FxHashMap::default();
        for (i, &letter) in letters.iter().enumerate() {
            letter_positions.entry(letter).or_default().push(i);
        }

        Ok(Self {
            text: letters.iter().map(|l| l.as_char()).collect(),
            letters,
            letter_positions,
        })
    }

    /// The word in canonical uppercase
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Length in letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.letter_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: Letter) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for PuzzleWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// The six words of one pyramid, lengths 1 through 6
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSet {
    words: [PuzzleWord; ROW_COUNT],
}

/// Error type for invalid word sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSetError {
    WrongCount(usize),
    InvalidWord { row: usize, error: WordError },
    WrongLength { row: usize, expected: usize, found: usize },
}

impl fmt::Display for WordSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongCount(count) => {
                write!(f, "Word set must have exactly 6 words, got {count}")
            }
            Self::InvalidWord { row, error } => write!(f, "Row {}: {error}", row + 1),
            Self::WrongLength {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} must be {expected} letters long, got {found}",
                row + 1
            ),
        }
    }
}

impl std::error::Error for WordSetError {}

impl WordSet {
    /// Build a word set from six words in row order
    ///
    /// # Errors
    /// Returns `WordSetError` if there are not exactly six words, a word is
    /// invalid, or the word at row `i` is not `i + 1` letters long.
    ///
    /// # Examples
    /// ```
    /// use piramit::core::WordSet;
    ///
    /// let set = WordSet::new(&["O", "EV", "GÖZ", "KAPI", "BAHÇE", "MUTFAK"]).unwrap();
    /// assert_eq!(set.word(3).text(), "KAPI");
    ///
    /// assert!(WordSet::new(&["O", "EV"]).is_err());
    /// ```
    pub fn new<S: AsRef<str>>(words: &[S]) -> Result<Self, WordSetError> {
        if words.len() != ROW_COUNT {
            return Err(WordSetError::WrongCount(words.len()));
        }

        let mut parsed = Vec::with_capacity(ROW_COUNT);
        for (row, text) in words.iter().enumerate() {
            let word = PuzzleWord::new(text.as_ref())
                .map_err(|error| WordSetError::InvalidWord { row, error })?;
            if word.len() != row + 1 {
                return Err(WordSetError::WrongLength {
                    row,
                    expected: row + 1,
                    found: word.len(),
                });
            }
            parsed.push(word);
        }

        let words: [PuzzleWord; ROW_COUNT] = parsed
            .try_into()
            .map_err(|v: Vec<PuzzleWord>| WordSetError::WrongCount(v.len()))?;

        Ok(Self { words })
    }

    /// Word for row `row` (0-5)
    ///
    /// # Panics
    /// Panics if `row >= 6`
    #[inline]
    #[must_use]
    pub fn word(&self, row: usize) -> &PuzzleWord {
        &self.words[row]
    }

    pub fn iter(&self) -> impl Iterator<Item = &PuzzleWord> {
        self.words.iter()
    }
}

impl fmt::Display for WordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let texts: Vec<&str> = self.words.iter().map(PuzzleWord::text).collect();
        write!(f, "{}", texts.join(" "))
    }
}
