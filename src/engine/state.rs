//! Game state machine
//!
//! A [`GameState`] is a caller-owned value. Transitions never mutate it in
//! place: [`GameState::guess_letter`] and [`GameState::advance_row`] return a
//! new snapshot, so front ends can keep history, compare snapshots, or drop
//! them freely.
//!
//! Rows move `Pending -> Active -> Completed | Failed`. Lives are one shared
//! pool across the whole pyramid.

use super::mapping::LetterMapping;
use super::scoring::{FinalScore, final_score, row_score};
use super::selection::{Catalog, EndlessPool};
use crate::core::{Letter, PuzzleWord, ROW_COUNT, WordSet};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::trace;

/// Shared lives for one puzzle
pub const TOTAL_LIVES: u32 = 30;

/// Index of the last row
const LAST_ROW: usize = ROW_COUNT - 1;

/// Whether the puzzle is the shared daily one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    Daily,
    Infinite,
}

impl GameMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Infinite => "infinite",
        }
    }
}

/// How a box was revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealKind {
    #[default]
    None,
    /// Revealed by a correct guess
    Correct,
    /// Shown because lives ran out
    Fail,
}

/// One letter position, displayed as its number until revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterBox {
    pub number: u8,
    pub letter: Letter,
    pub revealed: bool,
    pub reveal: RevealKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    Pending,
    Active,
    Completed,
    Failed,
}

/// One word of the pyramid and its guess progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    word: PuzzleWord,
    boxes: Vec<LetterBox>,
    guessed_letters: Vec<Letter>,
    wrong_count: u32,
    status: RowStatus,
}

impl Row {
    fn new(word: &PuzzleWord, mapping: &LetterMapping, status: RowStatus) -> Self {
        let boxes = word
            .letters()
            .iter()
            .map(|&letter| LetterBox {
                number: mapping.number_of(letter),
                letter,
                revealed: false,
                reveal: RevealKind::None,
            })
            .collect();

        Self {
            word: word.clone(),
            boxes,
            guessed_letters: Vec::new(),
            wrong_count: 0,
            status,
        }
    }

    #[must_use]
    pub const fn word(&self) -> &PuzzleWord {
        &self.word
    }

    #[must_use]
    pub fn boxes(&self) -> &[LetterBox] {
        &self.boxes
    }

    /// Letters guessed on this row, in guess order
    #[must_use]
    pub fn guessed_letters(&self) -> &[Letter] {
        &self.guessed_letters
    }

    #[must_use]
    pub const fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    #[must_use]
    pub const fn status(&self) -> RowStatus {
        self.status
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    #[must_use]
    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.guessed_letters.contains(&letter)
    }

    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.boxes.iter().all(|b| b.revealed)
    }

    /// Reveal the still hidden boxes among `positions`, returning those it opened
    fn reveal_at(
        &mut self,
        kind: RevealKind,
        positions: impl IntoIterator<Item = usize>,
    ) -> Vec<usize> {
        positions
            .into_iter()
            .filter(|&i| {
                let letter_box = &mut self.boxes[i];
                if letter_box.revealed {
                    return false;
                }
                letter_box.revealed = true;
                letter_box.reveal = kind;
                true
            })
            .collect()
    }
}

/// Result of a single guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The game is already over; nothing changed
    None,
    /// The letter was already tried on this row; nothing changed
    AlreadyGuessed,
    /// Letter found; the row is still in progress
    Correct { revealed: Vec<usize> },
    /// Letter not in the word
    Wrong { wrong_count: u32 },
    /// Letter found and the row is solved; call [`GameState::advance_row`] next
    RowComplete { revealed: Vec<usize>, row_score: u32 },
    /// Letter found and the last row is solved
    GameComplete { revealed: Vec<usize>, score: u32 },
    /// Lives ran out; the rest of the active row was shown
    GameOverNoLives { revealed: Vec<usize>, score: u32 },
}

impl GuessOutcome {
    /// Positions revealed by this guess, if any
    #[must_use]
    pub fn revealed(&self) -> &[usize] {
        match self {
            Self::Correct { revealed }
            | Self::RowComplete { revealed, .. }
            | Self::GameComplete { revealed, .. }
            | Self::GameOverNoLives { revealed, .. } => revealed,
            Self::None | Self::AlreadyGuessed | Self::Wrong { .. } => &[],
        }
    }

    /// Whether the guess changed the game state
    #[must_use]
    pub const fn is_effective(&self) -> bool {
        !matches!(self, Self::None | Self::AlreadyGuessed)
    }

    /// Whether this guess ended the game
    #[must_use]
    pub const fn ends_game(&self) -> bool {
        matches!(self, Self::GameComplete { .. } | Self::GameOverNoLives { .. })
    }
}

/// Everything needed to start a puzzle
#[derive(Debug, Clone)]
pub struct GameSetup {
    pub day_number: i32,
    pub mode: GameMode,
    pub mode_label: String,
    /// Root seed for the letter-number mapping
    pub seed: i32,
    pub words: WordSet,
}

/// State of one puzzle attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    day_number: i32,
    mode: GameMode,
    mode_label: String,
    seed: i32,
    mapping: LetterMapping,
    rows: [Row; ROW_COUNT],
    current_row: usize,
    row_scores: [u32; ROW_COUNT],
    total_score: u32,
    lives_remaining: u32,
    is_complete: bool,
    final_score: Option<FinalScore>,
}

impl GameState {
    /// Start a puzzle from an explicit setup
    #[must_use]
    pub fn new(setup: GameSetup) -> Self {
        let mapping = LetterMapping::generate(setup.seed);
        let rows: [Row; ROW_COUNT] = std::array::from_fn(|i| {
            let status = if i == 0 {
                RowStatus::Active
            } else {
                RowStatus::Pending
            };
            Row::new(setup.words.word(i), &mapping, status)
        });

        trace!(
            day = setup.day_number,
            seed = setup.seed,
            mode = setup.mode.as_str(),
            "new game"
        );

        Self {
            day_number: setup.day_number,
            mode: setup.mode,
            mode_label: setup.mode_label,
            seed: setup.seed,
            mapping,
            rows,
            current_row: 0,
            row_scores: [0; ROW_COUNT],
            total_score: 0,
            lives_remaining: TOTAL_LIVES,
            is_complete: false,
            final_score: None,
        }
    }

    /// The shared daily puzzle for `day_number`
    ///
    /// # Examples
    /// ```
    /// use piramit::engine::GameState;
    ///
    /// let a = GameState::daily(12);
    /// let b = GameState::daily(12);
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn daily(day_number: i32) -> Self {
        Self::daily_from(Catalog::daily(), day_number)
    }

    /// The daily puzzle for `day_number` drawn from a custom catalog
    #[must_use]
    pub fn daily_from(catalog: &Catalog, day_number: i32) -> Self {
        Self::new(GameSetup {
            day_number,
            mode: GameMode::Daily,
            mode_label: String::new(),
            seed: day_number,
            words: catalog.select(day_number).clone(),
        })
    }

    /// An endless puzzle from `pool`, fully determined by `seed`
    #[must_use]
    pub fn endless(pool: EndlessPool, seed: i32) -> Self {
        Self::new(GameSetup {
            day_number: seed,
            mode: GameMode::Infinite,
            mode_label: pool.label().to_string(),
            seed,
            words: Catalog::endless(pool).select(seed).clone(),
        })
    }

    /// Guess a letter on the active row
    ///
    /// Returns the next state and what happened. Guessing after the game is
    /// over, or repeating a letter on the same row, returns an identical
    /// state.
    ///
    /// # Examples
    /// ```
    /// use piramit::core::Letter;
    /// use piramit::engine::{GameState, GuessOutcome};
    ///
    /// // Day 0 opens with the single-letter row "A"
    /// let game = GameState::daily(0);
    /// let (game, outcome) = game.guess_letter(Letter::parse('a').unwrap());
    /// assert!(matches!(outcome, GuessOutcome::RowComplete { row_score: 5, .. }));
    ///
    /// let game = game.advance_row();
    /// assert_eq!(game.current_row(), 1);
    /// ```
    #[must_use]
    pub fn guess_letter(&self, letter: Letter) -> (Self, GuessOutcome) {
        if self.is_complete {
            return (self.clone(), GuessOutcome::None);
        }
        if self.active_row().has_guessed(letter) {
            return (self.clone(), GuessOutcome::AlreadyGuessed);
        }

        let mut next = self.clone();
        let index = next.current_row;
        let row = &mut next.rows[index];
        row.guessed_letters.push(letter);

        if row.word.has_letter(letter) {
            let positions = row.word.positions_of(letter).to_vec();
            let revealed = row.reveal_at(RevealKind::Correct, positions);

            if !row.is_fully_revealed() {
                return (next, GuessOutcome::Correct { revealed });
            }

            let score = row_score(row.len(), row.wrong_count);
            row.status = RowStatus::Completed;
            next.row_scores[index] = score;
            next.total_score = next.row_scores.iter().sum();

            if index == LAST_ROW {
                let finished =
                    final_score(&next.row_scores, next.total_errors(), next.lives_remaining);
                next.finish(finished);
                return (
                    next,
                    GuessOutcome::GameComplete {
                        revealed,
                        score: finished.total,
                    },
                );
            }

            (
                next,
                GuessOutcome::RowComplete {
                    revealed,
                    row_score: score,
                },
            )
        } else {
            row.wrong_count += 1;
            let wrong_count = row.wrong_count;
            next.lives_remaining = next.lives_remaining.saturating_sub(1);

            if next.lives_remaining > 0 {
                return (next, GuessOutcome::Wrong { wrong_count });
            }

            let row = &mut next.rows[index];
            let len = row.len();
            let revealed = row.reveal_at(RevealKind::Fail, 0..len);
            row.status = RowStatus::Failed;
            next.row_scores[index] = 0;

            let finished = final_score(&next.row_scores, next.total_errors(), 0);
            next.finish(finished);
            (
                next,
                GuessOutcome::GameOverNoLives {
                    revealed,
                    score: finished.total,
                },
            )
        }
    }

    /// Move to the next row
    ///
    /// Does nothing once the game is over or on the last row.
    #[must_use]
    pub fn advance_row(&self) -> Self {
        let mut next = self.clone();
        if next.is_complete || next.current_row >= LAST_ROW {
            return next;
        }
        next.current_row += 1;
        next.rows[next.current_row].status = RowStatus::Active;
        next
    }

    /// A random unrevealed letter of the active row
    ///
    /// Does not consume a guess; feed the result to
    /// [`GameState::guess_letter`] to use it.
    pub fn hint_letter<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Letter> {
        if self.is_complete {
            return None;
        }
        let unrevealed: Vec<Letter> = self
            .active_row()
            .boxes
            .iter()
            .filter(|b| !b.revealed)
            .map(|b| b.letter)
            .collect();
        unrevealed.choose(rng).copied()
    }

    fn finish(&mut self, score: FinalScore) {
        self.total_score = score.total;
        self.final_score = Some(score);
        self.is_complete = true;
    }

    #[must_use]
    pub const fn day_number(&self) -> i32 {
        self.day_number
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn mode_label(&self) -> &str {
        &self.mode_label
    }

    #[must_use]
    pub const fn seed(&self) -> i32 {
        self.seed
    }

    #[must_use]
    pub const fn mapping(&self) -> &LetterMapping {
        &self.mapping
    }

    #[must_use]
    pub const fn rows(&self) -> &[Row; ROW_COUNT] {
        &self.rows
    }

    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn active_row(&self) -> &Row {
        &self.rows[self.current_row]
    }

    #[must_use]
    pub const fn row_scores(&self) -> &[u32; ROW_COUNT] {
        &self.row_scores
    }

    /// Running sum of row scores, or the final score with bonuses once the
    /// game is over
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    #[must_use]
    pub const fn total_lives(&self) -> u32 {
        TOTAL_LIVES
    }

    #[must_use]
    pub const fn lives_remaining(&self) -> u32 {
        self.lives_remaining
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Score breakdown, available once the game is over
    #[must_use]
    pub const fn final_score(&self) -> Option<FinalScore> {
        self.final_score
    }

    /// Wrong guesses across all rows
    #[must_use]
    pub fn total_errors(&self) -> u32 {
        self.rows.iter().map(|r| r.wrong_count).sum()
    }

    /// Whether the active row is solved and waiting for [`GameState::advance_row`]
    #[must_use]
    pub fn awaiting_advance(&self) -> bool {
        !self.is_complete && self.active_row().status == RowStatus::Completed
    }
}
