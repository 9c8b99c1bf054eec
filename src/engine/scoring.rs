//! Row and final score calculation
//!
//! Each letter position is worth 5 points. Every wrong guess in a row cuts
//! that row's score by a quarter, down to zero after four. Completing the
//! whole pyramid earns bonuses on top of the row sum.

use crate::core::ROW_COUNT;

/// Points per letter position
pub const POINTS_PER_LETTER: u32 = 5;

/// Bonus for solving every row
pub const COMPLETION_BONUS: u32 = 20;

/// Extra bonus for solving every row with enough lives left
pub const LIVES_BONUS: u32 = 25;

/// Lives needed at completion for [`LIVES_BONUS`]
pub const LIVES_BONUS_THRESHOLD: u32 = 10;

/// Best possible final score: 105 + 20 + 25
pub const MAX_SCORE: u32 = 150;

/// Wrong guesses that zero a row's score
const PENALTY_STEPS: u32 = 4;

/// Maximum score of a row of `row_len` letters
#[inline]
#[must_use]
pub const fn max_row_score(row_len: usize) -> u32 {
    row_len as u32 * POINTS_PER_LETTER
}

/// Score for a solved row: `floor(len * 5 * max(0, 1 - 0.25 * wrong))`
///
/// Computed in integers; a quarter step is exact, so this matches the
/// floating-point definition.
///
/// # Examples
/// ```
/// use piramit::engine::scoring::row_score;
///
/// assert_eq!(row_score(1, 0), 5);
/// assert_eq!(row_score(1, 2), 2);
/// assert_eq!(row_score(6, 1), 22);
/// assert_eq!(row_score(6, 4), 0);
/// ```
#[must_use]
pub const fn row_score(row_len: usize, wrong_count: u32) -> u32 {
    let remaining = PENALTY_STEPS.saturating_sub(wrong_count);
    max_row_score(row_len) * remaining / PENALTY_STEPS
}

/// Breakdown of a finished game's score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    pub base: u32,
    pub completion_bonus: u32,
    pub lives_bonus: u32,
    pub total_errors: u32,
    pub total: u32,
}

impl FinalScore {
    #[must_use]
    pub const fn is_perfect(&self) -> bool {
        self.total == MAX_SCORE
    }
}

/// Final score from all six row scores
///
/// `total_errors` does not change the total; it is kept in the breakdown for
/// result screens.
///
/// # Examples
/// ```
/// use piramit::engine::scoring::final_score;
///
/// let score = final_score(&[5, 10, 15, 20, 25, 30], 0, 30);
/// assert_eq!(score.total, 150);
///
/// let failed = final_score(&[5, 10, 15, 20, 25, 0], 30, 0);
/// assert_eq!(failed.total, 75);
/// ```
#[must_use]
pub fn final_score(
    row_scores: &[u32; ROW_COUNT],
    total_errors: u32,
    lives_remaining: u32,
) -> FinalScore {
    let base: u32 = row_scores.iter().sum();
    let all_solved = row_scores.iter().all(|&s| s > 0);

    let completion_bonus = if all_solved { COMPLETION_BONUS } else { 0 };
    let lives_bonus = if all_solved && lives_remaining >= LIVES_BONUS_THRESHOLD {
        LIVES_BONUS
    } else {
        0
    };

    FinalScore {
        base,
        completion_bonus,
        lives_bonus,
        total_errors,
        total: base + completion_bonus + lives_bonus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Floating-point reference definition
    fn reference_row_score(row_len: usize, wrong: u32) -> u32 {
        let base = (row_len as u32 * 5) as f64;
        let multiplier = (1.0 - f64::from(wrong) * 0.25).max(0.0);
        (base * multiplier).floor() as u32
    }

    #[test]
    fn row_score_matches_reference() {
        for len in 1..=6 {
            for wrong in 0..10 {
                assert_eq!(
                    row_score(len, wrong),
                    reference_row_score(len, wrong),
                    "len {len}, wrong {wrong}"
                );
            }
        }
    }

    #[test]
    fn single_letter_row_scores() {
        assert_eq!(row_score(1, 0), 5);
        assert_eq!(row_score(1, 1), 3);
        assert_eq!(row_score(1, 2), 2);
        assert_eq!(row_score(1, 3), 1);
        assert_eq!(row_score(1, 4), 0);
    }

    #[test]
    fn many_wrong_guesses_floor_at_zero() {
        assert_eq!(row_score(6, 4), 0);
        assert_eq!(row_score(6, 29), 0);
    }

    #[test]
    fn max_row_scores_sum_to_105() {
        let sum: u32 = (1..=6).map(max_row_score).sum();
        assert_eq!(sum, 105);
    }

    #[test]
    fn perfect_game_is_max_score() {
        let score = final_score(&[5, 10, 15, 20, 25, 30], 0, 30);
        assert_eq!(score.base, 105);
        assert_eq!(score.completion_bonus, 20);
        assert_eq!(score.lives_bonus, 25);
        assert_eq!(score.total, MAX_SCORE);
        assert!(score.is_perfect());
    }

    #[test]
    fn lives_bonus_threshold() {
        let rows = [5, 10, 15, 20, 25, 30];
        assert_eq!(final_score(&rows, 20, 10).lives_bonus, 25);
        assert_eq!(final_score(&rows, 21, 9).lives_bonus, 0);
        assert_eq!(final_score(&rows, 21, 9).completion_bonus, 20);
    }

    #[test]
    fn unsolved_row_forfeits_all_bonuses() {
        let score = final_score(&[5, 10, 0, 20, 25, 30], 4, 26);
        assert_eq!(score.completion_bonus, 0);
        assert_eq!(score.lives_bonus, 0);
        assert_eq!(score.total, 90);
    }

    #[test]
    fn total_errors_carried_not_scored() {
        let a = final_score(&[5, 10, 15, 20, 25, 30], 0, 30);
        let b = final_score(&[5, 10, 15, 20, 25, 30], 7, 30);
        assert_eq!(a.total, b.total);
        assert_eq!(b.total_errors, 7);
    }
}
