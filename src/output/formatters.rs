//! Formatting utilities for terminal output and sharing

use crate::core::ROW_COUNT;
use crate::engine::{GameState, LetterBox};
use crate::engine::scoring::{MAX_SCORE, max_row_score};

/// Colored square for a row, keyed by its share of the row maximum
///
/// Thresholds are inclusive: at least 3/4 is green, 1/2 yellow, 1/4 orange,
/// anything lower red.
#[must_use]
pub const fn row_glyph(score: u32, row_len: usize) -> char {
    let max = max_row_score(row_len);
    // Compare score / max against quarters without floats
    if score * 4 >= max * 3 {
        '🟩'
    } else if score * 2 >= max {
        '🟨'
    } else if score * 4 >= max {
        '🟧'
    } else {
        '🟥'
    }
}

/// One glyph per row
#[must_use]
pub fn row_glyphs(state: &GameState) -> String {
    state
        .row_scores()
        .iter()
        .enumerate()
        .map(|(i, &score)| row_glyph(score, i + 1))
        .collect()
}

/// Human-readable summary of a finished game
///
/// # Examples
/// ```
/// use piramit::engine::GameState;
/// use piramit::output::formatters::share_text;
///
/// let text = share_text(&GameState::daily(4));
/// assert!(text.starts_with("🔺 Piramit #4\n"));
/// ```
#[must_use]
pub fn share_text(state: &GameState) -> String {
    format!(
        "🔺 Piramit #{}\n📊 Skor: {}/{MAX_SCORE}\n❤️ Can: {}/{}\n\n{}",
        state.day_number(),
        state.total_score(),
        state.lives_remaining(),
        state.total_lives(),
        row_glyphs(state)
    )
}

/// Share text rebuilt from a stored daily result
///
/// Lives are not stored, so the lives line is left out.
#[must_use]
pub fn share_text_from_scores(
    day_number: i32,
    total_score: u32,
    row_scores: &[u32; ROW_COUNT],
) -> String {
    let glyphs: String = row_scores
        .iter()
        .enumerate()
        .map(|(i, &score)| row_glyph(score, i + 1))
        .collect();
    format!("🔺 Piramit #{day_number}\n📊 Skor: {total_score}/{MAX_SCORE}\n\n{glyphs}")
}

/// Text inside a box: its letter once revealed, otherwise its number
#[must_use]
pub fn box_label(letter_box: &LetterBox) -> String {
    if letter_box.revealed {
        letter_box.letter.to_string()
    } else {
        letter_box.number.to_string()
    }
}

/// Left padding that centres row `row` of the pyramid
///
/// Rows grow by one box per step and each box is `cell_width` wide.
#[must_use]
pub const fn row_indent(row: usize, cell_width: usize) -> usize {
    (ROW_COUNT - 1 - row) * cell_width / 2
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining lives as a bar
#[must_use]
pub fn lives_bar(state: &GameState, width: usize) -> String {
    create_progress_bar(
        f64::from(state.lives_remaining()),
        f64::from(state.total_lives()),
        width,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;

    #[test]
    fn glyph_thresholds_for_six_letter_row() {
        // Max 30
        assert_eq!(row_glyph(30, 6), '🟩');
        assert_eq!(row_glyph(23, 6), '🟩');
        assert_eq!(row_glyph(22, 6), '🟨');
        assert_eq!(row_glyph(15, 6), '🟨');
        assert_eq!(row_glyph(14, 6), '🟧');
        assert_eq!(row_glyph(8, 6), '🟧');
        assert_eq!(row_glyph(7, 6), '🟥');
        assert_eq!(row_glyph(0, 6), '🟥');
    }

    #[test]
    fn glyph_for_single_letter_row() {
        assert_eq!(row_glyph(5, 1), '🟩');
        assert_eq!(row_glyph(3, 1), '🟨');
        assert_eq!(row_glyph(2, 1), '🟧');
        assert_eq!(row_glyph(1, 1), '🟥');
    }

    #[test]
    fn share_text_for_fresh_game() {
        let game = GameState::daily(7);
        assert_eq!(
            share_text(&game),
            "🔺 Piramit #7\n📊 Skor: 0/150\n❤️ Can: 30/30\n\n🟥🟥🟥🟥🟥🟥"
        );
    }

    #[test]
    fn share_text_for_perfect_game() {
        let mut game = GameState::daily(0);
        while !game.is_complete() {
            let letters: Vec<Letter> = game.active_row().word().letters().to_vec();
            for l in letters {
                game = game.guess_letter(l).0;
            }
            game = game.advance_row();
        }
        assert_eq!(
            share_text(&game),
            "🔺 Piramit #0\n📊 Skor: 150/150\n❤️ Can: 30/30\n\n🟩🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn share_text_from_stored_scores() {
        let text = share_text_from_scores(12, 80, &[5, 5, 15, 0, 25, 30]);
        assert_eq!(text, "🔺 Piramit #12\n📊 Skor: 80/150\n\n🟩🟨🟩🟥🟩🟩");
    }

    #[test]
    fn box_label_shows_number_until_revealed() {
        let game = GameState::daily(0);
        let first = game.active_row().boxes()[0];
        assert_eq!(box_label(&first), "26");

        let (game, _) = game.guess_letter(Letter::parse('a').unwrap());
        assert_eq!(box_label(&game.rows()[0].boxes()[0]), "A");
    }

    #[test]
    fn rows_are_centred() {
        assert_eq!(row_indent(0, 4), 10);
        assert_eq!(row_indent(5, 4), 0);
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn lives_bar_full_at_start() {
        let game = GameState::daily(1);
        assert_eq!(lives_bar(&game, 5), "█████");
    }
}
