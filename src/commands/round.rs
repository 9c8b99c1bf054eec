//! One puzzle as the front ends play it
//!
//! [`Round`] wraps the engine state with what both front ends need on top
//! of it: a hint allowance, automatic row advancement and analytics events.

use crate::analytics::{EventKind, Tracker};
use crate::core::Letter;
use crate::engine::calendar::day_number;
use crate::engine::{Catalog, EndlessPool, GameMode, GameState, GuessOutcome, draw_endless_seed};
use crate::output::formatters::share_text;
use crate::storage::{ResultStore, StatsStore, StoreError, StoredStats, record_daily_result};
use chrono::NaiveDate;
use rand::Rng;
use tracing::debug;

/// Hints available per puzzle
pub const HINTS_PER_GAME: u32 = 3;

/// Result of asking for a hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintResult {
    /// All hints for this puzzle are spent
    NoneLeft,
    /// The game is over or the row has nothing hidden
    NothingToReveal,
    /// The letter was guessed on the player's behalf
    Used { letter: Letter, outcome: GuessOutcome },
}

pub struct Round<'a> {
    state: GameState,
    pool: Option<EndlessPool>,
    date: NaiveDate,
    hints_remaining: u32,
    tracker: &'a Tracker,
}

impl<'a> Round<'a> {
    /// The daily puzzle for `today`
    #[must_use]
    pub fn daily(catalog: &Catalog, today: NaiveDate, tracker: &'a Tracker) -> Self {
        let round = Self::played_daily(catalog, today, tracker);
        tracker.track(EventKind::GameStart, |e| {
            e.with_mode(GameMode::Daily.as_str())
                .with_day(round.state.day_number())
        });
        round
    }

    /// The daily puzzle for a day already played; no game start is tracked
    #[must_use]
    pub fn played_daily(catalog: &Catalog, today: NaiveDate, tracker: &'a Tracker) -> Self {
        let state = GameState::daily_from(catalog, day_number(today));
        Self::start(state, None, today, tracker)
    }

    /// A fresh endless puzzle from `pool`
    pub fn endless<R: Rng + ?Sized>(
        pool: EndlessPool,
        rng: &mut R,
        today: NaiveDate,
        tracker: &'a Tracker,
    ) -> Self {
        let state = GameState::endless(pool, draw_endless_seed(rng));
        tracker.track(EventKind::EndlessStart, |e| {
            e.with_mode(pool.key()).with_extra("category", pool.label())
        });
        Self::start(state, Some(pool), today, tracker)
    }

    fn start(
        state: GameState,
        pool: Option<EndlessPool>,
        date: NaiveDate,
        tracker: &'a Tracker,
    ) -> Self {
        debug!(day = state.day_number(), label = state.mode_label(), "round started");
        Self {
            state,
            pool,
            date,
            hints_remaining: HINTS_PER_GAME,
            tracker,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// The endless pool, `None` for the daily puzzle
    #[must_use]
    pub const fn pool(&self) -> Option<EndlessPool> {
        self.pool
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub const fn hints_remaining(&self) -> u32 {
        self.hints_remaining
    }

    #[must_use]
    pub const fn is_daily(&self) -> bool {
        self.pool.is_none()
    }

    /// Guess a letter, moving on to the next row when one is solved
    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        let row = self.state.current_row();
        let (next, outcome) = self.state.guess_letter(letter);
        self.state = next;

        match &outcome {
            GuessOutcome::RowComplete { row_score, .. } => {
                let score = *row_score;
                self.tracker
                    .track(EventKind::RowComplete, |e| e.with_row(row).with_score(score));
                self.state = self.state.advance_row();
            }
            GuessOutcome::GameComplete { score, .. } => {
                let (score, lives) = (*score, self.state.lives_remaining());
                let (mode, day) = (self.state.mode().as_str(), self.state.day_number());
                self.tracker.track(EventKind::GameComplete, |e| {
                    e.with_score(score)
                        .with_mode(mode)
                        .with_day(day)
                        .with_extra("livesRemaining", lives)
                });
            }
            GuessOutcome::GameOverNoLives { score, .. } => {
                let (score, mode) = (*score, self.state.mode().as_str());
                self.tracker
                    .track(EventKind::GameOver, |e| e.with_score(score).with_mode(mode));
            }
            _ => {}
        }
        outcome
    }

    /// Spend a hint on a random hidden letter of the active row
    pub fn hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> HintResult {
        if self.hints_remaining == 0 {
            return HintResult::NoneLeft;
        }
        let Some(letter) = self.state.hint_letter(rng) else {
            return HintResult::NothingToReveal;
        };

        let outcome = self.guess(letter);
        self.hints_remaining -= 1;
        let remaining = self.hints_remaining;
        self.tracker.track(EventKind::HintUsed, |e| {
            e.with_letter(letter.as_char())
                .with_extra("hintsRemaining", remaining)
        });
        HintResult::Used { letter, outcome }
    }

    /// Share text for the current state
    #[must_use]
    pub fn share(&self) -> String {
        let day = self.state.day_number();
        self.tracker.track(EventKind::Share, |e| e.with_day(day));
        share_text(&self.state)
    }

    /// Persist the result if this is a finished daily puzzle
    ///
    /// # Errors
    /// Propagates store failures.
    pub fn record<S>(&self, store: &mut S) -> Result<Option<StoredStats>, StoreError>
    where
        S: ResultStore + StatsStore + ?Sized,
    {
        if !self.is_daily() {
            return Ok(None);
        }
        record_daily_result(store, &self.state, self.date)
    }
}

/// One-line description of a guess for message panels
#[must_use]
pub fn describe(letter: Letter, outcome: &GuessOutcome) -> String {
    match outcome {
        GuessOutcome::None => "The game is over".to_string(),
        GuessOutcome::AlreadyGuessed => format!("{letter} was already tried on this row"),
        GuessOutcome::Correct { revealed } => match revealed.len() {
            1 => format!("{letter} opens 1 box"),
            n => format!("{letter} opens {n} boxes"),
        },
        GuessOutcome::Wrong { wrong_count } => {
            format!("No {letter} in this word ({wrong_count} wrong on this row)")
        }
        GuessOutcome::RowComplete { row_score, .. } => format!("Row solved! +{row_score}"),
        GuessOutcome::GameComplete { score, .. } => {
            format!("Pyramid complete! Final score {score}")
        }
        GuessOutcome::GameOverNoLives { score, .. } => {
            format!("Out of lives. Final score {score}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{AnalyticsEvent, AnalyticsSink, Session};
    use crate::core::PuzzleWord;
    use crate::storage::MemoryStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recording(Mutex<Vec<AnalyticsEvent>>);

    impl AnalyticsSink for Recording {
        fn send(&self, event: &AnalyticsEvent) {
            self.0.lock().unwrap().push(event.clone());
        }
    }

    fn recording_tracker() -> (Tracker, Arc<Recording>) {
        let sink = Arc::new(Recording::default());
        let tracker = Tracker::new(Session::ephemeral(), Box::new(Arc::clone(&sink)));
        (tracker, sink)
    }

    fn launch_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 6).unwrap()
    }

    fn misses(word: &PuzzleWord) -> Vec<Letter> {
        Letter::all().filter(|&l| !word.has_letter(l)).collect()
    }

    fn solve_active_row(round: &mut Round<'_>) -> GuessOutcome {
        let letters = round.state().active_row().word().letters().to_vec();
        let mut last = GuessOutcome::None;
        for l in letters {
            let outcome = round.guess(l);
            if outcome.is_effective() {
                last = outcome;
            }
        }
        last
    }

    #[test]
    fn row_completion_advances_automatically() {
        let tracker = Tracker::disabled();
        let mut round = Round::daily(Catalog::daily(), launch_day(), &tracker);

        // Day 0: "A"
        let outcome = round.guess(Letter::parse('a').unwrap());
        assert!(matches!(outcome, GuessOutcome::RowComplete { .. }));
        assert_eq!(round.state().current_row(), 1);
        assert!(!round.state().awaiting_advance());
    }

    #[test]
    fn hints_are_limited() {
        let tracker = Tracker::disabled();
        let mut rng = StdRng::seed_from_u64(3);
        let mut round = Round::daily(Catalog::daily(), launch_day(), &tracker);

        for expected_left in (0..HINTS_PER_GAME).rev() {
            let result = round.hint(&mut rng);
            assert!(matches!(result, HintResult::Used { .. }));
            assert_eq!(round.hints_remaining(), expected_left);
        }
        assert_eq!(round.hint(&mut rng), HintResult::NoneLeft);
    }

    #[test]
    fn hint_reveals_a_letter_of_the_word() {
        let tracker = Tracker::disabled();
        let mut rng = StdRng::seed_from_u64(11);
        let mut round = Round::daily(Catalog::daily(), launch_day(), &tracker);
        round.guess(Letter::parse('a').unwrap());

        // Row 1 is "ÖN"
        let row_word = round.state().active_row().word().clone();
        let HintResult::Used { letter, outcome } = round.hint(&mut rng) else {
            panic!("expected a hint");
        };
        assert!(row_word.has_letter(letter));
        assert!(matches!(outcome, GuessOutcome::Correct { .. }));
    }

    #[test]
    fn hint_after_game_over_reveals_nothing() {
        let tracker = Tracker::disabled();
        let mut rng = StdRng::seed_from_u64(1);
        let mut round = Round::daily(Catalog::daily(), launch_day(), &tracker);

        while !round.state().is_complete() {
            let word = round.state().active_row().word().clone();
            let row = round.state().current_row();
            for l in misses(&word) {
                round.guess(l);
                if round.state().is_complete() {
                    break;
                }
            }
            if !round.state().is_complete() && round.state().current_row() == row {
                solve_active_row(&mut round);
            }
        }
        assert_eq!(round.hint(&mut rng), HintResult::NothingToReveal);
        assert_eq!(round.hints_remaining(), HINTS_PER_GAME);
    }

    #[test]
    fn events_follow_the_game() {
        let (tracker, sink) = recording_tracker();
        let mut round = Round::daily(Catalog::daily(), launch_day(), &tracker);
        while !round.state().is_complete() {
            solve_active_row(&mut round);
        }

        let kinds: Vec<EventKind> = sink.0.lock().unwrap().iter().map(|e| e.event).collect();
        let mut expected = vec![EventKind::GameStart];
        expected.extend([EventKind::RowComplete; 5]);
        expected.push(EventKind::GameComplete);
        assert_eq!(kinds, expected);

        let events = sink.0.lock().unwrap();
        assert_eq!(events[0].day_number, Some(0));
        assert_eq!(events[1].row, Some(0));
        assert_eq!(events[6].score, Some(150));
    }

    #[test]
    fn endless_round_starts_with_pool_event() {
        let (tracker, sink) = recording_tracker();
        let mut rng = StdRng::seed_from_u64(9);
        let round = Round::endless(EndlessPool::Objects, &mut rng, launch_day(), &tracker);

        assert!(!round.is_daily());
        assert_eq!(round.state().mode(), GameMode::Infinite);
        assert_eq!(round.state().active_row().word().text(), "K");

        let events = sink.0.lock().unwrap();
        assert_eq!(events[0].event, EventKind::EndlessStart);
        assert_eq!(events[0].mode.as_deref(), Some("nesne"));
    }

    #[test]
    fn only_daily_rounds_are_recorded() {
        let tracker = Tracker::disabled();
        let mut store = MemoryStore::new();
        let mut rng = StdRng::seed_from_u64(2);

        let mut endless = Round::endless(EndlessPool::Nature, &mut rng, launch_day(), &tracker);
        while !endless.state().is_complete() {
            solve_active_row(&mut endless);
        }
        assert_eq!(endless.record(&mut store).unwrap(), None);

        let mut daily = Round::daily(Catalog::daily(), launch_day(), &tracker);
        while !daily.state().is_complete() {
            solve_active_row(&mut daily);
        }
        let stats = daily.record(&mut store).unwrap().unwrap();
        assert_eq!(stats.games_played, 1);
    }

    #[test]
    fn describe_guesses() {
        let k = Letter::parse('k').unwrap();
        assert_eq!(
            describe(k, &GuessOutcome::Correct { revealed: vec![0, 3] }),
            "K opens 2 boxes"
        );
        assert_eq!(
            describe(k, &GuessOutcome::Wrong { wrong_count: 2 }),
            "No K in this word (2 wrong on this row)"
        );
        assert_eq!(
            describe(k, &GuessOutcome::AlreadyGuessed),
            "K was already tried on this row"
        );
    }

    #[test]
    fn share_uses_current_state() {
        let tracker = Tracker::disabled();
        let round = Round::daily(Catalog::daily(), launch_day(), &tracker);
        assert!(round.share().starts_with("🔺 Piramit #0\n"));
    }
}
