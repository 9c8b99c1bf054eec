//! Simulate command
//!
//! Plays many endless puzzles with a random guesser to show how scores
//! spread. Games are independent, so they run in parallel.

use crate::core::Letter;
use crate::engine::{EndlessPool, GameState, MAX_SCORE, draw_endless_seed};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Width of one score bucket in the distribution
pub const BUCKET_WIDTH: u32 = 25;

/// Buckets `0-24, 25-49, ..., 125-150`
pub const BUCKET_COUNT: usize = (MAX_SCORE / BUCKET_WIDTH) as usize;

/// One simulated puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedGame {
    pub seed: i32,
    pub score: u32,
    pub rows_solved: usize,
    pub lives_remaining: u32,
}

/// Aggregate over a simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub pool: EndlessPool,
    pub games: usize,
    pub completed: usize,
    pub average_score: f64,
    pub min_score: u32,
    pub max_score: u32,
    pub average_rows: f64,
    pub distribution: [usize; BUCKET_COUNT],
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play one endless puzzle picking uniformly among untried letters
#[must_use]
pub fn play_random_game(pool: EndlessPool, rng_seed: u64) -> SimulatedGame {
    let mut rng = StdRng::seed_from_u64(rng_seed);
    let seed = draw_endless_seed(&mut rng);
    let mut game = GameState::endless(pool, seed);

    while !game.is_complete() {
        let row = game.active_row();
        let untried: Vec<Letter> = Letter::all().filter(|&l| !row.has_guessed(l)).collect();
        let Some(&letter) = untried.choose(&mut rng) else {
            break;
        };
        game = game.guess_letter(letter).0;
        if game.awaiting_advance() {
            game = game.advance_row();
        }
    }

    let rows_solved = game
        .rows()
        .iter()
        .filter(|r| r.status() == crate::engine::RowStatus::Completed)
        .count();

    SimulatedGame {
        seed,
        score: game.total_score(),
        rows_solved,
        lives_remaining: game.lives_remaining(),
    }
}

/// Run `count` games seeded from `start_seed` upwards
///
/// Results depend only on the arguments, not on thread scheduling.
///
/// # Panics
///
/// Panics if the hard-coded progress bar template is invalid.
#[must_use]
pub fn run_simulation(
    count: usize,
    start_seed: u64,
    pool: EndlessPool,
    progress: bool,
) -> SimulationResult {
    let pb = if progress {
        let pb = ProgressBar::new(count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .expect("valid progress template")
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let games: Vec<SimulatedGame> = (0..count as u64)
        .into_par_iter()
        .map(|i| {
            let game = play_random_game(pool, start_seed.wrapping_add(i));
            pb.inc(1);
            game
        })
        .collect();
    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    summarize(pool, &games, duration)
}

fn summarize(pool: EndlessPool, games: &[SimulatedGame], duration: Duration) -> SimulationResult {
    let mut distribution = [0; BUCKET_COUNT];
    for game in games {
        let bucket = ((game.score / BUCKET_WIDTH) as usize).min(BUCKET_COUNT - 1);
        distribution[bucket] += 1;
    }

    let total = games.len().max(1) as f64;
    let score_sum: u64 = games.iter().map(|g| u64::from(g.score)).sum();
    let rows_sum: usize = games.iter().map(|g| g.rows_solved).sum();

    SimulationResult {
        pool,
        games: games.len(),
        completed: games.iter().filter(|g| g.rows_solved == 6).count(),
        average_score: score_sum as f64 / total,
        min_score: games.iter().map(|g| g.score).min().unwrap_or(0),
        max_score: games.iter().map(|g| g.score).max().unwrap_or(0),
        average_rows: rows_sum as f64 / total,
        distribution,
        duration,
        games_per_second: games.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_game_always_finishes() {
        for seed in 0..20 {
            let game = play_random_game(EndlessPool::Random, seed);
            assert!(game.score <= MAX_SCORE);
            assert!(game.rows_solved <= 6);
            if game.rows_solved < 6 {
                assert_eq!(game.lives_remaining, 0);
            }
        }
    }

    #[test]
    fn random_game_is_reproducible() {
        assert_eq!(
            play_random_game(EndlessPool::Nature, 77),
            play_random_game(EndlessPool::Nature, 77)
        );
    }

    #[test]
    fn simulation_counts_every_game() {
        let result = run_simulation(40, 1000, EndlessPool::Random, false);
        assert_eq!(result.games, 40);
        assert_eq!(result.distribution.iter().sum::<usize>(), 40);
        assert!(result.min_score <= result.max_score);
        assert!(result.average_score <= f64::from(MAX_SCORE));
    }

    #[test]
    fn simulation_is_deterministic() {
        let a = run_simulation(16, 5, EndlessPool::DailyLife, false);
        let b = run_simulation(16, 5, EndlessPool::DailyLife, false);
        assert_eq!(a.distribution, b.distribution);
        assert_eq!(a.average_score.to_bits(), b.average_score.to_bits());
    }

    #[test]
    fn top_bucket_includes_perfect_score() {
        let game = SimulatedGame {
            seed: 0,
            score: MAX_SCORE,
            rows_solved: 6,
            lives_remaining: 30,
        };
        let result = summarize(EndlessPool::Random, &[game], Duration::from_secs(1));
        assert_eq!(result.distribution[BUCKET_COUNT - 1], 1);
        assert_eq!(result.completed, 1);
    }
}
