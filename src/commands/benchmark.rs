//! Benchmark command
//!
//! Plays many random rounds with the solver and summarizes the outcomes.

use crate::core::{GameState, Round, SecretWord};
use crate::game::GameError;
use crate::solver::FrequencySolver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Outcome of one simulated round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub word: String,
    pub state: GameState,
    pub misses: u8,
    pub guesses: usize,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_rounds: usize,
    pub wins: usize,
    pub losses: usize,
    pub average_misses: f64,
    pub average_guesses: f64,
    pub miss_distribution: BTreeMap<u8, usize>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_rounds == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_rounds as f64
        }
    }
}

/// Play a single round against `secret` until it ends
#[must_use]
pub fn play_round(solver: &FrequencySolver, secret: SecretWord) -> RoundSummary {
    let mut round = Round::new(secret);
    let mut guesses = 0;

    while round.state() == GameState::InProgress {
        let Some(letter) = solver.next_letter(&round.snapshot()) else {
            break;
        };
        round.guess(letter);
        guesses += 1;
    }

    RoundSummary {
        word: round.secret().text().to_string(),
        state: round.state(),
        misses: round.snapshot().misses(),
        guesses,
    }
}

/// Run `count` rounds in parallel
///
/// Round `i` draws its word from an RNG seeded with `seed + i`, so a given
/// seed always produces the same rounds regardless of thread scheduling.
///
/// # Errors
///
/// Returns `GameError::EmptyWordList` if `words` is empty.
pub fn run_benchmark(
    words: &[SecretWord],
    count: usize,
    seed: u64,
) -> Result<BenchmarkResult, GameError> {
    if words.is_empty() {
        return Err(GameError::EmptyWordList);
    }

    let solver = FrequencySolver::new(words);

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let summaries: Vec<RoundSummary> = (0..count as u64)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i));
            let secret = words[rng.random_range(0..words.len())].clone();
            let summary = play_round(&solver, secret);
            pb.inc(1);
            summary
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    Ok(summarize(&summaries, duration))
}

fn summarize(summaries: &[RoundSummary], duration: Duration) -> BenchmarkResult {
    let total_rounds = summaries.len();
    let wins = summaries
        .iter()
        .filter(|s| s.state == GameState::Won)
        .count();

    let mut miss_distribution = BTreeMap::new();
    for summary in summaries {
        *miss_distribution.entry(summary.misses).or_insert(0) += 1;
    }

    let total_misses: usize = summaries.iter().map(|s| usize::from(s.misses)).sum();
    let total_guesses: usize = summaries.iter().map(|s| s.guesses).sum();
    let per_round = |total: usize| {
        if total_rounds == 0 {
            0.0
        } else {
            total as f64 / total_rounds as f64
        }
    };

    BenchmarkResult {
        total_rounds,
        wins,
        losses: total_rounds - wins,
        average_misses: per_round(total_misses),
        average_guesses: per_round(total_guesses),
        miss_distribution,
        duration,
        rounds_per_second: total_rounds as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
