//! Benchmark command
//!
//! Solves a batch of random boards in parallel and sequentially, and compares
//! the two.

use crate::core::{Grid, random_board};
use crate::dictionary::PrefixDictionary;
use crate::output::progress_bar;
use crate::solver::Solver;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::time::Duration;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub boards: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    /// Found word counts by word length
    pub distribution: BTreeMap<usize, usize>,
    pub parallel_duration: Duration,
    pub sequential_duration: Duration,
    pub speedup: f64,
    /// Boards where parallel and sequential results differed
    pub mismatches: usize,
    pub best_board: Option<(Grid, usize)>,
}

/// Generate `count` random square boards
///
/// A seed makes the batch reproducible.
///
/// # Errors
///
/// Returns an error if `size` is zero.
pub fn generate_boards(size: usize, count: usize, seed: Option<u64>) -> Result<Vec<Grid>> {
    let mut rng = seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

    (0..count)
        .map(|_| random_board(&mut rng, size).context("Invalid board size"))
        .collect()
}

/// Solve every board both ways and gather statistics
pub fn run_benchmark(
    dictionary: &PrefixDictionary,
    boards: &[Grid],
    show_progress: bool,
) -> BenchmarkResult {
    let solver = Solver::new(dictionary);
    let pb = if show_progress {
        progress_bar(boards.len() as u64, "boards")
    } else {
        ProgressBar::hidden()
    };

    let mut total_words = 0;
    let mut min_words = usize::MAX;
    let mut max_words = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut parallel_duration = Duration::ZERO;
    let mut sequential_duration = Duration::ZERO;
    let mut mismatches = 0;
    let mut best_board: Option<(Grid, usize)> = None;

    for grid in boards {
        let parallel = solver.solve(grid);
        let sequential = solver.solve_sequential(grid);

        parallel_duration += parallel.elapsed();
        sequential_duration += sequential.elapsed();
        if parallel.words() != sequential.words() {
            mismatches += 1;
        }

        let found = parallel.len();
        total_words += found;
        min_words = min_words.min(found);
        max_words = max_words.max(found);
        for word in parallel.iter() {
            *distribution.entry(word.len()).or_insert(0) += 1;
        }
        if best_board.as_ref().is_none_or(|(_, best)| found > *best) {
            best_board = Some((grid.clone(), found));
        }

        pb.inc(1);
        pb.set_message(format!("{found} words"));
    }

    pb.finish_and_clear();

    BenchmarkResult {
        boards: boards.len(),
        total_words,
        average_words: if boards.is_empty() {
            0.0
        } else {
            total_words as f64 / boards.len() as f64
        },
        min_words: if boards.is_empty() { 0 } else { min_words },
        max_words,
        distribution,
        parallel_duration,
        sequential_duration,
        speedup: if parallel_duration.is_zero() {
            0.0
        } else {
            sequential_duration.as_secs_f64() / parallel_duration.as_secs_f64()
        },
        mismatches,
        best_board,
    }
}
