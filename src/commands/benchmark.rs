//! Benchmark command
//!
//! Measures search throughput across many random boards.

use crate::core::Board;
use crate::dictionary::Dictionary;
use crate::finder::find_all;
use crate::sampler::LetterSampler;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_boards: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    /// Boards counted by the length of their longest word
    pub longest_distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub boards_per_second: f64,
    /// Richest board and its word count
    pub best_board: Option<(Board, usize)>,
}

/// Board shape and sampler used for a benchmark
pub struct BenchmarkSetup<'a> {
    pub sampler: &'a LetterSampler,
    pub width: usize,
    pub height: usize,
    pub dictionary: &'a Dictionary,
}

/// Generate `count` random boards and find every word on each
///
/// Shows a progress bar on stderr when `show_progress` is set.
pub fn run_benchmark<R: Rng + ?Sized>(
    setup: &BenchmarkSetup<'_>,
    count: usize,
    rng: &mut R,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut total_words = 0;
    let mut min_words = usize::MAX;
    let mut max_words = 0;
    let mut longest_distribution: HashMap<usize, usize> = HashMap::new();
    let mut best_board: Option<(Board, usize)> = None;

    for _ in 0..count {
        let board = setup
            .sampler
            .generate_board(setup.width, setup.height, rng);
        let words = find_all(&board, setup.dictionary);
        let found = words.len();
        debug!(%board, found, "benchmark board searched");

        total_words += found;
        min_words = min_words.min(found);
        max_words = max_words.max(found);
        let longest = words.iter().map(String::len).max().unwrap_or(0);
        *longest_distribution.entry(longest).or_insert(0) += 1;

        if best_board.as_ref().is_none_or(|(_, best)| found > *best) {
            best_board = Some((board, found));
        }

        pb.set_message(format!("{found} words"));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let (average_words, boards_per_second) = if count == 0 {
        (0.0, 0.0)
    } else {
        (
            total_words as f64 / count as f64,
            count as f64 / duration.as_secs_f64().max(f64::EPSILON),
        )
    };

    BenchmarkResult {
        total_boards: count,
        total_words,
        average_words,
        min_words: if count == 0 { 0 } else { min_words },
        max_words,
        longest_distribution,
        duration,
        boards_per_second,
        best_board,
    }
}
