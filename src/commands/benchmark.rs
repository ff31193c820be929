//! Benchmark command
//!
//! Solves many random same-length word pairs in parallel. All searches share
//! one read-only dictionary without locking.

use crate::core::Word;
use crate::dictionary::WordIndex;
use crate::graph::NeighborStrategyKind;
use crate::solver::PathFinder;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_pairs: usize,
    pub solvable: usize,
    pub unreachable: usize,
    pub average_moves: f64,
    pub max_moves: usize,
    pub longest: Option<(Word, Word)>,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub searches_per_second: f64,
}

/// Draw `count` random pairs of distinct, equal-length words
///
/// Returns fewer pairs (possibly none) when the dictionary has no two words
/// of a common length.
pub fn sample_pairs<R: Rng + ?Sized>(
    index: &WordIndex,
    count: usize,
    rng: &mut R,
) -> Vec<(Word, Word)> {
    let mut by_length: FxHashMap<usize, Vec<&Word>> = FxHashMap::default();
    for word in index.words() {
        by_length.entry(word.len()).or_default().push(word);
    }
    let pools: Vec<Vec<&Word>> = by_length
        .into_values()
        .filter(|pool| pool.len() >= 2)
        .collect();
    let total: usize = pools.iter().map(Vec::len).sum();
    if total == 0 {
        return Vec::new();
    }

    (0..count)
        .map(|_| {
            // Weight pools by size so every start word is equally likely
            let mut pick = rng.random_range(0..total);
            let pool = pools
                .iter()
                .find(|pool| {
                    if pick < pool.len() {
                        true
                    } else {
                        pick -= pool.len();
                        false
                    }
                })
                .unwrap_or(&pools[0]);

            let start = pool[rng.random_range(0..pool.len())];
            let mut target = pool[rng.random_range(0..pool.len())];
            while target == start {
                target = pool[rng.random_range(0..pool.len())];
            }
            (start.clone(), target.clone())
        })
        .collect()
}

/// Solve every pair and collect statistics
///
/// Set `show_progress` to draw a progress bar on stderr.
#[must_use]
pub fn run_benchmark(
    index: &WordIndex,
    strategy: NeighborStrategyKind,
    pairs: &[(Word, Word)],
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(pairs.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let finder = PathFinder::new(strategy.over(index));

    let moves: Vec<Option<usize>> = pairs
        .par_iter()
        .map(|(source, target)| {
            let result = finder
                .find_path(source.text(), target.text())
                .map(|path| path.moves());
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut total_moves = 0;
    let mut max_moves = 0;
    let mut longest = None;

    for (pair, found) in pairs.iter().zip(&moves) {
        if let Some(count) = *found {
            *distribution.entry(count).or_insert(0) += 1;
            total_moves += count;
            if count > max_moves {
                max_moves = count;
                longest = Some(pair.clone());
            }
        }
    }

    let solvable = moves.iter().filter(|m| m.is_some()).count();
    let total_pairs = pairs.len();
    info!(total_pairs, solvable, ?duration, "benchmark finished");

    BenchmarkResult {
        total_pairs,
        solvable,
        unreachable: total_pairs - solvable,
        average_moves: if solvable > 0 {
            total_moves as f64 / solvable as f64
        } else {
            0.0
        },
        max_moves,
        longest,
        distribution,
        duration,
        searches_per_second: total_pairs as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
