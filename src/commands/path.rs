//! Path command
//!
//! Finds the shortest ladder between two words.

use crate::dictionary::WordIndex;
use crate::graph::NeighborStrategyKind;
use crate::solver::{Path, PathFinder, PathNotFound};
use std::time::{Duration, Instant};

/// Result of a path search
pub struct PathResult {
    pub source: String,
    pub target: String,
    pub path: Result<Path, PathNotFound>,
    pub duration: Duration,
}

/// Search for the shortest ladder from `source` to `target`
#[must_use]
pub fn find_path(
    index: &WordIndex,
    strategy: NeighborStrategyKind,
    source: &str,
    target: &str,
) -> PathResult {
    let start = Instant::now();
    let finder = PathFinder::new(strategy.over(index));
    let path = finder.search(source, target);

    PathResult {
        source: source.to_lowercase(),
        target: target.to_lowercase(),
        path,
        duration: start.elapsed(),
    }
}
