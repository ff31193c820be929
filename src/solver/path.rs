//! Shortest transformation path search
//!
//! Breadth-first search from the source word over a `NeighborGraph`. BFS on
//! an unweighted graph returns a minimum-move path; ties among equally short
//! paths are broken by whatever order the graph yields neighbors.

use crate::core::{Word, canonical};
use crate::dictionary::WordId;
use crate::graph::NeighborGraph;
use std::collections::VecDeque;
use std::fmt;
use tracing::debug;

/// An ordered ladder of adjacent words, source first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(Vec<Word>);

impl Path {
    /// The words of the path, in order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.0
    }

    /// Number of moves (edges); one less than the word count
    #[inline]
    #[must_use]
    pub fn moves(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Number of words on the path
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Word> {
        self.0.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Word> {
        self.0.last()
    }

    /// Consume the path, returning its words
    #[must_use]
    pub fn into_words(self) -> Vec<Word> {
        self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}

/// Why no path was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathNotFound {
    UnknownSource(String),
    UnknownTarget(String),
    LengthMismatch { source: usize, target: usize },
    Unreachable { explored: usize },
}

impl fmt::Display for PathNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSource(word) | Self::UnknownTarget(word) => {
                write!(f, "'{word}' is not in the dictionary")
            }
            Self::LengthMismatch { source, target } => write!(
                f,
                "Words of length {source} and {target} can never be connected"
            ),
            Self::Unreachable { explored } => {
                write!(f, "No path found ({explored} words explored)")
            }
        }
    }
}

impl std::error::Error for PathNotFound {}

/// Breadth-first shortest path finder
pub struct PathFinder<G: NeighborGraph> {
    graph: G,
}

impl<G: NeighborGraph> PathFinder<G> {
    pub const fn new(graph: G) -> Self {
        Self { graph }
    }

    /// The underlying graph
    pub const fn graph(&self) -> &G {
        &self.graph
    }

    /// Shortest path between two words, or `None` if there is none
    ///
    /// Unknown endpoints and unreachable targets both yield `None`.
    ///
    /// # Examples
    /// ```
    /// use word_weaver::dictionary::WordIndex;
    /// use word_weaver::graph::ScanNeighbors;
    /// use word_weaver::solver::PathFinder;
    ///
    /// let index = WordIndex::from_words(["word", "ward", "wars", "cars"]);
    /// let finder = PathFinder::new(ScanNeighbors::new(&index));
    ///
    /// let path = finder.find_path("word", "cars").unwrap();
    /// assert_eq!(path.to_string(), "word -> ward -> wars -> cars");
    /// ```
    pub fn find_path(&self, source: &str, target: &str) -> Option<Path> {
        self.search(source, target).ok()
    }

    /// Shortest path between two words with the reason on failure
    ///
    /// # Errors
    ///
    /// Returns `PathNotFound` when an endpoint is missing from the dictionary,
    /// the endpoints differ in length, or the search exhausts the reachable
    /// component without meeting the target.
    pub fn search(&self, source: &str, target: &str) -> Result<Path, PathNotFound> {
        let index = self.graph.index();
        let source_key = canonical(source.trim());
        let target_key = canonical(target.trim());

        let start = index
            .id_of(&source_key)
            .ok_or_else(|| PathNotFound::UnknownSource(source_key.clone()))?;
        let goal = index
            .id_of(&target_key)
            .ok_or_else(|| PathNotFound::UnknownTarget(target_key.clone()))?;

        let (source_len, target_len) = (source_key.chars().count(), target_key.chars().count());
        if source_len != target_len {
            return Err(PathNotFound::LengthMismatch {
                source: source_len,
                target: target_len,
            });
        }

        // Arena-style bookkeeping: both vectors are indexed by WordId
        let mut visited = vec![false; index.len()];
        let mut parent: Vec<Option<WordId>> = vec![None; index.len()];
        let mut queue = VecDeque::from([start]);
        visited[start.index()] = true;
        let mut explored = 0;

        while let Some(current) = queue.pop_front() {
            explored += 1;

            if current == goal {
                let path = self.reconstruct(&parent, goal);
                debug!(%source_key, %target_key, explored, moves = path.moves(), "path found");
                return Ok(path);
            }

            for next in self.graph.neighbors(current) {
                if !visited[next.index()] {
                    visited[next.index()] = true;
                    parent[next.index()] = Some(current);
                    queue.push_back(next);
                }
            }
        }

        debug!(%source_key, %target_key, explored, "no path");
        Err(PathNotFound::Unreachable { explored })
    }

    /// Walk predecessors back from `goal` and reverse
    fn reconstruct(&self, parent: &[Option<WordId>], goal: WordId) -> Path {
        let index = self.graph.index();
        let mut words = Vec::new();
        let mut node = Some(goal);

        while let Some(id) = node {
            if let Some(word) = index.get(id) {
                words.push(word.clone());
            }
            node = parent[id.index()];
        }

        words.reverse();
        Path(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordIndex;
    use crate::graph::{BucketNeighbors, NeighborStrategyKind, ScanNeighbors};

    fn texts(path: &Path) -> Vec<&str> {
        path.words().iter().map(Word::text).collect()
    }

    fn assert_valid_ladder(path: &Path, index: &WordIndex) {
        for word in path.words() {
            assert!(index.contains(word.text()), "'{word}' not in dictionary");
        }
        for pair in path.words().windows(2) {
            assert!(pair[0].is_adjacent_to(&pair[1]), "{} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn direct_neighbor_path() {
        let index = WordIndex::from_words(["word", "ward", "ward", "wars", "cars", "cord"]);
        let finder = PathFinder::new(ScanNeighbors::new(&index));

        let path = finder.find_path("word", "ward").unwrap();
        assert_eq!(texts(&path), vec!["word", "ward"]);
        assert_eq!(path.len(), 2);
        assert_eq!(path.moves(), 1);
    }

    #[test]
    fn multi_step_path() {
        let index = WordIndex::from_words(["word", "ward", "wars", "cars"]);
        let finder = PathFinder::new(BucketNeighbors::new(&index));

        let path = finder.find_path("word", "cars").unwrap();
        assert_eq!(texts(&path), vec!["word", "ward", "wars", "cars"]);
    }

    #[test]
    fn same_word_is_trivial_path() {
        let index = WordIndex::from_words(["word", "ward"]);
        let finder = PathFinder::new(ScanNeighbors::new(&index));

        let path = finder.find_path("word", "WORD").unwrap();
        assert_eq!(texts(&path), vec!["word"]);
        assert_eq!(path.moves(), 0);
    }

    #[test]
    fn input_case_is_ignored() {
        let index = WordIndex::from_words(["word", "ward", "wars", "cars"]);
        let finder = PathFinder::new(ScanNeighbors::new(&index));

        let path = finder.find_path("WoRd", "CARS").unwrap();
        assert_eq!(path.first().unwrap().text(), "word");
        assert_eq!(path.last().unwrap().text(), "cars");
    }

    #[test]
    fn unknown_endpoints_fail_cleanly() {
        let index = WordIndex::from_words(["word", "ward"]);
        let finder = PathFinder::new(ScanNeighbors::new(&index));

        assert_eq!(
            finder.search("xyzw", "ward"),
            Err(PathNotFound::UnknownSource("xyzw".to_string()))
        );
        assert_eq!(
            finder.search("word", "xyzw"),
            Err(PathNotFound::UnknownTarget("xyzw".to_string()))
        );
        assert!(finder.find_path("xyzw", "xyzw").is_none());
    }

    #[test]
    fn length_mismatch_is_unreachable() {
        let index = WordIndex::from_words(["word", "words", "wordy"]);
        let finder = PathFinder::new(ScanNeighbors::new(&index));

        assert_eq!(
            finder.search("word", "words"),
            Err(PathNotFound::LengthMismatch { source: 4, target: 5 })
        );
    }

    #[test]
    fn disconnected_component_reports_unreachable() {
        let index = WordIndex::from_words(["word", "ward", "cats", "cots"]);
        let finder = PathFinder::new(ScanNeighbors::new(&index));

        assert_eq!(
            finder.search("word", "cats"),
            Err(PathNotFound::Unreachable { explored: 2 })
        );
    }

    #[test]
    fn empty_dictionary_has_no_paths() {
        let index = WordIndex::default();
        let finder = PathFinder::new(BucketNeighbors::new(&index));
        assert!(finder.find_path("word", "ward").is_none());
    }

    #[test]
    fn shortest_path_preferred_over_longer_route() {
        let index = WordIndex::from_words(["word", "wood", "good", "goad", "card", "cord"]);
        let finder = PathFinder::new(ScanNeighbors::new(&index));

        let path = finder.find_path("word", "card").unwrap();
        assert_eq!(path.moves(), 2);
        assert_valid_ladder(&path, &index);
    }

    #[test]
    fn embedded_dictionary_paths_have_minimal_length() {
        let index = WordIndex::embedded();

        // Each pair differs in every position, so the letter difference is a lower bound
        let cases = [("cold", "warm", 4), ("love", "hate", 4), ("head", "tail", 5)];

        for kind in [NeighborStrategyKind::Scan, NeighborStrategyKind::Bucket] {
            let finder = PathFinder::new(kind.over(&index));
            for (source, target, moves) in cases {
                let path = finder.find_path(source, target).unwrap();
                assert_eq!(path.moves(), moves, "{source} -> {target}: {path}");
                assert_eq!(path.first().unwrap().text(), source);
                assert_eq!(path.last().unwrap().text(), target);
                assert_valid_ladder(&path, &index);
            }
        }
    }

    #[test]
    fn isolated_word_is_unreachable() {
        let index = WordIndex::embedded();
        let finder = PathFinder::new(NeighborStrategyKind::Bucket.over(&index));
        assert!(matches!(
            finder.search("ajar", "word"),
            Err(PathNotFound::Unreachable { explored: 1 })
        ));
    }

    #[test]
    fn path_display_joins_with_arrows() {
        let index = WordIndex::from_words(["wast", "west"]);
        let finder = PathFinder::new(ScanNeighbors::new(&index));
        let path = finder.find_path("wast", "west").unwrap();
        assert_eq!(path.to_string(), "wast -> west");
    }
}
