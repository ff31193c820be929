//! Bucketed neighbor generation
//!
//! Words are grouped by "word with one position removed". A node's neighbors
//! are the other members of its own buckets, found by hash lookup. The
//! bucket table lives in the `WordIndex` and is built once, on first use.

use super::NeighborGraph;
use crate::dictionary::{WordId, WordIndex, bucket_keys};
use rustc_hash::FxHashSet;

/// Wildcard-bucket neighbor strategy
pub struct BucketNeighbors<'a> {
    index: &'a WordIndex,
}

impl<'a> BucketNeighbors<'a> {
    #[must_use]
    pub const fn new(index: &'a WordIndex) -> Self {
        Self { index }
    }
}

impl NeighborGraph for BucketNeighbors<'_> {
    fn index(&self) -> &WordIndex {
        self.index
    }

    fn neighbors(&self, id: WordId) -> Vec<WordId> {
        let Some(word) = self.index.get(id) else {
            return Vec::new();
        };
        let buckets = self.index.buckets();

        // A distinct word shares at most one bucket with us, but dedup anyway
        let mut seen = FxHashSet::default();
        let mut found = Vec::new();
        for key in bucket_keys(word.text()) {
            let Some(members) = buckets.get(&key) else {
                continue;
            };
            for &other in members {
                if other != id && seen.insert(other) {
                    found.push(other);
                }
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_finds_one_letter_neighbors() {
        let index = WordIndex::from_words(["word", "ward", "wars", "cars", "cord"]);
        let graph = BucketNeighbors::new(&index);

        let ward = index.id_of("ward").unwrap();
        let mut found = graph.neighbors(ward);
        found.sort();

        let expected = vec![index.id_of("word").unwrap(), index.id_of("wars").unwrap()];
        assert_eq!(found, expected);
    }

    #[test]
    fn bucket_ignores_foreign_ids() {
        let small = WordIndex::from_words(["word"]);
        let large = WordIndex::from_words(["word", "ward", "cord"]);
        let graph = BucketNeighbors::new(&small);
        assert!(graph.neighbors(large.id_of("cord").unwrap()).is_empty());
    }
}
