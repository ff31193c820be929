//! Naive neighbor generation
//!
//! Scans the whole dictionary for every expansion: O(n·L) per node. Fine for
//! dictionaries of a few thousand words.

use super::NeighborGraph;
use crate::core::is_one_letter_apart;
use crate::dictionary::{WordId, WordIndex};

/// Full-scan neighbor strategy
pub struct ScanNeighbors<'a> {
    index: &'a WordIndex,
}

impl<'a> ScanNeighbors<'a> {
    #[must_use]
    pub const fn new(index: &'a WordIndex) -> Self {
        Self { index }
    }
}

impl NeighborGraph for ScanNeighbors<'_> {
    fn index(&self) -> &WordIndex {
        self.index
    }

    fn neighbors(&self, id: WordId) -> Vec<WordId> {
        let Some(word) = self.index.get(id) else {
            return Vec::new();
        };

        self.index
            .iter()
            .filter(|(_, other)| is_one_letter_apart(word.text(), other.text()))
            .map(|(other_id, _)| other_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_finds_one_letter_neighbors() {
        let index = WordIndex::from_words(["word", "ward", "wars", "cars", "cord"]);
        let graph = ScanNeighbors::new(&index);

        let word = index.id_of("word").unwrap();
        let mut found = graph.neighbors(word);
        found.sort();

        let expected = vec![index.id_of("ward").unwrap(), index.id_of("cord").unwrap()];
        assert_eq!(found, expected);
    }

    #[test]
    fn scan_excludes_self() {
        let index = WordIndex::from_words(["word"]);
        let graph = ScanNeighbors::new(&index);
        assert!(graph.neighbors(index.id_of("word").unwrap()).is_empty());
    }
}
