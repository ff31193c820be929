//! Neighbors command
//!
//! Lists the dictionary words one letter away from a word.

use crate::core::Word;
use crate::dictionary::WordIndex;
use crate::graph::{NeighborGraph, NeighborStrategyKind};

/// Result of a neighbor lookup
pub struct NeighborsResult {
    pub word: String,
    pub neighbors: Vec<Word>,
}

/// Look up the neighbors of `word`, sorted alphabetically
///
/// # Errors
///
/// Returns an error if the word is not in the dictionary.
pub fn list_neighbors(
    index: &WordIndex,
    strategy: NeighborStrategyKind,
    word: &str,
) -> Result<NeighborsResult, String> {
    let id = index
        .id_of(word)
        .ok_or_else(|| format!("Word '{word}' not in dictionary"))?;

    let graph = strategy.over(index);
    let mut neighbors: Vec<Word> = graph
        .neighbors(id)
        .into_iter()
        .filter_map(|n| index.get(n).cloned())
        .collect();
    neighbors.sort();

    Ok(NeighborsResult {
        word: word.to_lowercase(),
        neighbors,
    })
}
