//! Neighbor generation over the implicit word-ladder graph
//!
//! Nodes are dictionary words; edges join equal-length words that differ in
//! exactly one position. The graph is never materialized. Implementations
//! derive a node's neighbors on demand.

mod bucket;
mod scan;

pub use bucket::BucketNeighbors;
pub use scan::ScanNeighbors;

use crate::dictionary::{WordId, WordIndex};

/// Source of adjacent words for a dictionary word
pub trait NeighborGraph {
    /// The dictionary the graph is built over
    fn index(&self) -> &WordIndex;

    /// All dictionary words one letter away from `id`
    ///
    /// The result never contains `id` itself. Ordering is unspecified.
    fn neighbors(&self, id: WordId) -> Vec<WordId>;
}

/// Named neighbor-generation strategies, selectable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborStrategyKind {
    /// Full dictionary scan per expansion
    Scan,
    /// Wildcard bucket lookup (default)
    #[default]
    Bucket,
}

impl NeighborStrategyKind {
    /// Parse a strategy name
    ///
    /// Supported names: "scan", "naive", "bucket". Defaults to bucket if the
    /// name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "scan" | "naive" => Self::Scan,
            _ => Self::Bucket,
        }
    }

    /// Bind the strategy to a dictionary
    #[must_use]
    pub fn over(self, index: &WordIndex) -> NeighborStrategy<'_> {
        match self {
            Self::Scan => NeighborStrategy::Scan(ScanNeighbors::new(index)),
            Self::Bucket => NeighborStrategy::Bucket(BucketNeighbors::new(index)),
        }
    }
}

/// Enum wrapper over all neighbor strategies
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum NeighborStrategy<'a> {
    Scan(ScanNeighbors<'a>),
    Bucket(BucketNeighbors<'a>),
}

impl NeighborGraph for NeighborStrategy<'_> {
    fn index(&self) -> &WordIndex {
        match self {
            Self::Scan(g) => g.index(),
            Self::Bucket(g) => g.index(),
        }
    }

    fn neighbors(&self, id: WordId) -> Vec<WordId> {
        match self {
            Self::Scan(g) => g.neighbors(id),
            Self::Bucket(g) => g.neighbors(id),
        }
    }
}
