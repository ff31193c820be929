//! Command implementations

pub mod benchmark;
pub mod neighbors;
pub mod path;
pub mod play;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_pairs};
pub use neighbors::{NeighborsResult, list_neighbors};
pub use path::{PathResult, find_path};
pub use play::{PlayCommand, PlaySummary, run_play};
