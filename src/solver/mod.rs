//! Ladder solving algorithms
//!
//! This module contains the shortest-path search used for hints.

pub mod path;

pub use path::{Path, PathFinder, PathNotFound};
