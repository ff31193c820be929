//! Core domain types for the word ladder
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All comparisons happen on the canonical lowercase form of a word.

mod word;

pub use word::{Word, WordError, canonical, is_one_letter_apart, letter_difference};
