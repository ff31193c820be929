//! Word Weaver
//!
//! A word-ladder game engine: turn a start word into a target word one letter
//! at a time, with every step a dictionary word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_weaver::core::Word;
//! use word_weaver::dictionary::WordIndex;
//! use word_weaver::game::{GameState, MoveOutcome};
//!
//! let index = WordIndex::from_words(["word", "ward", "wars", "cars"]);
//! let mut game = GameState::with_words(
//!     &index,
//!     Word::new("word").unwrap(),
//!     Word::new("cars").unwrap(),
//! );
//!
//! assert_eq!(game.make_move("ward"), Ok(MoveOutcome::Valid));
//! println!("Hint: {}", game.hint_from_current().unwrap());
//! ```

// Core domain types
pub mod core;

// Recoverable diagnostics
pub mod error;

// Dictionary storage
pub mod dictionary;

// Neighbor generation
pub mod graph;

// Shortest-path search
pub mod solver;

// Game state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
