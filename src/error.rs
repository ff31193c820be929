//! Recoverable engine diagnostics
//!
//! Neither kind is fatal: the engine falls back (empty dictionary, fixed word
//! pair) and hands the diagnostic to the caller for display.

use std::fmt;

/// A non-fatal problem the engine recovered from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The dictionary source could not be read; an empty dictionary was used
    DictionaryLoadFailure { source: String, reason: String },
    /// Random selection needs two distinct words; the fallback pair was used
    InsufficientDictionary { distinct_words: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DictionaryLoadFailure { source, reason } => {
                write!(f, "Error reading dictionary file {source}: {reason}")
            }
            Self::InsufficientDictionary { distinct_words } => write!(
                f,
                "Not enough words in the dictionary to pick random words ({distinct_words} available)"
            ),
        }
    }
}

impl std::error::Error for Diagnostic {}
