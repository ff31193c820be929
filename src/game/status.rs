//! Move outcomes and status tags

use std::fmt;

/// Why a move was rejected
///
/// Variants are listed in guard order; the first failing guard wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveError {
    /// Candidate equals the previous word
    NoChange,
    /// No position differs (only reachable through odd length handling)
    NoLetterChanged,
    /// More than one position differs
    TooManyLetters,
    /// Candidate is not a dictionary word
    NotInDictionary,
    /// Candidate fails the strict equal-length, one-letter check
    NotAdjacent,
}

impl MoveError {
    /// Status tag broadcast to observers
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::NoChange => "NO CHANGE",
            Self::NoLetterChanged => "NO LETTER CHANGED",
            Self::TooManyLetters | Self::NotAdjacent => "NOT ONE LETTER DIFFERENT",
            Self::NotInDictionary => "NOT IN DICTIONARY",
        }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::NoChange => "No change!",
            Self::NoLetterChanged => "Must change at least one letter!",
            Self::TooManyLetters => "Must change only one letter at a time!",
            Self::NotInDictionary => "Not in dictionary!",
            Self::NotAdjacent => "Must change only one letter!",
        };
        f.write_str(message)
    }
}

impl std::error::Error for MoveError {}

/// An accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Valid,
    Won,
}

/// Current status tag of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Nothing to report (fresh game, after restart or undo)
    #[default]
    Idle,
    Valid,
    Won,
    Rejected(MoveError),
}

impl Status {
    /// Tag text; empty for `Idle`
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Valid => "VALID_MOVE",
            Self::Won => "GAME WON",
            Self::Rejected(error) => error.tag(),
        }
    }
}

impl From<MoveOutcome> for Status {
    fn from(outcome: MoveOutcome) -> Self {
        match outcome {
            MoveOutcome::Valid => Self::Valid,
            MoveOutcome::Won => Self::Won,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_tags() {
        assert_eq!(MoveError::NoChange.tag(), "NO CHANGE");
        assert_eq!(MoveError::NoLetterChanged.tag(), "NO LETTER CHANGED");
        assert_eq!(MoveError::TooManyLetters.tag(), "NOT ONE LETTER DIFFERENT");
        assert_eq!(MoveError::NotAdjacent.tag(), "NOT ONE LETTER DIFFERENT");
        assert_eq!(MoveError::NotInDictionary.tag(), "NOT IN DICTIONARY");
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(MoveError::NoChange.to_string(), "No change!");
        assert_eq!(
            MoveError::TooManyLetters.to_string(),
            "Must change only one letter at a time!"
        );
        assert_eq!(MoveError::NotInDictionary.to_string(), "Not in dictionary!");
    }

    #[test]
    fn status_tags() {
        assert_eq!(Status::default().tag(), "");
        assert_eq!(Status::from(MoveOutcome::Valid).tag(), "VALID_MOVE");
        assert_eq!(Status::from(MoveOutcome::Won).tag(), "GAME WON");
        assert_eq!(
            Status::Rejected(MoveError::NoChange).to_string(),
            "NO CHANGE"
        );
    }
}
