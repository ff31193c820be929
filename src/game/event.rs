//! Change notifications
//!
//! Every mutating `GameState` call returns one of these and, if a channel is
//! attached, sends a copy down it. The engine never learns who listens.

use super::status::MoveError;
use crate::core::Word;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Start and target were (re)selected
    NewGame { start: Word, target: Word },
    /// Start or target was replaced explicitly
    WordsChanged { start: Word, target: Word },
    MoveAccepted { word: Word, won: bool },
    MoveRejected(MoveError),
    Undone { removed: Word },
    Restarted,
}

impl GameEvent {
    /// Status tag carried by the notification
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::NewGame { .. } | Self::Restarted => "NEW_GAME",
            Self::MoveAccepted { won: true, .. } => "GAME WON",
            Self::MoveAccepted { won: false, .. } => "VALID_MOVE",
            Self::MoveRejected(error) => error.tag(),
            Self::WordsChanged { .. } | Self::Undone { .. } => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_tags() {
        let word = Word::new("ward").unwrap();
        assert_eq!(GameEvent::Restarted.tag(), "NEW_GAME");
        assert_eq!(
            GameEvent::MoveAccepted {
                word: word.clone(),
                won: true
            }
            .tag(),
            "GAME WON"
        );
        assert_eq!(
            GameEvent::MoveAccepted { word, won: false }.tag(),
            "VALID_MOVE"
        );
        assert_eq!(
            GameEvent::MoveRejected(MoveError::NotInDictionary).tag(),
            "NOT IN DICTIONARY"
        );
    }
}
