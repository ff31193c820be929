//! Game configuration

use crate::core::Word;
use crate::error::Diagnostic;
use crate::graph::NeighborStrategyKind;

/// Start word used when random selection is off or impossible
pub const FALLBACK_START: &str = "wast";
/// Target word used when random selection is off or impossible
pub const FALLBACK_TARGET: &str = "west";

/// Settings for a game instance
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Pick start and target at random from the dictionary
    pub randomize: bool,
    /// Neighbor generation used for hints
    pub neighbor_strategy: NeighborStrategyKind,
    /// Fixed pair used when `randomize` is off or the dictionary is too small
    pub fallback_pair: (Word, Word),
}

impl GameConfig {
    #[must_use]
    pub fn new(randomize: bool) -> Self {
        Self {
            randomize,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_neighbor_strategy(mut self, strategy: NeighborStrategyKind) -> Self {
        self.neighbor_strategy = strategy;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            randomize: true,
            neighbor_strategy: NeighborStrategyKind::default(),
            fallback_pair: (
                Word::from_trusted(FALLBACK_START),
                Word::from_trusted(FALLBACK_TARGET),
            ),
        }
    }
}

/// How start and target were chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSelection {
    /// Drawn at random from the dictionary
    Random,
    /// Random selection disabled; fallback pair used
    Fixed,
    /// Random selection requested but impossible; fallback pair used
    Fallback(Diagnostic),
}

impl WordSelection {
    /// The diagnostic, if selection had to fall back
    #[must_use]
    pub const fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Self::Fallback(diagnostic) => Some(diagnostic),
            Self::Random | Self::Fixed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert!(config.randomize);
        assert_eq!(config.neighbor_strategy, NeighborStrategyKind::Bucket);
        assert_eq!(config.fallback_pair.0.text(), "wast");
        assert_eq!(config.fallback_pair.1.text(), "west");
    }

    #[test]
    fn builder_overrides() {
        let config = GameConfig::new(false).with_neighbor_strategy(NeighborStrategyKind::Scan);
        assert!(!config.randomize);
        assert_eq!(config.neighbor_strategy, NeighborStrategyKind::Scan);
    }

    #[test]
    fn selection_diagnostic() {
        assert!(WordSelection::Random.diagnostic().is_none());
        let fallback = WordSelection::Fallback(Diagnostic::InsufficientDictionary {
            distinct_words: 0,
        });
        assert!(fallback.diagnostic().is_some());
    }
}
