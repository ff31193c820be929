//! Word-ladder game state machine
//!
//! `GameState` is the only way to change a game: moves, undo, restart and
//! word (re)selection. Each mutation sets the status before notifying.

use super::config::{GameConfig, WordSelection};
use super::event::GameEvent;
use super::status::{MoveError, MoveOutcome, Status};
use crate::core::{Word, canonical, is_one_letter_apart, letter_difference};
use crate::dictionary::WordIndex;
use crate::error::Diagnostic;
use crate::solver::{Path, PathFinder};
use rand::Rng;
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::{debug, warn};

/// One word-ladder game over a shared dictionary
///
/// Invariant: `start` followed by `history` is a chain of adjacent words.
#[derive(Debug)]
pub struct GameState<'a> {
    index: &'a WordIndex,
    config: GameConfig,
    start: Word,
    target: Word,
    history: Vec<Word>,
    status: Status,
    last_error: Option<MoveError>,
    selection: WordSelection,
    events: Option<Sender<GameEvent>>,
}

impl<'a> GameState<'a> {
    /// Start a new game, selecting words according to `config`
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_weaver::dictionary::WordIndex;
    /// use word_weaver::game::{GameConfig, GameState};
    ///
    /// let index = WordIndex::embedded();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let game = GameState::new(&index, GameConfig::default(), &mut rng);
    ///
    /// assert_ne!(game.start_word(), game.target_word());
    /// assert!(game.move_history().is_empty());
    /// ```
    pub fn new<R: Rng + ?Sized>(index: &'a WordIndex, config: GameConfig, rng: &mut R) -> Self {
        let (start, target) = config.fallback_pair.clone();
        let mut game = Self {
            index,
            config,
            start,
            target,
            history: Vec::new(),
            status: Status::Idle,
            last_error: None,
            selection: WordSelection::Fixed,
            events: None,
        };
        let randomize = game.config.randomize;
        game.set_random_words(randomize, rng);
        game
    }

    /// Start a game with explicit start and target words
    #[must_use]
    pub fn with_words(index: &'a WordIndex, start: Word, target: Word) -> Self {
        Self {
            index,
            config: GameConfig::new(false),
            start,
            target,
            history: Vec::new(),
            status: Status::Idle,
            last_error: None,
            selection: WordSelection::Fixed,
            events: None,
        }
    }

    /// Forward every future event to `sender`
    ///
    /// Replaces any previously attached channel.
    pub fn attach_channel(&mut self, sender: Sender<GameEvent>) {
        self.events = Some(sender);
    }

    /// Create a channel, attach its sender and return the receiver
    pub fn subscribe(&mut self) -> Receiver<GameEvent> {
        let (sender, receiver) = mpsc::channel();
        self.attach_channel(sender);
        receiver
    }

    fn notify(&self, event: GameEvent) -> GameEvent {
        if let Some(sender) = &self.events {
            // A dropped receiver must not affect the game
            if sender.send(event.clone()).is_err() {
                debug!("event receiver dropped");
            }
        }
        event
    }


    #[must_use]
    pub const fn dictionary(&self) -> &'a WordIndex {
        self.index
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn start_word(&self) -> &Word {
        &self.start
    }

    #[must_use]
    pub const fn target_word(&self) -> &Word {
        &self.target
    }

    /// Accepted words in play order
    #[must_use]
    pub fn move_history(&self) -> &[Word] {
        &self.history
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Last accepted word, or the start word before any move
    #[must_use]
    pub fn current_word(&self) -> &Word {
        self.history.last().unwrap_or(&self.start)
    }

    /// Last accepted word, if any
    #[must_use]
    pub fn previous_word(&self) -> Option<&Word> {
        self.history.last()
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Status tag text ("" when idle)
    #[must_use]
    pub const fn status_message(&self) -> &'static str {
        self.status.tag()
    }

    /// The rejection from the most recent move, cleared on success or restart
    #[must_use]
    pub const fn last_error(&self) -> Option<MoveError> {
        self.last_error
    }

    /// Human readable error text, empty when there is none
    #[must_use]
    pub fn error_message(&self) -> String {
        self.last_error.map(|e| e.to_string()).unwrap_or_default()
    }

    /// How the current start and target were chosen
    #[must_use]
    pub const fn selection(&self) -> &WordSelection {
        &self.selection
    }

    /// True iff the last accepted word is the target
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.history.last().is_some_and(|last| *last == self.target)
    }


    /// Try to move to `candidate`
    ///
    /// On rejection the history is left untouched and the reason is also
    /// available through `last_error`.
    ///
    /// # Errors
    ///
    /// Returns the first failing guard as a `MoveError`.
    pub fn make_move(&mut self, candidate: &str) -> Result<MoveOutcome, MoveError> {
        match self.check_move(candidate) {
            Ok(word) => {
                let won = word == self.target;
                let outcome = if won { MoveOutcome::Won } else { MoveOutcome::Valid };
                debug!(word = %word, won, "move accepted");

                self.history.push(word.clone());
                self.last_error = None;
                self.status = outcome.into();
                self.notify(GameEvent::MoveAccepted { word, won });
                Ok(outcome)
            }
            Err(error) => {
                debug!(candidate, %error, "move rejected");

                self.last_error = Some(error);
                self.status = Status::Rejected(error);
                self.notify(GameEvent::MoveRejected(error));
                Err(error)
            }
        }
    }

    /// Run the move guards in order without touching state
    fn check_move(&self, candidate: &str) -> Result<Word, MoveError> {
        let candidate = canonical(candidate.trim());
        let previous = self.current_word().text();

        if candidate == previous {
            return Err(MoveError::NoChange);
        }

        let diff = letter_difference(&candidate, previous);
        if diff == 0 {
            return Err(MoveError::NoLetterChanged);
        }
        if diff > 1 {
            return Err(MoveError::TooManyLetters);
        }

        let word = self
            .index
            .id_of(&candidate)
            .and_then(|id| self.index.get(id))
            .ok_or(MoveError::NotInDictionary)?;

        if !is_one_letter_apart(word.text(), previous) {
            return Err(MoveError::NotAdjacent);
        }

        Ok(word.clone())
    }

    /// Remove the most recent move
    ///
    /// Returns `None` (and notifies nobody) when there is nothing to undo.
    pub fn undo_move(&mut self) -> Option<GameEvent> {
        let removed = self.history.pop()?;
        self.status = Status::Idle;
        Some(self.notify(GameEvent::Undone { removed }))
    }

    /// Clear moves and messages, keeping start and target
    pub fn restart_game(&mut self) -> GameEvent {
        self.history.clear();
        self.status = Status::Idle;
        self.last_error = None;
        self.notify(GameEvent::Restarted)
    }


    /// Replace the start word; callers should restart afterwards
    pub fn set_start_word(&mut self, word: Word) -> GameEvent {
        self.start = word;
        self.notify(self.words_changed())
    }

    /// Replace the target word; callers should restart afterwards
    pub fn set_target_word(&mut self, word: Word) -> GameEvent {
        self.target = word;
        self.notify(self.words_changed())
    }

    fn words_changed(&self) -> GameEvent {
        GameEvent::WordsChanged {
            start: self.start.clone(),
            target: self.target.clone(),
        }
    }

    /// Choose new start and target words
    ///
    /// With `randomize` the start is drawn uniformly and the target is
    /// redrawn until it differs. Without it, or when the dictionary holds
    /// fewer than two words, the configured fallback pair is used.
    pub fn set_random_words<R: Rng + ?Sized>(
        &mut self,
        randomize: bool,
        rng: &mut R,
    ) -> WordSelection {
        self.config.randomize = randomize;
        let index = self.index;
        let words = index.words();

        let selection = if !randomize {
            (self.start, self.target) = self.config.fallback_pair.clone();
            WordSelection::Fixed
        } else if words.len() < 2 {
            let diagnostic = Diagnostic::InsufficientDictionary {
                distinct_words: words.len(),
            };
            warn!(%diagnostic, "using fallback word pair");
            (self.start, self.target) = self.config.fallback_pair.clone();
            WordSelection::Fallback(diagnostic)
        } else {
            let start = &words[rng.random_range(0..words.len())];
            let mut target = &words[rng.random_range(0..words.len())];
            while target == start {
                target = &words[rng.random_range(0..words.len())];
            }
            debug!(start = %start, target = %target, "generated random words");
            self.start = start.clone();
            self.target = target.clone();
            WordSelection::Random
        };

        self.selection = selection.clone();
        self.notify(GameEvent::NewGame {
            start: self.start.clone(),
            target: self.target.clone(),
        });
        selection
    }

    /// Reselect words with the configured mode and restart
    pub fn new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) -> WordSelection {
        let selection = self.set_random_words(self.config.randomize, rng);
        self.restart_game();
        selection
    }


    /// Shortest path from the start word to the target
    ///
    /// Recomputed on every call.
    #[must_use]
    pub fn hint(&self) -> Option<Path> {
        self.path_between(&self.start, &self.target)
    }

    /// Shortest path from the current word to the target
    #[must_use]
    pub fn hint_from_current(&self) -> Option<Path> {
        self.path_between(self.current_word(), &self.target)
    }

    fn path_between(&self, from: &Word, to: &Word) -> Option<Path> {
        let graph = self.config.neighbor_strategy.over(self.index);
        PathFinder::new(graph).find_path(from.text(), to.text())
    }
}
