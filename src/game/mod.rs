//! Game state and move validation
//!
//! The state machine has a single "in play" state. Moves either extend the
//! history or are rejected with a `MoveError`; undo, restart and word
//! selection are the control transitions.

mod config;
mod event;
mod state;
mod status;

pub use config::{FALLBACK_START, FALLBACK_TARGET, GameConfig, WordSelection};
pub use event::GameEvent;
pub use state::GameState;
pub use status::{MoveError, MoveOutcome, Status};
