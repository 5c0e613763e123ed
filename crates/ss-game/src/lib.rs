//! The Subterranean Script game core.
//!
//! A [`Session`] is a state machine over [`GameState`]: it reads one line of
//! player input at a time, dispatches it to the handler for the current state,
//! and emits semantic [`Output`] values for a front end to render. Universal
//! commands (`help`, `stats`, `return`, `exit`) are checked before state
//! handling everywhere except combat, where only `exit` gets through.

/// Session configuration.
pub mod config;
/// Error types for the game session.
pub mod error;
/// Semantic output payloads.
pub mod output;
/// Command parsing and name validation.
pub mod parser;
/// The session state machine.
pub mod session;
/// The game states.
pub mod state;

pub use config::GameConfig;
pub use error::{GameError, GameResult, NameError};
pub use output::{CharacterSnapshot, Output, Prompt};
pub use parser::{Command, MAX_NAME_LEN, parse_command, validate_name};
pub use session::Session;
pub use state::GameState;
