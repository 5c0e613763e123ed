//! Error types for the game session.

use ss_mechanics::MechError;
use thiserror::Error;

use crate::state::GameState;

/// Result type for session operations.
pub type GameResult<T> = Result<T, GameError>;

/// Why a character name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    /// Empty, not purely alphabetic, or the reserved word `exit`.
    #[error("These appear to be letters, not numbers or symbols, on your arm.")]
    NotLetters,

    /// Longer than the arm is wide.
    #[error("The etching on your arm can't be that long.")]
    TooLong,
}

/// Recoverable errors: the front end reports them and prompts again.
#[derive(Debug, Error)]
pub enum GameError {
    /// The input means nothing in the current state.
    #[error("Are you lost? {}", .state.hint())]
    InvalidCommand {
        /// The state the input was offered to.
        state: GameState,
        /// The input as typed, trimmed.
        input: String,
    },

    /// A name that cannot be etched on an arm.
    #[error(transparent)]
    InvalidName(#[from] NameError),

    /// The combat engine refused an action.
    #[error(transparent)]
    Mechanics(#[from] MechError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_command_carries_the_hint() {
        let err = GameError::InvalidCommand {
            state: GameState::GameStart,
            input: "jump".to_string(),
        };
        assert_eq!(err.to_string(), "Are you lost? Type 'enter' or 'Enter'.");
    }

    #[test]
    fn name_errors_pass_through() {
        let err = GameError::from(NameError::TooLong);
        assert_eq!(err.to_string(), "The etching on your arm can't be that long.");
    }
}
