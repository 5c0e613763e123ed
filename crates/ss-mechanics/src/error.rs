//! Error types for the mechanics engine.

use crate::combat::Side;

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// An action was attempted after the encounter was already decided.
    #[error("the encounter is already over")]
    EncounterResolved,

    /// A combatant tried to act out of turn.
    #[error("it is not the {0}'s turn")]
    NotYourTurn(Side),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
