//! Dice types, pools, and random sources.
//!
//! Every random decision in the game (ability rolls, initiative, attacks,
//! dodges, enemy choices, content draws) goes through a [`DiceSource`], so
//! a session can be replayed from a seed or scripted outright in tests.

pub mod pool;
pub mod roll;
pub mod source;

pub use pool::DicePool;
pub use roll::{DieResult, RollResult};
pub use source::{DiceSource, RiggedDice, SeededDice};

use serde::{Deserialize, Serialize};

/// The dice the game rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Six-sided die: ability scores and dodges.
    D6,
    /// Twenty-sided die: initiative and attacks.
    D20,
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D6 => 6,
            Self::D20 => 20,
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}
