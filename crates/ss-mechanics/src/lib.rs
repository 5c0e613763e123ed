//! Game mechanics for Subterranean Script.
//!
//! Provides dice and seedable dice sources, the 4d6-drop-lowest ability
//! roller, and the one-on-one turn-based combat resolver.

pub mod combat;
pub mod dice;
pub mod error;
pub mod roller;

pub use combat::{
    AttackResult, CombatAction, CombatEvent, Encounter, Initiative, Outcome, Side, resolve_attack,
    roll_initiative,
};
pub use dice::{DicePool, DiceSource, Die, DieResult, RiggedDice, RollResult, SeededDice};
pub use error::{MechError, MechResult};
pub use roller::{roll_ability_score, roll_ability_scores};
