//! Core types for Subterranean Script: combatants, abilities, and derived stats.
//!
//! This crate defines the data model shared by the player and every enemy.
//! It knows nothing about dice, content tables, or the terminal; those live
//! in the crates layered on top of it.

/// The six ability scores and the modifier formula.
pub mod ability;
/// The player character wrapper around an entity.
pub mod character;
/// Combatant records, creature kinds, weapons, and derived stats.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;

/// Re-export ability types.
pub use ability::{Ability, AbilityScores, StatChanges, modifier};
/// Re-export the player character.
pub use character::Character;
/// Re-export entity types.
pub use entity::{Entity, Kind, Weapon, armor_class, hit_points};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
