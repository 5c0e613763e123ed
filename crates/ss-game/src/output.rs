//! Semantic output emitted by the session.
//!
//! The session never formats text for the terminal. It hands these values to
//! a front end, which decides how to render them.

use ss_content::Door;
use ss_core::{AbilityScores, Character, Kind, StatChanges};
use ss_mechanics::{CombatEvent, Initiative};

use crate::state::GameState;

/// A point-in-time copy of the player character, for stat sheets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSnapshot {
    /// The character's name.
    pub name: String,
    /// The character's kind.
    pub kind: Kind,
    /// Current ability scores, deltas included.
    pub abilities: AbilityScores,
    /// Current hit points.
    pub hit_points: i32,
    /// Current armor class.
    pub armor_class: i32,
    /// Name of the wielded weapon.
    pub weapon: String,
    /// Every delta picked up so far.
    pub stat_changes: StatChanges,
}

impl From<&Character> for CharacterSnapshot {
    fn from(character: &Character) -> Self {
        let entity = &character.entity;
        Self {
            name: entity.name.clone(),
            kind: entity.kind,
            abilities: entity.abilities,
            hit_points: entity.hit_points,
            armor_class: entity.armor_class(),
            weapon: entity.weapon.name.clone(),
            stat_changes: character.stat_changes.clone(),
        }
    }
}

/// What the session is waiting for next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// `enter` to begin.
    Start,
    /// The character's name.
    Name,
    /// Take or leave the named object.
    Pickup {
        /// The object on offer.
        object: String,
    },
    /// Pick a door.
    Door {
        /// The doors available.
        doors: Vec<Door>,
    },
    /// Pick a combat action.
    CombatAction {
        /// The player's hit points.
        player_hp: i32,
        /// The enemy's hit points.
        enemy_hp: i32,
        /// The enemy's name.
        enemy: String,
    },
    /// `return` to leave the help screen.
    Help,
    /// `return` to leave the stat sheet.
    Stats,
}

/// One thing that happened, for the front end to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// The player typed `enter` and wakes in the dark.
    Intro,
    /// A name was accepted.
    NameAccepted {
        /// The accepted name.
        name: String,
    },
    /// The full stat sheet.
    StatSheet(CharacterSnapshot),
    /// An object lies in the room.
    ObjectOffered {
        /// Object name.
        name: String,
        /// Object description.
        description: String,
    },
    /// The object was taken.
    ObjectTaken {
        /// Object name.
        name: String,
        /// Deltas this object applied.
        gained: StatChanges,
        /// All deltas accumulated so far.
        totals: StatChanges,
    },
    /// The object was left where it lay.
    ObjectLeft {
        /// Object name.
        name: String,
    },
    /// A door opened onto a new room.
    RoomEntered {
        /// The door taken.
        door: Door,
        /// Room name.
        name: String,
        /// Room description.
        description: String,
    },
    /// Something steps out of the dark.
    EnemyAppears {
        /// Enemy name.
        name: String,
        /// Enemy kind.
        kind: Kind,
    },
    /// Initiative was rolled.
    Initiative(Initiative),
    /// One combat turn.
    Combat(CombatEvent),
    /// The enemy fell.
    Victory {
        /// Enemy name.
        enemy: String,
    },
    /// The player fell.
    Defeat {
        /// Enemy name.
        enemy: String,
    },
    /// The turn cap ran out with both standing.
    Stalemate {
        /// Enemy name.
        enemy: String,
    },
    /// The command list for a state.
    Help {
        /// The state the help describes.
        state: GameState,
        /// Commands accepted there.
        commands: &'static [&'static str],
    },
    /// An overlay closed.
    Returned {
        /// The state returned to.
        state: GameState,
    },
    /// The player typed `exit`.
    Farewell,
    /// Input wanted.
    Prompt(Prompt),
}
