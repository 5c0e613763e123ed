//! Static templates the dungeon is assembled from.

use serde::{Deserialize, Serialize};
use ss_core::{AbilityScores, Entity, Kind, StatChanges, Weapon};

/// A door out of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Door {
    /// The left-hand door.
    Left,
    /// The right-hand door.
    Right,
}

impl Door {
    /// Both doors, left first.
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    /// Parse a door from its command word.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// The command word for this door.
    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl std::fmt::Display for Door {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn default_doors() -> Vec<Door> {
    Door::ALL.to_vec()
}

/// A room the player can stand in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTemplate {
    /// Stable lookup id (the lowercase room name).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Flavor description.
    pub description: String,
    /// Doors leading onward.
    #[serde(default = "default_doors")]
    pub doors: Vec<Door>,
    /// Ids of objects that may be lying here.
    #[serde(default)]
    pub objects: Vec<String>,
}

/// A creature that can be spawned into an encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    /// Stable lookup id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Creature kind.
    pub kind: Kind,
    /// Fixed ability scores.
    pub abilities: AbilityScores,
    /// What it fights with.
    pub weapon: Weapon,
}

impl EnemyTemplate {
    /// Create a fresh combatant from this template.
    pub fn spawn(&self) -> Entity {
        Entity::new(self.kind, &self.name, self.abilities, self.weapon.clone())
    }
}

/// An object the player may pick up and wield.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectTemplate {
    /// Stable lookup id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Flavor description.
    pub description: String,
    /// Ability deltas applied on pickup.
    #[serde(default)]
    pub stat_changes: StatChanges,
}

impl ObjectTemplate {
    /// The weapon this object becomes once picked up.
    pub fn to_weapon(&self) -> Weapon {
        Weapon {
            name: self.name.clone(),
            description: self.description.clone(),
            stat_changes: self.stat_changes.clone(),
        }
    }
}
