//! The player character.

use serde::{Deserialize, Serialize};

use crate::ability::{AbilityScores, StatChanges};
use crate::entity::{Entity, Kind, Weapon};

/// The player's combatant plus the progression it carries between rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// The underlying combatant.
    pub entity: Entity,
    /// Net ability deltas from every object picked up so far.
    pub stat_changes: StatChanges,
    /// Whether an object has been taken during the current room visit.
    pub picked_up: bool,
}

impl Character {
    /// A character with no name yet. Its scores are placeholders until naming.
    pub fn blank() -> Self {
        Self::new("", AbilityScores::default())
    }

    /// A named hero with freshly rolled scores, fighting bare-handed.
    pub fn new(name: impl Into<String>, abilities: AbilityScores) -> Self {
        Self {
            entity: Entity::new(Kind::Hero, name, abilities, Weapon::bare_hands()),
            stat_changes: StatChanges::new(),
            picked_up: false,
        }
    }

    /// The character's name (empty before naming).
    pub fn name(&self) -> &str {
        &self.entity.name
    }

    /// Returns true once the player has chosen a name.
    pub fn is_named(&self) -> bool {
        !self.entity.name.is_empty()
    }

    /// Take an object: apply its deltas to the scores, add them to the
    /// running total, and equip it as the current weapon.
    pub fn pick_up(&mut self, weapon: Weapon) {
        for (ability, delta) in weapon.stat_changes.iter() {
            self.entity.abilities.adjust(ability, delta);
        }
        self.stat_changes.merge(&weapon.stat_changes);
        self.entity.weapon = weapon;
        self.picked_up = true;
    }

    /// Clear the per-room pickup flag when moving on to another room.
    pub fn enter_room(&mut self) {
        self.picked_up = false;
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::blank()
    }
}
