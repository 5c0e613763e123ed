use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ability::{Ability, AbilityScores, StatChanges, modifier};
use crate::error::{CoreError, CoreResult};

/// Base hit points before the constitution modifier and kind bonus.
const BASE_HIT_POINTS: i32 = 10;

/// The creature category of a combatant. Drives fixed HP and AC bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// The player character.
    Hero,
    /// Animals and vermin.
    Beast,
    /// Goblins, guards, alchemists.
    Humanoid,
    /// Incorporeal echoes of the dead.
    Spirit,
    /// Reanimated corpses.
    Undead,
    /// Malevolent shades.
    Wraith,
    /// Things that live in the dark water.
    Aquatic,
}

impl Kind {
    /// All creature kinds.
    pub const ALL: [Kind; 7] = [
        Self::Hero,
        Self::Beast,
        Self::Humanoid,
        Self::Spirit,
        Self::Undead,
        Self::Wraith,
        Self::Aquatic,
    ];

    /// Fixed armor class bonus for this kind.
    pub fn ac_bonus(self) -> i32 {
        match self {
            Self::Hero => 2,
            Self::Beast => 1,
            Self::Humanoid => 0,
            Self::Spirit => -1,
            Self::Undead => 3,
            Self::Wraith => 4,
            Self::Aquatic => 1,
        }
    }

    /// Fixed hit point bonus for this kind.
    pub fn hp_bonus(self) -> i32 {
        match self {
            Self::Hero => 5,
            Self::Beast => 0,
            Self::Humanoid => 1,
            Self::Spirit => 0,
            Self::Undead => 3,
            Self::Wraith => 2,
            Self::Aquatic => 2,
        }
    }

    /// The lowercase name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Beast => "beast",
            Self::Humanoid => "humanoid",
            Self::Spirit => "spirit",
            Self::Undead => "undead",
            Self::Wraith => "wraith",
            Self::Aquatic => "aquatic",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownKind(s.to_string()))
    }
}

/// An equipped weapon. Pickable objects double as weapons once taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    /// Display name.
    pub name: String,
    /// Flavor description.
    pub description: String,
    /// Ability deltas granted when the weapon was picked up.
    #[serde(default)]
    pub stat_changes: StatChanges,
}

impl Weapon {
    /// Create a weapon with no ability deltas.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            stat_changes: StatChanges::new(),
        }
    }

    /// What a hero fights with before picking anything up.
    pub fn bare_hands() -> Self {
        Self::new("bare hands", "Your own two fists.")
    }
}

/// Starting hit points for a creature: `10 + modifier(constitution) + kind bonus`.
pub fn hit_points(kind: Kind, constitution: i32) -> i32 {
    BASE_HIT_POINTS + modifier(constitution) + kind.hp_bonus()
}

/// Armor class: dexterity modifier, kind bonus, and any equipped bonuses.
pub fn armor_class(entity: &Entity) -> i32 {
    entity.abilities.modifier(Ability::Dexterity)
        + entity.kind.ac_bonus()
        + entity.armor_bonus.unwrap_or(0)
        + entity.shield_bonus.unwrap_or(0)
        + entity.other_bonus.unwrap_or(0)
}

/// A combatant: the player or an enemy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Creature category.
    pub kind: Kind,
    /// Display name.
    pub name: String,
    /// The six ability scores.
    pub abilities: AbilityScores,
    /// The equipped weapon.
    pub weapon: Weapon,
    /// Current hit points. May go negative during combat.
    pub hit_points: i32,
    /// Bonus from worn armor.
    #[serde(default)]
    pub armor_bonus: Option<i32>,
    /// Bonus from a carried shield.
    #[serde(default)]
    pub shield_bonus: Option<i32>,
    /// Any other armor class bonus.
    #[serde(default)]
    pub other_bonus: Option<i32>,
}

impl Entity {
    /// Create a combatant. Hit points are computed once here and cached.
    pub fn new(
        kind: Kind,
        name: impl Into<String>,
        abilities: AbilityScores,
        weapon: Weapon,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            hit_points: hit_points(kind, abilities.constitution),
            abilities,
            weapon,
            armor_bonus: None,
            shield_bonus: None,
            other_bonus: None,
        }
    }

    /// The modifier for one of this entity's abilities.
    pub fn modifier(&self, ability: Ability) -> i32 {
        self.abilities.modifier(ability)
    }

    /// This entity's armor class.
    pub fn armor_class(&self) -> i32 {
        armor_class(self)
    }

    /// Returns true while hit points are positive.
    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }

    /// Subtract damage from hit points without clamping. Returns the new total.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.hit_points -= amount;
        self.hit_points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goblin() -> Entity {
        let scores = AbilityScores {
            strength: 4,
            dexterity: 4,
            constitution: 4,
            intelligence: 2,
            wisdom: 2,
            charisma: 2,
        };
        Entity::new(
            Kind::Humanoid,
            "Dungeon Goblin",
            scores,
            Weapon::new("crude club", "A simple and roughly-made wooden club."),
        )
    }

    #[test]
    fn hit_points_formula() {
        assert_eq!(hit_points(Kind::Hero, 14), 10 + 4 + 5);
        assert_eq!(hit_points(Kind::Beast, 2), 10 - 2);
        assert_eq!(goblin().hit_points, 10 - 1 + 1);
    }

    #[test]
    fn armor_class_sums_bonuses() {
        let mut g = goblin();
        assert_eq!(g.armor_class(), -1);
        g.armor_bonus = Some(3);
        g.shield_bonus = Some(1);
        assert_eq!(g.armor_class(), 3);
        g.other_bonus = Some(-2);
        assert_eq!(armor_class(&g), 1);
    }

    #[test]
    fn kind_bonuses() {
        assert_eq!(Kind::Wraith.ac_bonus(), 4);
        assert_eq!(Kind::Spirit.ac_bonus(), -1);
        assert_eq!(Kind::Hero.hp_bonus(), 5);
    }

    #[test]
    fn damage_goes_negative() {
        let mut g = goblin();
        assert!(g.is_alive());
        assert_eq!(g.take_damage(15), -5);
        assert!(!g.is_alive());
    }

    #[test]
    fn kind_parse_and_serde() {
        assert_eq!("Undead".parse::<Kind>().unwrap(), Kind::Undead);
        assert!("dragon".parse::<Kind>().is_err());
        let k: Kind = serde_json::from_str("\"aquatic\"").unwrap();
        assert_eq!(k, Kind::Aquatic);
    }
}
