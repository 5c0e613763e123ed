use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// The offset subtracted from a score before halving it into a modifier.
///
/// This is deliberately not the usual d20 offset of 10.
const MODIFIER_OFFSET: i32 = 5;

/// Derive the modifier for an ability score: `floor((score - 5) / 2)`.
pub fn modifier(score: i32) -> i32 {
    (score - MODIFIER_OFFSET).div_euclid(2)
}

/// One of the six ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ability {
    /// Raw physical power; drives heavy attacks.
    Strength,
    /// Agility and reflexes; drives armor class, initiative, quick attacks and dodging.
    Dexterity,
    /// Toughness; drives starting hit points.
    Constitution,
    /// Reasoning and memory.
    Intelligence,
    /// Perception and insight.
    Wisdom,
    /// Force of personality.
    Charisma,
}

impl Ability {
    /// All six abilities in stat-sheet order.
    pub const ALL: [Ability; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// The display name of this ability.
    pub fn name(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ability {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownAbility(s.to_string()))
    }
}

/// A full set of six ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    /// Strength score.
    pub strength: i32,
    /// Dexterity score.
    pub dexterity: i32,
    /// Constitution score.
    pub constitution: i32,
    /// Intelligence score.
    pub intelligence: i32,
    /// Wisdom score.
    pub wisdom: i32,
    /// Charisma score.
    pub charisma: i32,
}

impl AbilityScores {
    /// Build a score set by asking `f` for each ability in stat-sheet order.
    pub fn from_fn(mut f: impl FnMut(Ability) -> i32) -> Self {
        Self {
            strength: f(Ability::Strength),
            dexterity: f(Ability::Dexterity),
            constitution: f(Ability::Constitution),
            intelligence: f(Ability::Intelligence),
            wisdom: f(Ability::Wisdom),
            charisma: f(Ability::Charisma),
        }
    }

    /// Get the score for an ability.
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    fn slot_mut(&mut self, ability: Ability) -> &mut i32 {
        match ability {
            Ability::Strength => &mut self.strength,
            Ability::Dexterity => &mut self.dexterity,
            Ability::Constitution => &mut self.constitution,
            Ability::Intelligence => &mut self.intelligence,
            Ability::Wisdom => &mut self.wisdom,
            Ability::Charisma => &mut self.charisma,
        }
    }

    /// Overwrite the score for an ability.
    pub fn set(&mut self, ability: Ability, score: i32) {
        *self.slot_mut(ability) = score;
    }

    /// Add a (possibly negative) delta to an ability. Returns the new score.
    pub fn adjust(&mut self, ability: Ability, delta: i32) -> i32 {
        let slot = self.slot_mut(ability);
        *slot += delta;
        *slot
    }

    /// The modifier for an ability.
    pub fn modifier(&self, ability: Ability) -> i32 {
        modifier(self.get(ability))
    }

    /// Iterate over `(ability, score)` pairs in stat-sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, i32)> + '_ {
        Ability::ALL.into_iter().map(|a| (a, self.get(a)))
    }
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self::from_fn(|_| 10)
    }
}

/// Net ability-score deltas, keyed by ability.
///
/// Used both for the deltas an object grants on pickup and for the running
/// total a character has accumulated from every pickup so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatChanges(BTreeMap<Ability, i32>);

impl StatChanges {
    /// An empty set of changes.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder: record a delta for an ability, adding to any existing one.
    pub fn with(mut self, ability: Ability, delta: i32) -> Self {
        self.add(ability, delta);
        self
    }

    /// Add a delta for an ability. Zero deltas are still recorded.
    pub fn add(&mut self, ability: Ability, delta: i32) {
        *self.0.entry(ability).or_insert(0) += delta;
    }

    /// Merge another set of changes into this one, summing shared keys.
    pub fn merge(&mut self, other: &StatChanges) {
        for (ability, delta) in other.iter() {
            self.add(ability, delta);
        }
    }

    /// The net delta for an ability (0 when never touched).
    pub fn get(&self, ability: Ability) -> i32 {
        self.0.get(&ability).copied().unwrap_or(0)
    }

    /// Whether an ability has an entry at all.
    pub fn contains(&self, ability: Ability) -> bool {
        self.0.contains_key(&ability)
    }

    /// Iterate over recorded `(ability, delta)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, i32)> + '_ {
        self.0.iter().map(|(a, d)| (*a, *d))
    }

    /// Number of abilities with an entry.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for StatChanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(a, d)| format!("{a} {d:+}")).collect();
        write!(f, "{}", parts.join(", "))
    }
}
