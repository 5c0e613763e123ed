//! Combat actions and attack resolution.

use serde::{Deserialize, Serialize};
use ss_core::{Ability, Entity};

use crate::dice::{DiceSource, Die};

/// An action a combatant can take on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatAction {
    /// A fast, dexterity-driven strike.
    Quick,
    /// A slow, strength-driven blow.
    Heavy,
    /// Brace to evade the next incoming attack.
    Dodge,
}

impl CombatAction {
    /// Every action, in the order enemies draw from.
    pub const ALL: [CombatAction; 3] = [Self::Quick, Self::Heavy, Self::Dodge];

    /// The ability whose modifier applies to the attack roll and damage.
    pub fn ability(self) -> Option<Ability> {
        match self {
            Self::Quick => Some(Ability::Dexterity),
            Self::Heavy => Some(Ability::Strength),
            Self::Dodge => None,
        }
    }

    /// Damage dealt on a hit before the modifier is added.
    pub fn base_damage(self) -> i32 {
        match self {
            Self::Quick => 5,
            Self::Heavy => 10,
            Self::Dodge => 0,
        }
    }

    /// Returns true for the two attack actions.
    pub fn is_attack(self) -> bool {
        self.ability().is_some()
    }

    /// The command word for this action.
    pub fn name(self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Heavy => "heavy",
            Self::Dodge => "dodge",
        }
    }
}

impl std::fmt::Display for CombatAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The mechanical result of one attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackResult {
    /// The natural d20.
    pub roll: u32,
    /// The attacker's modifier for the chosen attack.
    pub modifier: i32,
    /// `roll + modifier`.
    pub total: i32,
    /// The defender's armor class before any dodge bonus.
    pub armor_class: i32,
    /// `1d6 + dexterity modifier` when the defender was dodging.
    pub dodge_bonus: Option<i32>,
    /// Whether the attack landed.
    pub hit: bool,
    /// Damage dealt (0 on a miss).
    pub damage: i32,
    /// The defender's hit points after the attack.
    pub defender_hit_points: i32,
}

impl AttackResult {
    /// The number the attack had to meet or beat.
    pub fn target(&self) -> i32 {
        self.armor_class + self.dodge_bonus.unwrap_or(0)
    }
}

/// Resolve one attack from `attacker` against `defender`, applying damage.
///
/// Returns `None` for actions that are not attacks. The dodge bonus is only
/// rolled when `defender_dodging` is set, after the attack roll.
pub fn resolve_attack(
    attacker: &Entity,
    defender: &mut Entity,
    action: CombatAction,
    defender_dodging: bool,
    dice: &mut impl DiceSource,
) -> Option<AttackResult> {
    let ability = action.ability()?;
    let modifier = attacker.modifier(ability);
    let roll = dice.roll(Die::D20);
    let total = roll as i32 + modifier;

    let armor_class = defender.armor_class();
    let dodge_bonus =
        defender_dodging.then(|| dice.roll(Die::D6) as i32 + defender.modifier(Ability::Dexterity));
    let target = armor_class + dodge_bonus.unwrap_or(0);

    let hit = total >= target;
    let damage = if hit {
        action.base_damage() + modifier
    } else {
        0
    };
    if hit {
        defender.take_damage(damage);
    }

    tracing::debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        %action,
        roll,
        total,
        target,
        hit,
        damage,
        "attack resolved"
    );

    Some(AttackResult {
        roll,
        modifier,
        total,
        armor_class,
        dodge_bonus,
        hit,
        damage,
        defender_hit_points: defender.hit_points,
    })
}
