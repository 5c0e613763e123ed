//! One-on-one turn-based combat.
//!
//! An [`Encounter`] pits the player against one enemy. Initiative decides who
//! acts first, then turns strictly alternate until one side drops to zero hit
//! points (or an optional turn cap calls a stalemate).

pub mod action;

pub use action::{AttackResult, CombatAction, resolve_attack};

use serde::{Deserialize, Serialize};
use ss_core::{Ability, Entity};

use crate::dice::{DiceSource, Die};
use crate::error::{MechError, MechResult};

/// Which side of the encounter a combatant is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The player character.
    Player,
    /// The enemy.
    Enemy,
}

impl Side {
    /// The opposing side.
    pub fn other(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Player => 0,
            Self::Enemy => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Enemy => write!(f, "enemy"),
        }
    }
}

/// The initiative contest that opens an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Initiative {
    /// The player's natural d20.
    pub player_roll: u32,
    /// The player's d20 plus dexterity modifier.
    pub player_total: i32,
    /// The enemy's natural d20.
    pub enemy_roll: u32,
    /// The enemy's d20 plus dexterity modifier.
    pub enemy_total: i32,
    /// Who acts first. Ties go to the player.
    pub first: Side,
}

/// Roll initiative: player first, then enemy, each 1d20 + dexterity modifier.
pub fn roll_initiative(player: &Entity, enemy: &Entity, dice: &mut impl DiceSource) -> Initiative {
    let player_roll = dice.roll(Die::D20);
    let enemy_roll = dice.roll(Die::D20);
    let player_total = player_roll as i32 + player.modifier(Ability::Dexterity);
    let enemy_total = enemy_roll as i32 + enemy.modifier(Ability::Dexterity);
    let first = if player_total >= enemy_total {
        Side::Player
    } else {
        Side::Enemy
    };
    Initiative {
        player_roll,
        player_total,
        enemy_roll,
        enemy_total,
        first,
    }
}

/// The enemy's choice: uniform over the three actions.
fn enemy_action(dice: &mut impl DiceSource) -> CombatAction {
    CombatAction::ALL[dice.pick(CombatAction::ALL.len())]
}

/// How an encounter ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The enemy fell.
    Victory,
    /// The player fell.
    Defeat,
    /// The turn cap was reached with both sides standing.
    Stalemate,
}

/// A recorded combat turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatEvent {
    /// Which turn this was (1-based).
    pub turn: u32,
    /// The side that acted.
    pub actor: Side,
    /// The acting combatant's name.
    pub actor_name: String,
    /// The opposing combatant's name.
    pub target_name: String,
    /// What the actor did.
    pub action: CombatAction,
    /// The attack's mechanics, for attack actions.
    pub attack: Option<AttackResult>,
}

/// The state of one encounter between the player and an enemy.
#[derive(Debug, Clone)]
pub struct Encounter {
    /// Indexed by [`Side`].
    combatants: [Entity; 2],
    /// Indexed by [`Side`]. Set by a dodge, consumed by the next action.
    dodging: [bool; 2],
    initiative: Initiative,
    next: Side,
    turn: u32,
    max_turns: Option<u32>,
    outcome: Option<Outcome>,
    log: Vec<CombatEvent>,
}

impl Encounter {
    /// Start an encounter: roll initiative and hand the first turn out.
    pub fn begin(player: Entity, enemy: Entity, dice: &mut impl DiceSource) -> Self {
        let initiative = roll_initiative(&player, &enemy, dice);
        tracing::info!(
            player = %player.name,
            enemy = %enemy.name,
            player_total = initiative.player_total,
            enemy_total = initiative.enemy_total,
            first = %initiative.first,
            "encounter started"
        );
        let mut encounter = Self {
            combatants: [player, enemy],
            dodging: [false; 2],
            initiative,
            next: initiative.first,
            turn: 0,
            max_turns: None,
            outcome: None,
            log: Vec::new(),
        };
        encounter.check_outcome();
        encounter
    }

    /// Cap the number of turns; reaching it ends the encounter in a stalemate.
    pub fn with_turn_cap(mut self, max_turns: Option<u32>) -> Self {
        self.max_turns = max_turns;
        self.check_outcome();
        self
    }

    /// The initiative contest that opened this encounter.
    pub fn initiative(&self) -> &Initiative {
        &self.initiative
    }

    /// The combatant on a side.
    pub fn combatant(&self, side: Side) -> &Entity {
        &self.combatants[side.index()]
    }

    /// The player's combatant.
    pub fn player(&self) -> &Entity {
        self.combatant(Side::Player)
    }

    /// The enemy combatant.
    pub fn enemy(&self) -> &Entity {
        self.combatant(Side::Enemy)
    }

    /// Whether a side is currently braced by a dodge.
    pub fn is_dodging(&self, side: Side) -> bool {
        self.dodging[side.index()]
    }

    /// Who acts next, or `None` once the encounter is over.
    pub fn next_actor(&self) -> Option<Side> {
        match self.outcome {
            Some(_) => None,
            None => Some(self.next),
        }
    }

    /// Number of turns taken so far.
    pub fn turns(&self) -> u32 {
        self.turn
    }

    /// How the encounter ended, if it has.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns true once the encounter has an outcome.
    pub fn is_resolved(&self) -> bool {
        self.outcome.is_some()
    }

    /// Every turn taken so far.
    pub fn log(&self) -> &[CombatEvent] {
        &self.log
    }

    /// Resolve `action` for whoever's turn it is, then pass the turn.
    pub fn act(
        &mut self,
        action: CombatAction,
        dice: &mut impl DiceSource,
    ) -> MechResult<CombatEvent> {
        let actor = self.next_actor().ok_or(MechError::EncounterResolved)?;
        Ok(self.take_turn(actor, action, dice))
    }

    /// Resolve one turn for `actor`. The caller has checked it is their turn.
    fn take_turn(
        &mut self,
        actor: Side,
        action: CombatAction,
        dice: &mut impl DiceSource,
    ) -> CombatEvent {
        let defender = actor.other();
        self.turn += 1;

        let attack = if action.is_attack() {
            let defender_dodging = self.is_dodging(defender);
            let [player, enemy] = &mut self.combatants;
            let (attacker, target) = match actor {
                Side::Player => (&*player, enemy),
                Side::Enemy => (&*enemy, player),
            };
            resolve_attack(attacker, target, action, defender_dodging, dice)
        } else {
            None
        };

        // A dodge protects against exactly the next action, whatever it is.
        self.dodging = [false; 2];
        if action == CombatAction::Dodge {
            self.dodging[actor.index()] = true;
        }

        let event = CombatEvent {
            turn: self.turn,
            actor,
            actor_name: self.combatant(actor).name.clone(),
            target_name: self.combatant(defender).name.clone(),
            action,
            attack,
        };
        self.log.push(event.clone());
        self.next = defender;
        self.check_outcome();
        event
    }

    /// Resolve the player's chosen action.
    pub fn player_turn(
        &mut self,
        action: CombatAction,
        dice: &mut impl DiceSource,
    ) -> MechResult<CombatEvent> {
        self.expect_turn(Side::Player)?;
        self.act(action, dice)
    }

    /// Let the enemy pick uniformly among the three actions and resolve it.
    pub fn enemy_turn(&mut self, dice: &mut impl DiceSource) -> MechResult<CombatEvent> {
        self.expect_turn(Side::Enemy)?;
        let action = enemy_action(dice);
        Ok(self.take_turn(Side::Enemy, action, dice))
    }

    /// Play enemy turns until it is the player's turn or the encounter ends.
    pub fn run_enemy_turns(&mut self, dice: &mut impl DiceSource) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        while self.next_actor() == Some(Side::Enemy) {
            let action = enemy_action(dice);
            events.push(self.take_turn(Side::Enemy, action, dice));
        }
        events
    }

    /// Play the encounter to the end, asking `choose` for each player action.
    ///
    /// Without a turn cap this only returns once a side falls.
    pub fn run_to_end(
        &mut self,
        dice: &mut impl DiceSource,
        mut choose: impl FnMut(&Encounter) -> CombatAction,
    ) -> Outcome {
        while let Some(actor) = self.next_actor() {
            let action = match actor {
                Side::Player => choose(self),
                Side::Enemy => enemy_action(dice),
            };
            self.take_turn(actor, action, dice);
        }
        self.outcome.unwrap_or(Outcome::Stalemate)
    }

    fn expect_turn(&self, side: Side) -> MechResult<()> {
        match self.next_actor() {
            None => Err(MechError::EncounterResolved),
            Some(next) if next != side => Err(MechError::NotYourTurn(side)),
            Some(_) => Ok(()),
        }
    }

    fn check_outcome(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        self.outcome = if !self.enemy().is_alive() {
            Some(Outcome::Victory)
        } else if !self.player().is_alive() {
            Some(Outcome::Defeat)
        } else if self.max_turns.is_some_and(|cap| self.turn >= cap) {
            Some(Outcome::Stalemate)
        } else {
            None
        };
        if let Some(outcome) = self.outcome {
            tracing::info!(?outcome, turns = self.turn, "encounter resolved");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{RiggedDice, SeededDice};
    use ss_core::{AbilityScores, Kind, Weapon};

    fn combatant(kind: Kind, name: &str, dexterity: i32) -> Entity {
        let scores = AbilityScores {
            dexterity,
            ..AbilityScores::default()
        };
        Entity::new(kind, name, scores, Weapon::bare_hands())
    }

    fn hero(dexterity: i32) -> Entity {
        combatant(Kind::Hero, "Thorne", dexterity)
    }

    fn rat(dexterity: i32) -> Entity {
        combatant(Kind::Beast, "Dungeon Rat", dexterity)
    }

    #[test]
    fn initiative_adds_dexterity() {
        // Dexterity 9 -> +2, dexterity 5 -> +0.
        let init = roll_initiative(&hero(9), &rat(5), &mut RiggedDice::new([15, 10]));
        assert_eq!(init.player_total, 17);
        assert_eq!(init.enemy_total, 10);
        assert_eq!(init.first, Side::Player);
    }

    #[test]
    fn initiative_ties_favor_the_player() {
        let init = roll_initiative(&hero(5), &rat(5), &mut RiggedDice::new([12, 12]));
        assert_eq!(init.first, Side::Player);

        let init = roll_initiative(&hero(5), &rat(7), &mut RiggedDice::new([12, 12]));
        assert_eq!(init.first, Side::Enemy);
    }

    #[test]
    fn turns_alternate() {
        let mut dice = RiggedDice::new([20, 1]).with_picks([2]);
        let mut encounter = Encounter::begin(hero(5), rat(5), &mut dice);
        assert_eq!(encounter.next_actor(), Some(Side::Player));

        encounter.player_turn(CombatAction::Dodge, &mut dice).unwrap();
        assert_eq!(encounter.next_actor(), Some(Side::Enemy));
        assert!(encounter.player_turn(CombatAction::Dodge, &mut dice).is_err());

        let event = encounter.enemy_turn(&mut dice).unwrap();
        assert_eq!(event.action, CombatAction::Dodge);
        assert_eq!(event.actor_name, "Dungeon Rat");
        assert_eq!(encounter.next_actor(), Some(Side::Player));
        assert_eq!(encounter.turns(), 2);
    }

    #[test]
    fn dodge_protects_exactly_one_attack() {
        // Enemy wins initiative and dodges; the player's attack must beat it.
        let mut dice = RiggedDice::new([1, 20]).with_picks([2, 2]);
        let mut encounter = Encounter::begin(hero(5), rat(5), &mut dice);
        assert_eq!(encounter.next_actor(), Some(Side::Enemy));

        encounter.enemy_turn(&mut dice).unwrap();
        assert!(encounter.is_dodging(Side::Enemy));

        // Player's quick attack: d20 = 10, dodge d6 = 3.
        let mut dice = RiggedDice::new([10, 3]).with_picks([2]);
        let event = encounter.player_turn(CombatAction::Quick, &mut dice).unwrap();
        let attack = event.attack.unwrap();
        assert_eq!(attack.dodge_bonus, Some(3));
        assert_eq!(attack.target(), encounter.enemy().armor_class() + 3);
        assert!(!encounter.is_dodging(Side::Enemy));
        assert_eq!(dice.rolls_consumed(), 2);
    }

    #[test]
    fn dodge_flag_lapses_after_the_next_action() {
        let mut dice = RiggedDice::new([20, 1]).with_picks([0]);
        let mut encounter = Encounter::begin(hero(5), rat(5), &mut dice);

        encounter.player_turn(CombatAction::Dodge, &mut dice).unwrap();
        assert!(encounter.is_dodging(Side::Player));

        // Enemy's quick attack consumes the dodge (d20 then d6).
        let mut dice = RiggedDice::new([2, 1]).with_picks([0]);
        let event = encounter.enemy_turn(&mut dice).unwrap();
        assert!(event.attack.unwrap().dodge_bonus.is_some());
        assert!(!encounter.is_dodging(Side::Player));

        // The following attack back at the player would see no dodge.
        encounter.player_turn(CombatAction::Quick, &mut dice).unwrap();
        let event = encounter.enemy_turn(&mut dice).unwrap();
        assert!(event.attack.unwrap().dodge_bonus.is_none());
    }

    #[test]
    fn victory_when_the_enemy_falls() {
        let mut enemy = rat(5);
        enemy.hit_points = 3;
        let mut dice = RiggedDice::new([20, 1, 20]);
        let mut encounter = Encounter::begin(hero(5), enemy, &mut dice);

        let event = encounter.player_turn(CombatAction::Quick, &mut dice).unwrap();
        assert!(event.attack.unwrap().hit);
        assert_eq!(encounter.outcome(), Some(Outcome::Victory));
        assert_eq!(encounter.next_actor(), None);
        assert!(matches!(
            encounter.act(CombatAction::Quick, &mut dice),
            Err(MechError::EncounterResolved)
        ));
    }

    #[test]
    fn defeat_when_the_player_falls() {
        let mut player = hero(5);
        player.hit_points = 1;
        let mut dice = RiggedDice::new([1, 20, 20]).with_picks([1]);
        let mut encounter = Encounter::begin(player, rat(5), &mut dice);

        let events = encounter.run_enemy_turns(&mut dice);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].action, CombatAction::Heavy);
        assert_eq!(encounter.outcome(), Some(Outcome::Defeat));
        assert!(encounter.player().hit_points <= 0);
    }

    #[test]
    fn always_missing_only_ends_with_a_turn_cap() {
        // Every d20 is a 1 and both sides wear heavy armor, so nothing lands.
        let mut player = hero(5);
        player.armor_bonus = Some(10);
        let mut enemy = rat(5);
        enemy.armor_bonus = Some(10);
        let mut dice = RiggedDice::new([1]).with_picks([0, 1]);
        let mut encounter = Encounter::begin(player, enemy, &mut dice).with_turn_cap(Some(50));

        let outcome = encounter.run_to_end(&mut dice, |_| CombatAction::Heavy);
        assert_eq!(outcome, Outcome::Stalemate);
        assert_eq!(encounter.turns(), 50);
        assert!(encounter.player().is_alive());
        assert!(encounter.enemy().is_alive());
    }

    #[test]
    fn run_to_end_records_every_alternating_turn() {
        let mut dice = SeededDice::new(3);
        let mut encounter = Encounter::begin(hero(12), rat(8), &mut dice).with_turn_cap(Some(30));
        let first = encounter.initiative().first;
        encounter.run_to_end(&mut dice, |_| CombatAction::Quick);

        let log = encounter.log();
        assert_eq!(log.len() as u32, encounter.turns());
        for (i, event) in log.iter().enumerate() {
            assert_eq!(event.turn, i as u32 + 1);
            let expected = if i % 2 == 0 { first } else { first.other() };
            assert_eq!(event.actor, expected);
        }
        assert!(encounter.is_resolved());
    }

    #[test]
    fn seeded_fights_always_finish() {
        for seed in 0..200 {
            let mut dice = SeededDice::new(seed);
            let mut encounter = Encounter::begin(hero(12), rat(8), &mut dice);
            let outcome = encounter.run_to_end(&mut dice, |e| {
                if e.turns() % 3 == 0 {
                    CombatAction::Dodge
                } else {
                    CombatAction::Quick
                }
            });
            assert_ne!(outcome, Outcome::Stalemate);
            assert!(!encounter.player().is_alive() || !encounter.enemy().is_alive());
        }
    }
}
