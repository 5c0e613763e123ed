//! The game session: a state machine driven one line of input at a time.

use ss_content::{ContentRepository, EnemyTemplate, ObjectTemplate};
use ss_core::Character;
use ss_mechanics::{
    CombatAction, DiceSource, Encounter, Outcome, SeededDice, roll_ability_scores,
};

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::output::{CharacterSnapshot, Output, Prompt};
use crate::parser::{Command, parse_command, validate_name};
use crate::state::GameState;

/// One playthrough, from `enter` until `exit`.
///
/// A front end alternates between [`Session::prompt`] and
/// [`Session::process`] until [`Session::is_finished`] is true.
pub struct Session {
    content: Box<dyn ContentRepository>,
    dice: Box<dyn DiceSource>,
    config: GameConfig,
    seed: Option<u64>,
    state: GameState,
    /// The state an open overlay returns to.
    previous: Option<GameState>,
    character: Character,
    offered_object: Option<ObjectTemplate>,
    chosen_room: Option<String>,
    pending_enemy: Option<EnemyTemplate>,
    encounter: Option<Encounter>,
    finished: bool,
}

impl Session {
    /// Create a session rolling seeded dice.
    ///
    /// Without a configured seed one is drawn from entropy and logged, so the
    /// run can be replayed.
    pub fn new(content: impl ContentRepository + 'static, config: GameConfig) -> Self {
        let dice = match config.seed {
            Some(seed) => SeededDice::new(seed),
            None => SeededDice::from_entropy(),
        };
        let seed = dice.seed();
        tracing::info!(seed, "session started");
        let mut session = Self::with_dice(content, dice, config);
        session.seed = Some(seed);
        session
    }

    /// Create a session rolling against any dice source.
    pub fn with_dice(
        content: impl ContentRepository + 'static,
        dice: impl DiceSource + 'static,
        config: GameConfig,
    ) -> Self {
        Self {
            content: Box::new(content),
            dice: Box::new(dice),
            config,
            seed: None,
            state: GameState::GameStart,
            previous: None,
            character: Character::blank(),
            offered_object: None,
            chosen_room: None,
            pending_enemy: None,
            encounter: None,
            finished: false,
        }
    }

    /// The current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The state an open overlay will return to.
    pub fn previous_state(&self) -> Option<GameState> {
        self.previous
    }

    /// The player character. Blank until named.
    pub fn character(&self) -> &Character {
        &self.character
    }

    /// The fight in progress, if any.
    pub fn encounter(&self) -> Option<&Encounter> {
        self.encounter.as_ref()
    }

    /// The object currently lying in the room, once selected.
    pub fn offered_object(&self) -> Option<&ObjectTemplate> {
        self.offered_object.as_ref()
    }

    /// The id of the room behind the chosen door.
    pub fn chosen_room(&self) -> Option<&str> {
        self.chosen_room.as_deref()
    }

    /// The seed the dice were created with, for seeded sessions.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The session's configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns true once the player has typed `exit`.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Everything to show before reading the next line, ending in a
    /// [`Output::Prompt`].
    ///
    /// Random selections for a state happen here, on its first prompt, and are
    /// cached until consumed. Entering combat rolls initiative and plays any
    /// enemy turns that come before the player's.
    pub fn prompt(&mut self) -> Vec<Output> {
        match self.state {
            GameState::GameStart => vec![Output::Prompt(Prompt::Start)],
            GameState::CharacterNaming => vec![Output::Prompt(Prompt::Name)],
            GameState::ObjectPickup => {
                let mut out = Vec::new();
                let object = match &self.offered_object {
                    Some(object) => object.clone(),
                    None => {
                        let object = self.draw_object();
                        out.push(Output::ObjectOffered {
                            name: object.name.clone(),
                            description: object.description.clone(),
                        });
                        object
                    }
                };
                out.push(Output::Prompt(Prompt::Pickup {
                    object: object.name,
                }));
                out
            }
            GameState::DoorChoice => vec![Output::Prompt(Prompt::Door {
                doors: self.content.starting_room().doors.clone(),
            })],
            GameState::Combat => {
                let mut out = Vec::new();
                if self.encounter.is_none() {
                    out.extend(self.begin_encounter());
                }
                out.extend(self.run_enemy_turns());
                let waiting = self
                    .encounter
                    .as_ref()
                    .filter(|encounter| !encounter.is_resolved())
                    .map(|encounter| Prompt::CombatAction {
                        player_hp: encounter.player().hit_points,
                        enemy_hp: encounter.enemy().hit_points,
                        enemy: encounter.enemy().name.clone(),
                    });
                match waiting {
                    Some(prompt) => out.push(Output::Prompt(prompt)),
                    None => {
                        out.extend(self.finish_encounter());
                        out.extend(self.prompt());
                    }
                }
                out
            }
            GameState::Help => vec![Output::Prompt(Prompt::Help)],
            GameState::CharacterStats => vec![Output::Prompt(Prompt::Stats)],
        }
    }

    /// Handle one line of input.
    ///
    /// `exit` is honored everywhere. `help`, `stats` and `return` are honored
    /// everywhere but combat; anything else goes to the current state.
    /// Rejected input leaves the session untouched.
    pub fn process(&mut self, input: &str) -> GameResult<Vec<Output>> {
        if self.finished {
            return Ok(Vec::new());
        }

        let command = parse_command(input);
        tracing::debug!(state = %self.state, ?command, "input");

        if command == Command::Exit {
            self.finished = true;
            tracing::info!("player left the dungeon");
            return Ok(vec![Output::Farewell]);
        }

        if self.state != GameState::Combat {
            match command {
                Command::Help => return Ok(vec![self.open_overlay(GameState::Help)]),
                Command::Stats if self.character.is_named() => {
                    return Ok(vec![self.open_overlay(GameState::CharacterStats)]);
                }
                Command::Return if self.state.is_overlay() => {
                    return Ok(vec![self.close_overlay()]);
                }
                _ => {}
            }
        }

        match self.state {
            GameState::GameStart => self.handle_start(command, input),
            GameState::CharacterNaming => self.handle_naming(input),
            GameState::ObjectPickup => self.handle_pickup(command, input),
            GameState::DoorChoice => self.handle_door(command, input),
            GameState::Combat => self.handle_combat(command, input),
            GameState::Help | GameState::CharacterStats => Err(self.invalid(input)),
        }
    }

    fn handle_start(&mut self, command: Command, input: &str) -> GameResult<Vec<Output>> {
        match command {
            Command::Enter => {
                self.transition(GameState::CharacterNaming);
                Ok(vec![Output::Intro])
            }
            _ => Err(self.invalid(input)),
        }
    }

    fn handle_naming(&mut self, input: &str) -> GameResult<Vec<Output>> {
        let name = validate_name(input)?;
        let scores = roll_ability_scores(&mut self.dice);
        self.character = Character::new(name.clone(), scores);
        tracing::debug!(%name, ?scores, "character created");
        self.transition(GameState::ObjectPickup);
        Ok(vec![
            Output::NameAccepted { name },
            Output::StatSheet(CharacterSnapshot::from(&self.character)),
        ])
    }

    fn handle_pickup(&mut self, command: Command, input: &str) -> GameResult<Vec<Output>> {
        match command {
            Command::PickUp => {
                let object = match self.offered_object.take() {
                    Some(object) => object,
                    None => self.draw_object(),
                };
                self.character.pick_up(object.to_weapon());
                tracing::debug!(object = %object.id, totals = %self.character.stat_changes, "object taken");
                self.transition(GameState::DoorChoice);
                Ok(vec![Output::ObjectTaken {
                    name: object.name,
                    gained: object.stat_changes,
                    totals: self.character.stat_changes.clone(),
                }])
            }
            Command::Leave => {
                let name = match self.offered_object.take() {
                    Some(object) => object.name,
                    None => self.draw_object().name,
                };
                self.transition(GameState::DoorChoice);
                Ok(vec![Output::ObjectLeft { name }])
            }
            _ => Err(self.invalid(input)),
        }
    }

    fn handle_door(&mut self, command: Command, input: &str) -> GameResult<Vec<Output>> {
        let door = match command {
            Command::Door(door) if self.content.starting_room().doors.contains(&door) => door,
            _ => return Err(self.invalid(input)),
        };

        let room = self
            .content
            .random_door_destination(&mut *self.dice)
            .clone();
        let enemy = self.content.random_enemy(&room.id, &mut *self.dice).clone();
        tracing::debug!(%door, room = %room.id, enemy = %enemy.id, "door opened");

        self.character.enter_room();
        self.chosen_room = Some(room.id);
        self.pending_enemy = Some(enemy);
        self.transition(GameState::Combat);
        Ok(vec![Output::RoomEntered {
            door,
            name: room.name,
            description: room.description,
        }])
    }

    fn handle_combat(&mut self, command: Command, input: &str) -> GameResult<Vec<Output>> {
        let action = match command {
            Command::Action(action) => action,
            _ => return Err(self.invalid(input)),
        };

        let mut out = Vec::new();
        if self.encounter.is_none() {
            out.extend(self.begin_encounter());
            out.extend(self.run_enemy_turns());
        }
        out.extend(self.player_action(action)?);
        out.extend(self.run_enemy_turns());

        if self.encounter.as_ref().is_none_or(Encounter::is_resolved) {
            out.extend(self.finish_encounter());
        }
        Ok(out)
    }

    fn player_action(&mut self, action: CombatAction) -> GameResult<Vec<Output>> {
        let Some(encounter) = self.encounter.as_mut() else {
            return Ok(Vec::new());
        };
        if encounter.is_resolved() {
            return Ok(Vec::new());
        }
        let event = encounter.player_turn(action, &mut self.dice)?;
        Ok(vec![Output::Combat(event)])
    }

    fn begin_encounter(&mut self) -> Vec<Output> {
        let enemy = match self.pending_enemy.take() {
            Some(enemy) => enemy,
            None => {
                let room = self
                    .chosen_room
                    .clone()
                    .unwrap_or_else(|| self.content.starting_room().id.clone());
                self.content.random_enemy(&room, &mut *self.dice).clone()
            }
        };
        let encounter = Encounter::begin(self.character.entity.clone(), enemy.spawn(), &mut self.dice)
            .with_turn_cap(self.config.max_turns);
        let initiative = *encounter.initiative();
        self.encounter = Some(encounter);
        vec![
            Output::EnemyAppears {
                name: enemy.name,
                kind: enemy.kind,
            },
            Output::Initiative(initiative),
        ]
    }

    fn run_enemy_turns(&mut self) -> Vec<Output> {
        match self.encounter.as_mut() {
            Some(encounter) => encounter
                .run_enemy_turns(&mut self.dice)
                .into_iter()
                .map(Output::Combat)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Report the outcome and start over with a blank character.
    fn finish_encounter(&mut self) -> Vec<Output> {
        let Some(encounter) = self.encounter.take() else {
            return Vec::new();
        };
        let enemy = encounter.enemy().name.clone();
        let outcome = encounter.outcome().unwrap_or(Outcome::Stalemate);
        tracing::info!(?outcome, turns = encounter.turns(), %enemy, "encounter ended");

        self.character = Character::blank();
        self.offered_object = None;
        self.chosen_room = None;
        self.pending_enemy = None;
        self.previous = None;
        self.transition(GameState::CharacterNaming);

        vec![match outcome {
            Outcome::Victory => Output::Victory { enemy },
            Outcome::Defeat => Output::Defeat { enemy },
            Outcome::Stalemate => Output::Stalemate { enemy },
        }]
    }

    fn open_overlay(&mut self, overlay: GameState) -> Output {
        let base = if self.state.is_overlay() {
            self.previous.unwrap_or(GameState::GameStart)
        } else {
            self.state
        };
        self.previous = Some(base);
        self.transition(overlay);
        match overlay {
            GameState::CharacterStats => {
                Output::StatSheet(CharacterSnapshot::from(&self.character))
            }
            _ => Output::Help {
                state: base,
                commands: base.commands(),
            },
        }
    }

    fn close_overlay(&mut self) -> Output {
        let state = self.previous.take().unwrap_or(GameState::GameStart);
        self.transition(state);
        Output::Returned { state }
    }

    fn draw_object(&mut self) -> ObjectTemplate {
        let object = self
            .content
            .random_pickable_object(&mut *self.dice)
            .clone();
        tracing::debug!(object = %object.id, "object offered");
        self.offered_object = Some(object.clone());
        object
    }

    fn transition(&mut self, to: GameState) {
        tracing::debug!(from = %self.state, %to, "state transition");
        self.state = to;
    }

    fn invalid(&self, input: &str) -> GameError {
        GameError::InvalidCommand {
            state: self.state,
            input: input.trim().to_string(),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("previous", &self.previous)
            .field("character", &self.character.name())
            .field("seed", &self.seed)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}
