//! The finite set of game states.

use serde::{Deserialize, Serialize};

/// Where the player is in the adventure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for the player to type `enter`.
    GameStart,
    /// Waiting for the name etched on the character's arm.
    CharacterNaming,
    /// An object lies in the room; take it or leave it.
    ObjectPickup,
    /// Two doors; pick one.
    DoorChoice,
    /// Fighting whatever was behind the door.
    Combat,
    /// The command list, over some other state.
    Help,
    /// The stat sheet, over some other state.
    CharacterStats,
}

impl GameState {
    /// Overlays remember the state they were opened from.
    pub fn is_overlay(self) -> bool {
        matches!(self, Self::Help | Self::CharacterStats)
    }

    /// A one-line nudge telling a lost player what this state accepts.
    pub fn hint(self) -> &'static str {
        match self {
            Self::GameStart => "Type 'enter' or 'Enter'.",
            Self::CharacterNaming => "Read the name etched on your arm.",
            Self::ObjectPickup => "Type 'pick up' or 'leave'.",
            Self::DoorChoice => "Type 'left' or 'right'.",
            Self::Combat => "Type 'quick', 'heavy' or 'dodge'.",
            Self::Help | Self::CharacterStats => "Type 'return' to go back.",
        }
    }

    /// The commands the help screen lists for this state.
    pub fn commands(self) -> &'static [&'static str] {
        match self {
            Self::GameStart => &["enter", "help", "exit"],
            Self::CharacterNaming => &["<your name>", "help", "exit"],
            Self::ObjectPickup => &["pick up", "leave", "help", "stats", "exit"],
            Self::DoorChoice => &["left", "right", "help", "stats", "exit"],
            Self::Combat => &["quick", "heavy", "dodge", "exit"],
            Self::Help => &["return", "stats", "exit"],
            Self::CharacterStats => &["return", "help", "exit"],
        }
    }

    /// Human-readable state name.
    pub fn name(self) -> &'static str {
        match self {
            Self::GameStart => "game start",
            Self::CharacterNaming => "character naming",
            Self::ObjectPickup => "object pickup",
            Self::DoorChoice => "door choice",
            Self::Combat => "combat",
            Self::Help => "help",
            Self::CharacterStats => "character stats",
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlays() {
        assert!(GameState::Help.is_overlay());
        assert!(GameState::CharacterStats.is_overlay());
        assert!(!GameState::Combat.is_overlay());
        assert!(!GameState::GameStart.is_overlay());
    }

    #[test]
    fn combat_lists_no_help() {
        let commands = GameState::Combat.commands();
        assert!(commands.contains(&"dodge"));
        assert!(!commands.contains(&"help"));
        assert!(!commands.contains(&"stats"));
    }

    #[test]
    fn every_state_lists_exit() {
        for state in [
            GameState::GameStart,
            GameState::CharacterNaming,
            GameState::ObjectPickup,
            GameState::DoorChoice,
            GameState::Combat,
            GameState::Help,
            GameState::CharacterStats,
        ] {
            assert!(state.commands().contains(&"exit"), "{state}");
        }
    }
}
