//! Command parsing for player input.

use ss_content::Door;
use ss_mechanics::CombatAction;

/// A parsed player command.
///
/// Parsing never depends on the current state; deciding whether a command
/// is acceptable is the session's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Begin the adventure.
    Enter,
    /// Show the commands available right now.
    Help,
    /// Show the character's stat sheet.
    Stats,
    /// Quit immediately.
    Exit,
    /// Leave the help or stats screen.
    Return,
    /// Take the object in the room.
    PickUp,
    /// Walk past the object in the room.
    Leave,
    /// Go through a door.
    Door(Door),
    /// A combat action.
    Action(CombatAction),
    /// Anything else, trimmed but otherwise as typed (names land here).
    Other(String),
}

/// Parse a player input string into a command.
///
/// Matching is case-insensitive, ignores surrounding whitespace, and treats
/// any run of inner whitespace as a single space.
pub fn parse_command(input: &str) -> Command {
    let normalized = input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    match normalized.as_str() {
        "enter" => Command::Enter,
        "help" => Command::Help,
        "stats" => Command::Stats,
        "exit" => Command::Exit,
        "return" => Command::Return,
        "pick up" => Command::PickUp,
        "leave" => Command::Leave,
        "quick" => Command::Action(CombatAction::Quick),
        "heavy" => Command::Action(CombatAction::Heavy),
        "dodge" => Command::Action(CombatAction::Dodge),
        other => match Door::parse(other) {
            Some(door) => Command::Door(door),
            None => Command::Other(input.trim().to_string()),
        },
    }
}
