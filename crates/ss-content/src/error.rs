//! Error types for content loading.

use thiserror::Error;

use crate::template::Door;

/// Result type for content operations.
pub type ContentResult<T> = Result<T, ContentError>;

/// Errors that can occur while loading or validating content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content file is not valid JSON or does not match the schema.
    #[error("malformed content: {0}")]
    Parse(#[from] serde_json::Error),

    /// A pool that random draws are made from has no entries.
    #[error("content has no {0}")]
    EmptyPool(&'static str),

    /// Two templates of the same type share an id.
    #[error("duplicate id: \"{0}\"")]
    DuplicateId(String),

    /// A room-specific enemy is keyed by a room that does not exist.
    #[error("room-specific enemy \"{enemy}\" refers to unknown room \"{room}\"")]
    UnknownRoom {
        /// The dangling room id.
        room: String,
        /// The enemy keyed by it.
        enemy: String,
    },

    /// A room offers an object that does not exist.
    #[error("room \"{room}\" offers unknown object \"{object}\"")]
    UnknownObject {
        /// The offering room.
        room: String,
        /// The dangling object id.
        object: String,
    },

    /// A room is missing one of the two doors every room must have.
    #[error("room \"{room}\" has no {door} door")]
    MissingDoor {
        /// The room id.
        room: String,
        /// The absent door.
        door: Door,
    },
}
