//! Content for Subterranean Script: rooms, enemies, and pickable objects.
//!
//! The game core only talks to content through [`ContentRepository`]. The
//! built-in [`Dungeon`] is parsed from JSON embedded in the binary.

pub mod dungeon;
pub mod error;
pub mod repository;
pub mod template;

pub use dungeon::Dungeon;
pub use error::{ContentError, ContentResult};
pub use repository::ContentRepository;
pub use template::{Door, EnemyTemplate, ObjectTemplate, RoomTemplate};
