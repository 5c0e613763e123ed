//! Command parsing and name validation.

mod command;
mod name;

pub use command::{Command, parse_command};
pub use name::{MAX_NAME_LEN, validate_name};
