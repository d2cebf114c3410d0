//! Terminal chess against the computer.
//!
//! The library half holds everything the binary wires together: the
//! [`Game`] controller that schedules the engine's turns, TOML
//! configuration, input parsing and text rendering.

pub mod config;
pub mod game;
pub mod input;
pub mod render;

pub use config::{ConfigError, EngineSide, PlayConfig};
pub use game::{Game, GameError, Status};
pub use input::{parse_command, Command, InputError};
