//! Configuration file loading for the terminal game.
//!
//! Settings live in a TOML file (`chess.toml` by default). Every field is
//! optional; a missing file means all defaults.

use chess_ai::SearchParams;
use chess_core::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A value parsed but is out of range.
    #[error("Invalid value for `{field}`: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}

/// Which side the computer plays, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EngineSide {
    White,
    Black,
    /// Two human players.
    None,
}

impl EngineSide {
    pub fn color(self) -> Option<Color> {
        match self {
            EngineSide::White => Some(Color::White),
            EngineSide::Black => Some(Color::Black),
            EngineSide::None => None,
        }
    }
}

/// Game configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlayConfig {
    /// Search depth in plies. Defaults to 3.
    #[serde(default = "default_depth")]
    pub depth: u32,
    /// Upper bound of the random noise added to root scores. Defaults to 0.1.
    #[serde(default = "default_jitter")]
    pub jitter: f64,
    /// Side played by the computer. Defaults to black.
    #[serde(default = "default_engine")]
    pub engine: EngineSide,
    /// Seed for the engine's RNG; unseeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_depth() -> u32 {
    SearchParams::default().depth
}

fn default_jitter() -> f64 {
    SearchParams::default().jitter
}

fn default_engine() -> EngineSide {
    EngineSide::Black
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            depth: default_depth(),
            jitter: default_jitter(),
            engine: default_engine(),
            seed: None,
        }
    }
}

impl PlayConfig {
    /// Loads the configuration from `path`.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// [`ConfigError::ParseError`] if it is not valid TOML, or
    /// [`ConfigError::InvalidValue`] if a value is out of range.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: PlayConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chess.toml")
    }

    /// Checks that depth and jitter are usable by the searcher.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "depth",
                reason: "must be at least 1".to_string(),
            });
        }
        if !self.jitter.is_finite() || self.jitter < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "jitter",
                reason: format!("must be a non-negative number, got {}", self.jitter),
            });
        }
        Ok(())
    }

    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            depth: self.depth,
            jitter: self.jitter,
        }
    }
}
