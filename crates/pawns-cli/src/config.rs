//! Configuration file loading for the console front end.
//!
//! Settings come from `pawns.toml` in the working directory unless another
//! path is given. Every field has a default, and a missing file is not an
//! error.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Player names. A missing name is asked for at startup.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct PlayersConfig {
    #[serde(default)]
    pub white: Option<String>,
    #[serde(default)]
    pub black: Option<String>,
}

/// Console front end configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default)]
    pub players: PlayersConfig,
    /// Line that ends the session instead of being played as a move.
    /// Defaults to "exit".
    #[serde(default = "default_quit_token")]
    pub quit_token: String,
}

fn default_quit_token() -> String {
    "exit".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            players: PlayersConfig::default(),
            quit_token: default_quit_token(),
        }
    }
}

impl CliConfig {
    /// Loads the configuration from `path`, or defaults if the file does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::parse(&content)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        PathBuf::from("pawns.toml")
    }
}
