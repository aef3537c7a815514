//! Display configuration for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_inarow::{Occupant, Player};
use tracing::{debug, info, instrument};

/// How the board is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Config {
    /// Symbol drawn for player A's marks.
    #[serde(default = "default_symbol_a")]
    symbol_a: String,

    /// Symbol drawn for player B's marks.
    #[serde(default = "default_symbol_b")]
    symbol_b: String,

    /// Symbol drawn for empty cells.
    #[serde(default = "default_empty_symbol")]
    empty_symbol: String,
}

fn default_symbol_a() -> String {
    "X".to_string()
}

fn default_symbol_b() -> String {
    "O".to_string()
}

fn default_empty_symbol() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbol_a: default_symbol_a(),
            symbol_b: default_symbol_b(),
            empty_symbol: default_empty_symbol(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(symbol_a = %config.symbol_a, symbol_b = %config.symbol_b, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let symbols = [&self.symbol_a, &self.symbol_b, &self.empty_symbol];
        if symbols.iter().any(|s| s.chars().count() != 1) {
            return Err(ConfigError::new("Symbols must be a single character".to_string()));
        }
        if self.symbol_a == self.symbol_b
            || self.symbol_a == self.empty_symbol
            || self.symbol_b == self.empty_symbol
        {
            return Err(ConfigError::new("Symbols must be distinct".to_string()));
        }
        Ok(())
    }

    /// Symbol for a player's marks.
    pub fn player_symbol(&self, player: Player) -> &str {
        match player {
            Player::A => &self.symbol_a,
            Player::B => &self.symbol_b,
        }
    }

    /// Symbol for a cell.
    pub fn cell_symbol(&self, occupant: Occupant) -> &str {
        match occupant {
            Occupant::Empty => &self.empty_symbol,
            Occupant::Occupied(player) => self.player_symbol(player),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
