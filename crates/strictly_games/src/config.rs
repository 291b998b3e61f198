//! Game configuration loaded from TOML.

use clap::ValueEnum;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_negamax::SearchConfig;
use tracing::{debug, info, instrument};

/// Who opens an interactive game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The human moves first.
    #[default]
    #[display("human")]
    Human,
    /// The engine moves first.
    #[display("ai")]
    Ai,
}

/// Configuration for an interactive game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Engine settings.
    #[serde(flatten)]
    search: SearchConfig,

    /// Who moves first.
    #[serde(default)]
    first: FirstPlayer,
}

impl GameConfig {
    /// Creates a configuration.
    pub fn new(search: SearchConfig, first: FirstPlayer) -> Self {
        Self { search, first }
    }

    /// Loads configuration from TOML file.
    ///
    /// Missing keys take their defaults. A depth of zero is rejected.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(
            depth = config.search.depth(),
            first = %config.first,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Applies command-line overrides on top of this configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the merged depth is zero.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Result<Self, ConfigError> {
        if let Some(depth) = overrides.depth {
            self.search = self.search.with_depth(depth);
        }
        if let Some(first) = overrides.first {
            self.first = first;
        }
        if overrides.no_table {
            self.search = self.search.with_transposition_table(false);
        }
        if overrides.retain_table {
            self.search = self.search.with_retain_table(true);
        }
        self.validate()?;
        Ok(self)
    }

    #[track_caller]
    fn validate(&self) -> Result<(), ConfigError> {
        if *self.search.depth() == 0 {
            return Err(ConfigError::new("Search depth must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Values given on the command line that take precedence over the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Search depth.
    pub depth: Option<u32>,
    /// First player.
    pub first: Option<FirstPlayer>,
    /// Disable the transposition table.
    pub no_table: bool,
    /// Keep the table between moves.
    pub retain_table: bool,
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
