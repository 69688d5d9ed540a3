//! Front end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Name used when the first name field is left blank.
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Name used when the second name field is left blank.
    #[serde(default = "default_player_two")]
    player_two: String,

    /// Where the interactive mode writes its logs.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_player_one() -> String {
    "Player 1".to_string()
}

fn default_player_two() -> String {
    "Player 2".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Like [`from_file`](Self::from_file), but a missing file yields defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces default names with any given on the command line.
    pub fn with_names(mut self, player_one: Option<String>, player_two: Option<String>) -> Self {
        if let Some(name) = player_one {
            self.player_one = name;
        }
        if let Some(name) = player_two {
            self.player_two = name;
        }
        self
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: default_player_two(),
            log_file: default_log_file(),
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
