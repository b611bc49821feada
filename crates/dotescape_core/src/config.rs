//! Game configuration.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width and height.
    #[serde(default = "default_size")]
    size: usize,

    /// Chance that each interior cell starts blocked.
    #[serde(default = "default_blocked_ratio")]
    initial_blocked_ratio: f64,

    /// Where the game is saved on quit and resumed from on start.
    #[serde(default = "default_save_path")]
    save_path: PathBuf,

    /// Maximum undo entries kept; unlimited when absent.
    #[serde(default)]
    history_limit: Option<usize>,
}

#[instrument]
fn default_size() -> usize {
    11
}

#[instrument]
fn default_blocked_ratio() -> f64 {
    0.1
}

#[instrument]
fn default_save_path() -> PathBuf {
    PathBuf::from("dotescape_save.json")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            initial_blocked_ratio: default_blocked_ratio(),
            save_path: default_save_path(),
            history_limit: None,
        }
    }
}

impl GameConfig {
    /// Largest accepted `initial_blocked_ratio`.
    pub const MAX_BLOCKED_RATIO: f64 = 0.5;

    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(size = config.size, "Config loaded successfully");
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the size is outside the supported range or the
    /// blocked ratio is outside `[0, MAX_BLOCKED_RATIO]`.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "Board size {} is below the minimum of {}",
                self.size, MIN_BOARD_SIZE
            )));
        }
        if self.size > MAX_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "Board size {} is above the maximum of {}",
                self.size, MAX_BOARD_SIZE
            )));
        }
        if !(0.0..=Self::MAX_BLOCKED_RATIO).contains(&self.initial_blocked_ratio) {
            return Err(ConfigError::new(format!(
                "initial_blocked_ratio {} must be between 0 and {}",
                self.initial_blocked_ratio,
                Self::MAX_BLOCKED_RATIO
            )));
        }
        Ok(())
    }

    /// Replaces the board size.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Replaces the initial blocked ratio.
    pub fn with_blocked_ratio(mut self, ratio: f64) -> Self {
        self.initial_blocked_ratio = ratio;
        self
    }

    /// Replaces the save path.
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// Replaces the undo limit.
    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
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
