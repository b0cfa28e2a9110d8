//! Configuration for the interactive session

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Interactive session configuration
///
/// Everything here has a sensible default; a TOML file can override any
/// field. The help and quit tokens are the fixed per-round signals the
/// session recognizes besides numeric move selections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Prompt shown before each input line
    pub prompt: String,
    /// Token that displays the outcome table
    pub help_token: String,
    /// Token that ends the session
    pub quit_token: String,
    /// Optional readline history file
    pub history_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            help_token: "?".to_string(),
            quit_token: "0".to_string(),
            history_file: None,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> GameResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| GameError::Configuration {
            message: format!("Failed to read config file: {e}"),
            field: "config_file".to_string(),
        })?;

        let config: GameConfig = toml::from_str(&content).map_err(|e| GameError::Configuration {
            message: format!("Failed to parse config file: {e}"),
            field: "config_format".to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> GameResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| GameError::Configuration {
            message: format!("Failed to serialize config: {e}"),
            field: "config_serialization".to_string(),
        })?;

        fs::write(path, content).map_err(|e| GameError::Configuration {
            message: format!("Failed to write config file: {e}"),
            field: "config_write".to_string(),
        })?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> GameResult<()> {
        if self.help_token.is_empty() {
            return Err(GameError::Configuration {
                message: "Help token must not be empty".to_string(),
                field: "help_token".to_string(),
            });
        }

        if self.quit_token.is_empty() {
            return Err(GameError::Configuration {
                message: "Quit token must not be empty".to_string(),
                field: "quit_token".to_string(),
            });
        }

        if self.help_token == self.quit_token {
            return Err(GameError::Configuration {
                message: "Help and quit tokens must differ".to_string(),
                field: "help_token".to_string(),
            });
        }

        // A token that reads as a positive integer would shadow a move
        // selection; "0" is fine because selections start at 1.
        for (token, field) in [(&self.help_token, "help_token"), (&self.quit_token, "quit_token")] {
            if token.parse::<usize>().map(|v| v >= 1).unwrap_or(false) {
                return Err(GameError::Configuration {
                    message: format!("Token '{token}' collides with move selections"),
                    field: field.to_string(),
                });
            }
        }

        Ok(())
    }
}
