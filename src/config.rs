//! Runtime configuration for the command-line front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_scrabble::{Board, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use tracing::{debug, info, instrument};

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ScrabbleConfig {
    /// Newline-delimited word list.
    #[serde(default = "default_dictionary")]
    dictionary: PathBuf,

    /// Board rows.
    #[serde(default = "default_height")]
    board_height: usize,

    /// Board columns.
    #[serde(default = "default_width")]
    board_width: usize,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_dictionary() -> PathBuf {
    PathBuf::from("words.txt")
}

fn default_height() -> usize {
    DEFAULT_HEIGHT
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ScrabbleConfig {
    fn default() -> Self {
        Self {
            dictionary: default_dictionary(),
            board_height: default_height(),
            board_width: default_width(),
            log_filter: default_log_filter(),
        }
    }
}

impl ScrabbleConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(dictionary = %config.dictionary.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.board_height == 0 || config.board_width == 0 {
            return Err(ConfigError::new(format!(
                "Board must be at least 1x1, got {}x{}",
                config.board_height, config.board_width
            )));
        }
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the dictionary path.
    pub fn with_dictionary(mut self, dictionary: impl Into<PathBuf>) -> Self {
        self.dictionary = dictionary.into();
        self
    }

    /// Creates an empty board with the configured dimensions.
    pub fn board(&self) -> Board {
        Board::new(self.board_height, self.board_width)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScrabbleConfig::default();
        assert_eq!(config.dictionary(), &PathBuf::from("words.txt"));
        assert_eq!(*config.board_height(), 14);
        assert_eq!(config.board().center(), (7, 7));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = ScrabbleConfig::from_toml("board_height = 15\nboard_width = 15\n").unwrap();
        assert_eq!(*config.board_width(), 15);
        assert_eq!(config.log_filter(), "info");
        assert_eq!(config.board().center(), (7, 7));
    }

    #[test]
    fn test_zero_sized_board_rejected() {
        let err = ScrabbleConfig::from_toml("board_height = 0").unwrap_err();
        assert!(err.message.contains("at least 1x1"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = ScrabbleConfig::from_toml("board_height = \"tall\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
