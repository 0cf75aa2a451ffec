//! Search configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Options selecting how the game tree is walked.
///
/// Every combination returns the same move and score; the options only
/// change how much of the tree is visited and on how many threads.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Setters, Serialize, Deserialize,
)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct SearchConfig {
    /// Prune with an alpha-beta window.
    pruning: bool,

    /// Search the root's children on the rayon thread pool.
    parallel: bool,
}

impl SearchConfig {
    /// Plain sequential minimax over the full tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses configuration from a TOML document. Missing keys default to `false`.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(pruning = config.pruning, parallel = config.parallel, "Config loaded successfully");
        Ok(config)
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
