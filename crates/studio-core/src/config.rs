//! Studio configuration - starting conditions for a new game
//!
//! A `StudioConfig` can be built in code or read from a JSON file. Missing
//! fields fall back to the defaults, so `{}` is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};
use studio_logic::actions::FundsPolicy;

/// Starting conditions and house rules for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub starting_year: u32,
    pub starting_money: i64,
    /// Size of the opening actor pool
    pub initial_actors: u32,
    /// Size of the opening co-producer pool
    pub initial_coproducers: u32,
    pub funds_policy: FundsPolicy,
    /// Fixed seed for reproducible sessions; entropy when absent
    pub seed: Option<u64>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            starting_year: 2025,
            starting_money: 10_000_000,
            initial_actors: 8,
            initial_coproducers: 5,
            funds_policy: FundsPolicy::Strict,
            seed: None,
        }
    }
}

impl StudioConfig {
    /// Parse a config from JSON text
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.as_ref().display(), e)))?;
        Self::from_json(&text)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Why a config could not be loaded or used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The file could not be read.
    Io(String),
    /// The text is not valid config JSON.
    Parse(String),
    /// A production needs a lead and a supporting actor.
    TooFewActors(u32),
    /// A production needs a co-producer.
    TooFewCoproducers(u32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Config error: {}", e),
            ConfigError::TooFewActors(n) => {
                write!(f, "Need at least 2 initial actors, got {}", n)
            }
            ConfigError::TooFewCoproducers(n) => {
                write!(f, "Need at least 1 initial co-producer, got {}", n)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Validate a config, returning all errors found.
pub fn validate_config(config: &StudioConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if config.initial_actors < 2 {
        errors.push(ConfigError::TooFewActors(config.initial_actors));
    }
    if config.initial_coproducers < 1 {
        errors.push(ConfigError::TooFewCoproducers(config.initial_coproducers));
    }

    errors
}
