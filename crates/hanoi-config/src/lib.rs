//! Configuration system for Hanoi.
//!
//! Load solver configuration from TOML or YAML files to control the
//! accepted disk range, random disk selection and result handling without
//! code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use hanoi_config::HanoiConfig;
//!
//! let config = HanoiConfig::from_toml_str(r#"
//!     random_seed = 7
//!     move_display_limit = 20
//!
//!     [disks]
//!     min = 3
//!     max = 12
//! "#).unwrap();
//!
//! assert_eq!(config.disks.min, 3);
//! assert_eq!(config.move_display_limit(), 20);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use hanoi_config::HanoiConfig;
//!
//! let config = HanoiConfig::load("hanoi.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use hanoi_core::{DiskRange, HanoiError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Moves surfaced per result when no limit is configured.
pub const DEFAULT_MOVE_DISPLAY_LIMIT: usize = 50;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for HanoiError {
    fn from(err: ConfigError) -> Self {
        HanoiError::Config(err.to_string())
    }
}

/// Main solver configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HanoiConfig {
    /// Disk counts engines accept at construction.
    #[serde(default)]
    pub disks: DiskRange,

    /// Random seed for reproducible disk selection.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Moves surfaced per result when a caller truncates for transport.
    #[serde(default)]
    pub move_display_limit: Option<usize>,

    /// Whether every generated result is replayed through the verifier.
    #[serde(default = "default_true")]
    pub verify_results: bool,
}

fn default_true() -> bool {
    true
}

impl Default for HanoiConfig {
    fn default() -> Self {
        Self {
            disks: DiskRange::default(),
            random_seed: None,
            move_display_limit: None,
            verify_results: true,
        }
    }
}

impl HanoiConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// describes an unusable disk range.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.disks
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Sets the accepted disk range.
    pub fn with_disk_range(mut self, disks: DiskRange) -> Self {
        self.disks = disks;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets how many moves are surfaced per result.
    pub fn with_move_display_limit(mut self, limit: usize) -> Self {
        self.move_display_limit = Some(limit);
        self
    }

    /// Enables or disables result verification.
    pub fn with_verify_results(mut self, verify: bool) -> Self {
        self.verify_results = verify;
        self
    }

    /// Returns the configured display limit or [`DEFAULT_MOVE_DISPLAY_LIMIT`].
    pub fn move_display_limit(&self) -> usize {
        self.move_display_limit.unwrap_or(DEFAULT_MOVE_DISPLAY_LIMIT)
    }
}

#[cfg(test)]
mod tests;
