/// Validation policy: acceptance threshold and unknown-word handling.
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::schema::level::PhonicsLevel;

/// Accessible-word percentage a story needs to pass.
pub const DEFAULT_ACCESSIBLE_THRESHOLD: f64 = 60.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("accessible threshold must be between 0 and 100, got {0}")]
    InvalidThreshold(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum accessible percentage for a valid story (inclusive).
    pub accessible_threshold: f64,
    /// Unrecognized words count as `vocabulary` rather than `unknown`.
    pub permissive_unknown_words: bool,
    /// Raise an issue for vocabulary words missing from the topic list.
    pub flag_untracked_vocabulary: bool,
    /// Level used when a request does not name one.
    pub default_level: PhonicsLevel,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            accessible_threshold: DEFAULT_ACCESSIBLE_THRESHOLD,
            permissive_unknown_words: true,
            flag_untracked_vocabulary: false,
            default_level: PhonicsLevel::default(),
        }
    }
}

impl ValidationConfig {
    /// Load a config from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<ValidationConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a config from a RON string. Missing fields take their defaults.
    pub fn parse_ron(input: &str) -> Result<ValidationConfig, ConfigError> {
        let config: ValidationConfig = ron::from_str(input)?;
        config.check()?;
        Ok(config)
    }

    pub fn with_threshold(mut self, threshold: f64) -> Result<Self, ConfigError> {
        self.accessible_threshold = threshold;
        self.check()?;
        Ok(self)
    }

    fn check(&self) -> Result<(), ConfigError> {
        let t = self.accessible_threshold;
        if !t.is_finite() || !(0.0..=100.0).contains(&t) {
            return Err(ConfigError::InvalidThreshold(t));
        }
        Ok(())
    }

    /// The pass/fail verdict for an accessible percentage.
    pub fn accepts(&self, accessible_percent: f64) -> bool {
        accessible_percent >= self.accessible_threshold
    }
}
