use crate::card::{validate_size, DeckError};
use crate::session::scheduler::ShuffleTiming;
use crate::simulation::RESTORE_CAP;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
    #[error("Deck size {size} is outside the allowed range {min}..={max}")]
    SizeOutOfRange { size: usize, min: usize, max: usize },
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Engine and presentation settings, loadable from JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub restore_cap: usize,
    pub min_size: usize,
    pub max_size: usize,
    pub split_delay_ms: u64,
    pub auto_interval_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            restore_cap: RESTORE_CAP,
            min_size: 4,
            max_size: 52,
            split_delay_ms: 800,
            auto_interval_ms: 1500,
        }
    }
}

impl EngineConfig {
    /// Load settings from a JSON file; missing fields keep their defaults
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.restore_cap == 0 {
            return Err(ConfigError::Invalid("restore_cap must be positive".to_string()));
        }
        validate_size(self.min_size)?;
        validate_size(self.max_size)?;
        if self.min_size > self.max_size {
            return Err(ConfigError::Invalid(format!(
                "min_size {} is larger than max_size {}",
                self.min_size, self.max_size
            )));
        }
        Ok(())
    }

    /// Check a requested deck size against the configured bounds
    pub fn validate_size(&self, size: usize) -> Result<usize, ConfigError> {
        validate_size(size)?;
        if size < self.min_size || size > self.max_size {
            return Err(ConfigError::SizeOutOfRange {
                size,
                min: self.min_size,
                max: self.max_size,
            });
        }
        Ok(size)
    }

    /// Every allowed deck size, in steps of 2
    pub fn sizes(&self) -> Vec<usize> {
        (self.min_size..=self.max_size).step_by(2).collect()
    }

    pub fn timing(&self) -> ShuffleTiming {
        ShuffleTiming {
            split_delay: Duration::from_millis(self.split_delay_ms),
            auto_interval: Duration::from_millis(self.auto_interval_ms),
        }
    }
}
