//! Balancer configuration, loaded from TOML.
//!
//! Every field is optional in the file; missing values fall back to the defaults
//! (weights 0.5 / 0.3 / 0.2, fast algorithm, 50 history entries).
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::balancer::Algorithm;
use crate::constants::DEFAULT_HISTORY_CAPACITY;
use crate::error::ConfigError;
use crate::model::condition::Weights;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalancerConfig {
    pub weights: Weights,
    pub algorithm: Algorithm,
    pub history_capacity: usize,
}

impl Default for BalancerConfig {
    fn default() -> Self {
        BalancerConfig {
            weights: Weights::default(),
            algorithm: Algorithm::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl BalancerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: BalancerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io { path: path.display().to_string(), source }),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("rating", self.weights.rating),
            ("pace", self.weights.pace),
            ("condition", self.weights.condition),
        ];
        for (attribute, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { attribute, value });
            }
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroHistoryCapacity);
        }
        Ok(())
    }
}
