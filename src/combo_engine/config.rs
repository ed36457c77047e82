//! Combo generation settings.
//!
//! Precedence (lowest to highest):
//! 1. Programmatic defaults (`min_size = 1`, `max_size = 20`, weighted)
//! 2. `combo.json` in the working directory (optional)
//! 3. Environment variables with the `TRICK_COMBO_` prefix

use std::path::Path;

use figment::providers::{Env, Format, Json, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::combo_engine::models::SamplingStrategy;

pub const CONFIG_FILE: &str = "combo.json";
pub const ENV_PREFIX: &str = "TRICK_COMBO_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to extract combo configuration: {0}")]
    Extract(#[from] figment::Error),

    #[error("invalid min_size: {0}. Must be at least 1")]
    InvalidMinSize(usize),

    #[error("invalid size bounds: min_size ({min}) must not exceed max_size ({max})")]
    InvalidBounds { min: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboConfig {
    /// Smallest combo a caller may request.
    pub min_size: usize,
    /// Largest combo a caller may request.
    pub max_size: usize,
    /// Strategy used by `generate_simple_combo`.
    pub default_strategy: SamplingStrategy,
}

impl Default for ComboConfig {
    fn default() -> Self {
        ComboConfig {
            min_size: 1,
            max_size: 20,
            default_strategy: SamplingStrategy::Weighted,
        }
    }
}

impl ComboConfig {
    /// Load defaults, then `combo.json`, then `TRICK_COMBO_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(
            Figment::new()
                .merge(Serialized::defaults(ComboConfig::default()))
                .merge(Json::file(CONFIG_FILE))
                .merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    /// Load defaults overlaid with one specific JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::extract(
            Figment::new()
                .merge(Serialized::defaults(ComboConfig::default()))
                .merge(Json::file(path.as_ref())),
        )
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: ComboConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_size == 0 {
            return Err(ConfigError::InvalidMinSize(self.min_size));
        }
        if self.min_size > self.max_size {
            return Err(ConfigError::InvalidBounds { min: self.min_size, max: self.max_size });
        }
        Ok(())
    }
}
