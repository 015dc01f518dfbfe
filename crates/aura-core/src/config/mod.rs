//! Engine configuration.
//!
//! Per-subsystem config structs with TOML overrides; every field has a
//! documented default in [`defaults`]. Scoring weights, tolerance band,
//! and cache tiers are deliberately configuration rather than constants:
//! they are product tuning knobs, not algorithmic invariants.

pub mod defaults;

mod cache_config;
mod matcher_config;

pub use cache_config::CacheConfig;
pub use matcher_config::{MatcherConfig, MatcherWeights};

use serde::{Deserialize, Serialize};

use crate::errors::{AuraResult, ConfigError};

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuraConfig {
    pub cache: CacheConfig,
    pub matcher: MatcherConfig,
}

impl AuraConfig {
    /// Parse from a TOML string. Missing sections and fields fall back
    /// to their defaults; the parsed config is validated before return.
    pub fn from_toml(input: &str) -> AuraResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all subsystem configs.
    pub fn validate(&self) -> AuraResult<()> {
        self.cache.validate()?;
        self.matcher.validate()?;
        Ok(())
    }
}
