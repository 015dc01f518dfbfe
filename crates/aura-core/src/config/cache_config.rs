use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

use super::defaults;

/// Prediction cache configuration.
///
/// TTL is tiered by prediction confidence: the more confident a
/// prediction, the longer it may be served from cache before a refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of cached predictions (LRU beyond this).
    /// Zero disables caching entirely.
    pub capacity: u64,
    /// TTL for entries at or above `conf_high` (seconds).
    pub ttl_high_secs: u64,
    /// TTL for entries at or above `conf_elevated` (seconds).
    pub ttl_elevated_secs: u64,
    /// TTL for entries at or above `conf_moderate` (seconds).
    pub ttl_moderate_secs: u64,
    /// TTL for everything below `conf_moderate` (seconds).
    pub ttl_floor_secs: u64,
    /// High-confidence threshold.
    pub conf_high: f64,
    /// Elevated-confidence threshold.
    pub conf_elevated: f64,
    /// Moderate-confidence threshold.
    pub conf_moderate: f64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::DEFAULT_CACHE_CAPACITY,
            ttl_high_secs: defaults::DEFAULT_TTL_HIGH_SECS,
            ttl_elevated_secs: defaults::DEFAULT_TTL_ELEVATED_SECS,
            ttl_moderate_secs: defaults::DEFAULT_TTL_MODERATE_SECS,
            ttl_floor_secs: defaults::DEFAULT_TTL_FLOOR_SECS,
            conf_high: defaults::DEFAULT_CONF_HIGH,
            conf_elevated: defaults::DEFAULT_CONF_ELEVATED,
            conf_moderate: defaults::DEFAULT_CONF_MODERATE,
        }
    }
}

impl CacheConfig {
    /// Check tier monotonicity: higher confidence must never yield a
    /// shorter TTL, and thresholds must be strictly descending.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ttl_high_secs < self.ttl_elevated_secs
            || self.ttl_elevated_secs < self.ttl_moderate_secs
            || self.ttl_moderate_secs < self.ttl_floor_secs
        {
            return Err(ConfigError::NonMonotoneTiers {
                reason: format!(
                    "TTLs must be descending by tier: {} >= {} >= {} >= {}",
                    self.ttl_high_secs,
                    self.ttl_elevated_secs,
                    self.ttl_moderate_secs,
                    self.ttl_floor_secs
                ),
            });
        }
        if self.conf_high <= self.conf_elevated || self.conf_elevated <= self.conf_moderate {
            return Err(ConfigError::NonMonotoneTiers {
                reason: format!(
                    "confidence thresholds must be strictly descending: {} > {} > {}",
                    self.conf_high, self.conf_elevated, self.conf_moderate
                ),
            });
        }
        Ok(())
    }
}
