use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

use super::defaults;

/// Per-dimension caps for persona similarity scoring.
/// Each dimension contributes at most its weight; the sum of all weights
/// is the maximum achievable score (clamped to [0, 100] downstream).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherWeights {
    pub device: f64,
    pub age: f64,
    pub client_type: f64,
    pub region: f64,
    pub interest: f64,
}

impl Default for MatcherWeights {
    fn default() -> Self {
        Self {
            device: defaults::DEFAULT_WEIGHT_DEVICE,
            age: defaults::DEFAULT_WEIGHT_AGE,
            client_type: defaults::DEFAULT_WEIGHT_CLIENT_TYPE,
            region: defaults::DEFAULT_WEIGHT_REGION,
            interest: defaults::DEFAULT_WEIGHT_INTEREST,
        }
    }
}

impl MatcherWeights {
    fn each(&self) -> [(&'static str, f64); 5] {
        [
            ("device", self.device),
            ("age", self.age),
            ("client_type", self.client_type),
            ("region", self.region),
            ("interest", self.interest),
        ]
    }
}

/// Persona matcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Scoring weights per dimension.
    pub weights: MatcherWeights,
    /// Personas within this many points of the best score form the
    /// tie-break cluster; selection among them is uniformly random.
    pub tolerance_band: f64,
    /// Minimum score for a persona to be selectable at all. Below this
    /// the fixed default persona is returned instead.
    pub floor_score: f64,
    /// How long a selected persona is reused for the same session (seconds).
    pub session_ttl_secs: u64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            weights: MatcherWeights::default(),
            tolerance_band: defaults::DEFAULT_TOLERANCE_BAND,
            floor_score: defaults::DEFAULT_FLOOR_SCORE,
            session_ttl_secs: defaults::DEFAULT_SESSION_TTL_SECS,
        }
    }
}

impl MatcherConfig {
    /// Weights must be non-negative and finite; the band must be >= 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in self.weights.each() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    name: name.to_string(),
                    value,
                });
            }
        }
        if !self.tolerance_band.is_finite() || self.tolerance_band < 0.0 {
            return Err(ConfigError::InvalidWeight {
                name: "tolerance_band".to_string(),
                value: self.tolerance_band,
            });
        }
        Ok(())
    }
}
