use serde::{Deserialize, Serialize};

use super::schema::{Feature, FEATURE_COUNT, SCHEMA};

/// Fixed-length numeric encoding of a context record.
///
/// Length and field order are fixed by [`super::SCHEMA_VERSION`]. Built
/// once per request by the normalizer and never mutated afterward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Wrap raw values. Callers are expected to clip first; see
    /// [`FeatureVector::clipped`].
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    /// The precomputed all-defaults vector, used whenever normalization
    /// cannot produce a valid result.
    pub fn defaults() -> Self {
        let mut values = [0.0; FEATURE_COUNT];
        for (v, spec) in values.iter_mut().zip(SCHEMA.iter()) {
            *v = spec.default;
        }
        Self(values)
    }

    /// Value at a schema position.
    pub fn get(&self, feature: Feature) -> f64 {
        self.0[feature.index()]
    }

    /// All values in schema order.
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    /// Clip every value into its declared range. Non-finite values
    /// collapse to the feature default.
    pub fn clipped(mut self) -> Self {
        for (v, spec) in self.0.iter_mut().zip(SCHEMA.iter()) {
            if !v.is_finite() {
                *v = spec.default;
            } else {
                *v = v.clamp(spec.min, spec.max);
            }
        }
        self
    }

    /// Whether every value is finite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    /// Whether every value lies within its declared range.
    pub fn is_within_bounds(&self) -> bool {
        self.0
            .iter()
            .zip(SCHEMA.iter())
            .all(|(v, spec)| *v >= spec.min && *v <= spec.max)
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::defaults()
    }
}
