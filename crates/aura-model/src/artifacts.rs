//! Model weight artifacts.
//!
//! The training pipeline (outside this repository) exports three
//! artifacts: feature scaling parameters, a per-axis multinomial
//! logistic classifier, and a per-channel linear regressor. All are
//! plain serde structs; the loader collaborator deserializes them once
//! at startup and hands them to [`crate::DualPredictor::new`].

use serde::{Deserialize, Serialize};

use aura_core::errors::ModelError;
use aura_core::prediction::{StyleAxis, StyleChannel};
use aura_core::{FeatureVector, FEATURE_COUNT};

/// Feature standardization parameters: `x' = (x - mean) / std`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalingParams {
    pub means: Vec<f64>,
    pub stds: Vec<f64>,
}

impl ScalingParams {
    /// Identity scaling (no-op), used by the demo artifacts.
    pub fn identity() -> Self {
        Self {
            means: vec![0.0; FEATURE_COUNT],
            stds: vec![1.0; FEATURE_COUNT],
        }
    }

    /// Shape and finiteness checks. Zero or negative stds are rejected.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.means.len() != FEATURE_COUNT {
            return Err(ModelError::ShapeMismatch {
                what: "scaling means".to_string(),
                expected: FEATURE_COUNT,
                actual: self.means.len(),
            });
        }
        if self.stds.len() != FEATURE_COUNT {
            return Err(ModelError::ShapeMismatch {
                what: "scaling stds".to_string(),
                expected: FEATURE_COUNT,
                actual: self.stds.len(),
            });
        }
        let finite = self.means.iter().all(|v| v.is_finite())
            && self.stds.iter().all(|v| v.is_finite() && *v > 0.0);
        if !finite {
            return Err(ModelError::NonFiniteWeight {
                what: "scaling params".to_string(),
            });
        }
        Ok(())
    }

    /// Standardize a feature vector.
    pub fn apply(&self, vector: &FeatureVector) -> [f64; FEATURE_COUNT] {
        let mut out = [0.0; FEATURE_COUNT];
        for (i, value) in vector.values().iter().enumerate() {
            out[i] = (value - self.means[i]) / self.stds[i];
        }
        out
    }
}

/// Multinomial logistic weights for one style axis: one weight row and
/// one bias per option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisWeights {
    pub axis: StyleAxis,
    /// One row of `FEATURE_COUNT` weights per option, in option order.
    pub weights: Vec<Vec<f64>>,
    /// One bias per option.
    pub bias: Vec<f64>,
}

impl AxisWeights {
    pub fn validate(&self) -> Result<(), ModelError> {
        let options = self.axis.options().len();
        if self.weights.len() != options {
            return Err(ModelError::ShapeMismatch {
                what: format!("axis {:?} weight rows", self.axis),
                expected: options,
                actual: self.weights.len(),
            });
        }
        if self.bias.len() != options {
            return Err(ModelError::ShapeMismatch {
                what: format!("axis {:?} bias", self.axis),
                expected: options,
                actual: self.bias.len(),
            });
        }
        for row in &self.weights {
            if row.len() != FEATURE_COUNT {
                return Err(ModelError::ShapeMismatch {
                    what: format!("axis {:?} weight row", self.axis),
                    expected: FEATURE_COUNT,
                    actual: row.len(),
                });
            }
        }
        let finite = self
            .weights
            .iter()
            .flatten()
            .chain(self.bias.iter())
            .all(|v| v.is_finite());
        if !finite {
            return Err(ModelError::NonFiniteWeight {
                what: format!("axis {:?}", self.axis),
            });
        }
        Ok(())
    }
}

/// The categorical model: one multinomial head per style axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    pub axes: Vec<AxisWeights>,
}

impl ClassifierArtifact {
    /// Every axis must be present exactly once, in `StyleAxis::ALL`
    /// order, with valid shapes.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.axes.is_empty() {
            return Err(ModelError::EmptyArtifact {
                what: "classifier".to_string(),
            });
        }
        if self.axes.len() != StyleAxis::ALL.len() {
            return Err(ModelError::ShapeMismatch {
                what: "classifier axes".to_string(),
                expected: StyleAxis::ALL.len(),
                actual: self.axes.len(),
            });
        }
        for (expected, head) in StyleAxis::ALL.iter().zip(self.axes.iter()) {
            if head.axis != *expected {
                return Err(ModelError::ShapeMismatch {
                    what: format!("classifier axis order, found {:?}", head.axis),
                    expected: StyleAxis::ALL.len(),
                    actual: self.axes.len(),
                });
            }
            head.validate()?;
        }
        Ok(())
    }
}

/// Linear weights for one continuous style channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelWeights {
    pub channel: StyleChannel,
    pub weights: Vec<f64>,
    pub bias: f64,
    /// Model-reported uncertainty in [0, 1], if the training pipeline
    /// exported one. Confidence is `1 - uncertainty`; absent means the
    /// fixed default confidence.
    pub uncertainty: Option<f64>,
}

impl ChannelWeights {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.weights.len() != FEATURE_COUNT {
            return Err(ModelError::ShapeMismatch {
                what: format!("channel {:?} weights", self.channel),
                expected: FEATURE_COUNT,
                actual: self.weights.len(),
            });
        }
        let finite = self.weights.iter().all(|v| v.is_finite())
            && self.bias.is_finite()
            && self.uncertainty.map_or(true, |u| u.is_finite());
        if !finite {
            return Err(ModelError::NonFiniteWeight {
                what: format!("channel {:?}", self.channel),
            });
        }
        Ok(())
    }
}

/// The continuous model: one linear head per style channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressorArtifact {
    pub channels: Vec<ChannelWeights>,
}

impl RegressorArtifact {
    /// Every channel must be present exactly once, in
    /// `StyleChannel::ALL` order, with valid shapes.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.channels.is_empty() {
            return Err(ModelError::EmptyArtifact {
                what: "regressor".to_string(),
            });
        }
        if self.channels.len() != StyleChannel::ALL.len() {
            return Err(ModelError::ShapeMismatch {
                what: "regressor channels".to_string(),
                expected: StyleChannel::ALL.len(),
                actual: self.channels.len(),
            });
        }
        for (expected, head) in StyleChannel::ALL.iter().zip(self.channels.iter()) {
            if head.channel != *expected {
                return Err(ModelError::ShapeMismatch {
                    what: format!("regressor channel order, found {:?}", head.channel),
                    expected: StyleChannel::ALL.len(),
                    actual: self.channels.len(),
                });
            }
            head.validate()?;
        }
        Ok(())
    }
}
