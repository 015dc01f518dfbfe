//! The dual predictor: both models run against the same vector.

use tracing::warn;

use aura_core::features::SCHEMA_VERSION;
use aura_core::prediction::PredictionResult;
use aura_core::{AuraResult, FeatureVector, IStylePredictor};

use crate::artifacts::{ClassifierArtifact, RegressorArtifact, ScalingParams};
use crate::{classifier, regressor};

/// Wraps the two pre-trained models sharing one feature schema.
///
/// Construction validates all shapes once, so the request-path
/// `predict` is infallible arithmetic. Both models always see the same
/// standardized vector, keeping the categorical and continuous parts
/// mutually consistent for a request.
pub struct DualPredictor {
    classifier: ClassifierArtifact,
    regressor: RegressorArtifact,
    scaling: ScalingParams,
}

impl DualPredictor {
    /// Build from loaded artifacts, validating shapes against the
    /// current feature schema.
    pub fn new(
        classifier: ClassifierArtifact,
        regressor: RegressorArtifact,
        scaling: ScalingParams,
    ) -> AuraResult<Self> {
        classifier.validate()?;
        regressor.validate()?;
        scaling.validate()?;
        Ok(Self {
            classifier,
            regressor,
            scaling,
        })
    }

    /// Run both models. Any non-finite outcome degrades to the fixed
    /// fallback result instead of erroring.
    pub fn predict(&self, vector: &FeatureVector) -> PredictionResult {
        let x = self.scaling.apply(vector);
        if x.iter().any(|v| !v.is_finite()) {
            warn!("standardized vector non-finite, returning fallback");
            return PredictionResult::fallback();
        }

        let axes: Vec<_> = self
            .classifier
            .axes
            .iter()
            .map(|head| classifier::predict_axis(head, &x))
            .collect();
        let channels: Vec<_> = self
            .regressor
            .channels
            .iter()
            .map(|head| regressor::predict_channel(head, &x))
            .collect();

        let finite = axes
            .iter()
            .all(|a| a.confidence.is_finite() && a.distribution.iter().all(|p| p.is_finite()))
            && channels
                .iter()
                .all(|c| c.value.is_finite() && c.confidence.is_finite());
        if !finite {
            warn!("model emitted non-finite prediction, returning fallback");
            return PredictionResult::fallback();
        }

        PredictionResult {
            axes,
            channels,
            schema_version: SCHEMA_VERSION,
            degraded: false,
        }
    }
}

impl IStylePredictor for DualPredictor {
    fn predict(&self, vector: &FeatureVector) -> PredictionResult {
        DualPredictor::predict(self, vector)
    }
}

/// Always returns the fixed fallback. Stands in when model artifacts
/// are unavailable at startup; the rule-based persona layer then
/// carries the whole presentation.
#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackPredictor;

impl IStylePredictor for FallbackPredictor {
    fn predict(&self, _vector: &FeatureVector) -> PredictionResult {
        PredictionResult::fallback()
    }
}
