//! Hand-tuned demo artifacts.
//!
//! Deployments without trained artifacts (demos, integration tests, the
//! staging sandbox) still need deterministic, plausible predictions.
//! These weights key a handful of interpretable relationships: mobile
//! leans compact, late hours lean dark, accessibility reduces motion.

use aura_core::features::Feature;
use aura_core::prediction::{StyleAxis, StyleChannel};
use aura_core::FEATURE_COUNT;

use crate::artifacts::{
    AxisWeights, ChannelWeights, ClassifierArtifact, RegressorArtifact, ScalingParams,
};
use crate::predictor::DualPredictor;

fn row(entries: &[(Feature, f64)]) -> Vec<f64> {
    let mut weights = vec![0.0; FEATURE_COUNT];
    for (feature, value) in entries {
        weights[feature.index()] = *value;
    }
    weights
}

/// Build the demo artifact triple.
pub fn demo_artifacts() -> (ClassifierArtifact, RegressorArtifact, ScalingParams) {
    let classifier = ClassifierArtifact {
        axes: vec![
            AxisWeights {
                axis: StyleAxis::Density,
                weights: vec![
                    // compact: small screens, high engagement
                    row(&[(Feature::IsMobile, 2.0), (Feature::EngagementLevel, 1.0)]),
                    // comfortable: the broad middle
                    row(&[(Feature::IsTablet, 1.0)]),
                    // spacious: large desktop viewports
                    row(&[(Feature::IsDesktop, 1.5), (Feature::ViewportArea, 2.0)]),
                ],
                bias: vec![0.0, 0.6, 0.0],
            },
            AxisWeights {
                axis: StyleAxis::Typeface,
                weights: vec![
                    // serif: leisurely weekend reading
                    row(&[(Feature::IsWeekend, 1.2), (Feature::MeanSessionDuration, 1.0)]),
                    // sans: default, boosted on mobile
                    row(&[(Feature::IsMobile, 0.8)]),
                    // mono: dense power-user sessions
                    row(&[(Feature::InteractionCount, 1.5), (Feature::IsDesktop, 0.4)]),
                ],
                bias: vec![0.0, 0.9, -0.4],
            },
            AxisWeights {
                axis: StyleAxis::Theme,
                weights: vec![
                    // light: daytime business use
                    row(&[
                        (Feature::IsBusinessHours, 1.5),
                        (Feature::ActivityIntensity, 0.8),
                    ]),
                    // dark: late hours
                    row(&[(Feature::HourOfDay, 0.14)]),
                    // automatic
                    row(&[]),
                ],
                bias: vec![0.2, -1.4, 0.7],
            },
        ],
    };

    let regressor = RegressorArtifact {
        channels: vec![
            ChannelWeights {
                channel: StyleChannel::FontScale,
                weights: row(&[
                    (Feature::AccessibilityNeed, 0.12),
                    (Feature::IsMobile, 0.05),
                ]),
                bias: 1.0,
                uncertainty: Some(0.25),
            },
            ChannelWeights {
                channel: StyleChannel::SpacingUnit,
                weights: row(&[(Feature::IsDesktop, 1.5), (Feature::IsMobile, -2.0)]),
                bias: 8.0,
                uncertainty: Some(0.2),
            },
            ChannelWeights {
                channel: StyleChannel::AccentHue,
                weights: row(&[
                    (Feature::IsWeekend, 50.0),
                    (Feature::EngagementLevel, -30.0),
                ]),
                bias: 212.0,
                uncertainty: Some(0.35),
            },
            ChannelWeights {
                channel: StyleChannel::AccentSaturation,
                weights: row(&[(Feature::ActivityIntensity, 12.0)]),
                bias: 62.0,
                uncertainty: Some(0.3),
            },
            ChannelWeights {
                channel: StyleChannel::AccentLightness,
                weights: row(&[(Feature::ActivityIntensity, 8.0)]),
                bias: 48.0,
                uncertainty: Some(0.3),
            },
            ChannelWeights {
                channel: StyleChannel::MotionDuration,
                weights: row(&[
                    (Feature::AccessibilityNeed, -180.0),
                    (Feature::EngagementLevel, 40.0),
                ]),
                bias: 180.0,
                uncertainty: Some(0.25),
            },
        ],
    };

    (classifier, regressor, ScalingParams::identity())
}

impl DualPredictor {
    /// A predictor built from the demo artifacts. Infallible: the demo
    /// weights are shape-correct by construction.
    pub fn demo() -> Self {
        let (classifier, regressor, scaling) = demo_artifacts();
        Self::new(classifier, regressor, scaling)
            .expect("demo artifacts are shape-correct")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_artifacts_validate() {
        let (classifier, regressor, scaling) = demo_artifacts();
        classifier.validate().unwrap();
        regressor.validate().unwrap();
        scaling.validate().unwrap();
    }
}
