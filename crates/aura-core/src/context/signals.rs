use serde::{Deserialize, Serialize};

/// Inferred connection speed class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionSpeed {
    Slow,
    Moderate,
    Fast,
}

impl ConnectionSpeed {
    /// Numeric encoding used in the feature vector.
    pub fn as_feature(self) -> f64 {
        match self {
            Self::Slow => 0.0,
            Self::Moderate => 0.5,
            Self::Fast => 1.0,
        }
    }
}

/// Explicit accessibility signals from the client.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilitySignals {
    /// `prefers-reduced-motion` media query.
    pub reduced_motion: bool,
    /// `prefers-contrast: more` media query.
    pub high_contrast: bool,
    /// Screen reader heuristic from the capture layer.
    pub screen_reader: bool,
}

/// Behavioral aggregates for the current visit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorInfo {
    /// Seconds since the session started.
    pub session_duration_secs: Option<f64>,
    /// Interactions (clicks, scrolls, inputs) this session.
    pub interaction_count: Option<u32>,
    /// Days since the visitor was first seen.
    pub tenure_days: Option<f64>,
    /// Inferred connection speed.
    pub connection: Option<ConnectionSpeed>,
    /// Explicit accessibility signals.
    pub accessibility: AccessibilitySignals,
}

/// One summarized past session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionSummary {
    pub duration_secs: f64,
    pub interactions: u32,
    pub page_views: u32,
}
