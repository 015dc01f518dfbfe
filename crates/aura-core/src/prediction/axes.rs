use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Categorical style axes predicted by the classifier. Each axis
/// resolves to exactly one of its enumerated options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum StyleAxis {
    Density,
    Typeface,
    Theme,
}

impl StyleAxis {
    /// All axes, in the order the classifier emits them.
    pub const ALL: [StyleAxis; 3] = [Self::Density, Self::Typeface, Self::Theme];

    /// The fixed option vocabulary for this axis.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            Self::Density => &["compact", "comfortable", "spacious"],
            Self::Typeface => &["serif", "sans", "mono"],
            Self::Theme => &["light", "dark", "automatic"],
        }
    }

    /// Index of the option used when the model is unavailable.
    pub fn fallback_option(self) -> usize {
        match self {
            Self::Density => 1,  // comfortable
            Self::Typeface => 1, // sans
            Self::Theme => 2,    // automatic
        }
    }
}

/// One axis of the categorical prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AxisPrediction {
    pub axis: StyleAxis,
    /// Probability per option, in `StyleAxis::options` order. Sums to ~1.
    pub distribution: Vec<f64>,
    /// Index of the winning option (arg-max of `distribution`).
    pub winner: usize,
    /// Winning probability.
    pub confidence: f64,
}

impl AxisPrediction {
    /// Label of the winning option.
    pub fn winner_label(&self) -> &'static str {
        self.axis.options()[self.winner]
    }
}
