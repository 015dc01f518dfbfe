use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Continuous style channels predicted by the regressor. Every value is
/// clamped to its declared range before leaving the predictor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StyleChannel {
    FontScale,
    SpacingUnit,
    AccentHue,
    AccentSaturation,
    AccentLightness,
    MotionDuration,
}

impl StyleChannel {
    /// All channels, in the order the regressor emits them.
    pub const ALL: [StyleChannel; 6] = [
        Self::FontScale,
        Self::SpacingUnit,
        Self::AccentHue,
        Self::AccentSaturation,
        Self::AccentLightness,
        Self::MotionDuration,
    ];

    /// Declared valid range (inclusive).
    pub fn range(self) -> (f64, f64) {
        match self {
            Self::FontScale => (0.85, 1.3),
            Self::SpacingUnit => (4.0, 12.0),        // px
            Self::AccentHue => (0.0, 360.0),         // degrees
            Self::AccentSaturation => (0.0, 100.0),  // percent
            Self::AccentLightness => (20.0, 80.0),   // percent
            Self::MotionDuration => (0.0, 400.0),    // ms
        }
    }

    /// Middle of the declared range, used for fallback predictions.
    pub fn midpoint(self) -> f64 {
        let (lo, hi) = self.range();
        (lo + hi) / 2.0
    }

    /// Clamp a raw model output into the declared range. Non-finite
    /// outputs collapse to the midpoint.
    pub fn clamp_value(self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.midpoint();
        }
        let (lo, hi) = self.range();
        value.clamp(lo, hi)
    }
}

/// One channel of the continuous prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChannelPrediction {
    pub channel: StyleChannel,
    /// Value within the channel's declared range.
    pub value: f64,
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_value_handles_non_finite() {
        let c = StyleChannel::FontScale;
        assert_eq!(c.clamp_value(f64::NAN), c.midpoint());
        assert_eq!(c.clamp_value(f64::NEG_INFINITY), c.midpoint());
        assert_eq!(c.clamp_value(10.0), 1.3);
        assert_eq!(c.clamp_value(0.0), 0.85);
    }
}
