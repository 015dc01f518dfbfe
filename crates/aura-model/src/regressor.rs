//! Continuous inference: per-channel linear heads with range clamping.

use aura_core::config::defaults::DEFAULT_REGRESSION_CONFIDENCE;
use aura_core::prediction::ChannelPrediction;
use aura_core::FEATURE_COUNT;

use crate::artifacts::ChannelWeights;

/// Run one channel head: value = clamp(wx + b). Confidence comes from
/// the artifact's reported uncertainty, or the fixed default when the
/// training pipeline did not export one.
pub(crate) fn predict_channel(head: &ChannelWeights, x: &[f64; FEATURE_COUNT]) -> ChannelPrediction {
    let raw: f64 = head
        .weights
        .iter()
        .zip(x.iter())
        .map(|(w, v)| w * v)
        .sum::<f64>()
        + head.bias;

    let confidence = head
        .uncertainty
        .map(|u| (1.0 - u).clamp(0.0, 1.0))
        .unwrap_or(DEFAULT_REGRESSION_CONFIDENCE);

    ChannelPrediction {
        channel: head.channel,
        value: head.channel.clamp_value(raw),
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_core::prediction::StyleChannel;

    fn head(bias: f64, uncertainty: Option<f64>) -> ChannelWeights {
        ChannelWeights {
            channel: StyleChannel::FontScale,
            weights: vec![0.0; FEATURE_COUNT],
            bias,
            uncertainty,
        }
    }

    #[test]
    fn output_is_clamped_to_channel_range() {
        let x = [0.0; FEATURE_COUNT];
        assert_eq!(predict_channel(&head(99.0, None), &x).value, 1.3);
        assert_eq!(predict_channel(&head(-99.0, None), &x).value, 0.85);
    }

    #[test]
    fn uncertainty_maps_to_confidence() {
        let x = [0.0; FEATURE_COUNT];
        let p = predict_channel(&head(1.0, Some(0.25)), &x);
        assert!((p.confidence - 0.75).abs() < 1e-12);
    }

    #[test]
    fn missing_uncertainty_uses_default_confidence() {
        let x = [0.0; FEATURE_COUNT];
        let p = predict_channel(&head(1.0, None), &x);
        assert_eq!(p.confidence, DEFAULT_REGRESSION_CONFIDENCE);
    }
}
