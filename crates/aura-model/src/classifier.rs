//! Categorical inference: per-axis multinomial logistic heads.

use aura_core::prediction::AxisPrediction;
use aura_core::FEATURE_COUNT;

use crate::artifacts::AxisWeights;

/// Numerically stable softmax in place. A degenerate sum collapses to
/// the uniform distribution rather than NaN.
fn softmax(logits: &mut [f64]) {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut sum = 0.0;
    for l in logits.iter_mut() {
        *l = (*l - max).exp();
        sum += *l;
    }
    if sum > 0.0 && sum.is_finite() {
        for l in logits.iter_mut() {
            *l /= sum;
        }
    } else {
        let uniform = 1.0 / logits.len() as f64;
        for l in logits.iter_mut() {
            *l = uniform;
        }
    }
}

/// Run one axis head: logits = Wx + b, softmax, arg-max. Confidence is
/// the winning probability.
pub(crate) fn predict_axis(head: &AxisWeights, x: &[f64; FEATURE_COUNT]) -> AxisPrediction {
    let mut logits: Vec<f64> = head
        .weights
        .iter()
        .zip(head.bias.iter())
        .map(|(row, bias)| row.iter().zip(x.iter()).map(|(w, v)| w * v).sum::<f64>() + bias)
        .collect();
    softmax(&mut logits);

    let winner = logits
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or_else(|| head.axis.fallback_option());
    let confidence = logits[winner];

    AxisPrediction {
        axis: head.axis,
        distribution: logits,
        winner,
        confidence,
    }
}
