use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::MIN_CONFIDENCE;
use crate::features::SCHEMA_VERSION;

use super::axes::{AxisPrediction, StyleAxis};
use super::channels::{ChannelPrediction, StyleChannel};

/// Immutable output of one dual-model prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionResult {
    /// One entry per style axis, in `StyleAxis::ALL` order.
    pub axes: Vec<AxisPrediction>,
    /// One entry per style channel, in `StyleChannel::ALL` order.
    pub channels: Vec<ChannelPrediction>,
    /// Feature schema version the prediction was produced against.
    pub schema_version: u32,
    /// True when this is the fixed fallback rather than a model output.
    pub degraded: bool,
}

impl PredictionResult {
    /// The documented safe default: every axis at its fallback option
    /// with a uniform distribution, every channel at its range midpoint,
    /// minimal confidence throughout.
    pub fn fallback() -> Self {
        let axes = StyleAxis::ALL
            .iter()
            .map(|&axis| {
                let n = axis.options().len();
                AxisPrediction {
                    axis,
                    distribution: vec![1.0 / n as f64; n],
                    winner: axis.fallback_option(),
                    confidence: MIN_CONFIDENCE,
                }
            })
            .collect();
        let channels = StyleChannel::ALL
            .iter()
            .map(|&channel| ChannelPrediction {
                channel,
                value: channel.midpoint(),
                confidence: MIN_CONFIDENCE,
            })
            .collect();
        Self {
            axes,
            channels,
            schema_version: SCHEMA_VERSION,
            degraded: true,
        }
    }

    /// Look up one axis prediction.
    pub fn axis(&self, axis: StyleAxis) -> Option<&AxisPrediction> {
        self.axes.iter().find(|a| a.axis == axis)
    }

    /// Look up one channel prediction.
    pub fn channel(&self, channel: StyleChannel) -> Option<&ChannelPrediction> {
        self.channels.iter().find(|c| c.channel == channel)
    }

    /// Mean confidence across all axes and channels. Drives the cache
    /// TTL tier for this prediction.
    pub fn overall_confidence(&self) -> f64 {
        let n = self.axes.len() + self.channels.len();
        if n == 0 {
            return MIN_CONFIDENCE;
        }
        let sum: f64 = self
            .axes
            .iter()
            .map(|a| a.confidence)
            .chain(self.channels.iter().map(|c| c.confidence))
            .sum();
        (sum / n as f64).clamp(0.0, 1.0)
    }
}
