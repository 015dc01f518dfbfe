//! # aura-model
//!
//! The dual predictor: wraps the two pre-trained models (one classifier
//! over style axes, one regressor over style channels) sharing the same
//! feature schema. Artifacts are plain weight structs deserialized at
//! process startup by a collaborator; inference here is pure arithmetic
//! with no I/O, so a prediction completes in double-digit microseconds.
//!
//! Failure policy: artifact validation happens once at construction.
//! If inference still produces anything non-finite, the fixed fallback
//! prediction is returned; callers never see an error.

pub mod artifacts;
mod classifier;
mod demo;
mod predictor;
mod regressor;

pub use artifacts::{
    AxisWeights, ChannelWeights, ClassifierArtifact, RegressorArtifact, ScalingParams,
};
pub use demo::demo_artifacts;
pub use predictor::{DualPredictor, FallbackPredictor};
