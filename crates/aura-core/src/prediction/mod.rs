//! Prediction result model.
//!
//! A prediction has a categorical part (one label assignment per style
//! axis, each with a probability distribution over its fixed option set)
//! and a continuous part (one bounded value per style channel). Both are
//! produced against the same feature vector so they stay mutually
//! consistent for a request.

mod axes;
mod channels;
mod result;

pub use axes::{AxisPrediction, StyleAxis};
pub use channels::{ChannelPrediction, StyleChannel};
pub use result::PredictionResult;
