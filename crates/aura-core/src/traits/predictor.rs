use crate::features::FeatureVector;
use crate::prediction::PredictionResult;

/// Style prediction over a normalized feature vector.
///
/// Implementations must be total: on any internal failure they return
/// `PredictionResult::fallback()` instead of erroring, so the request
/// path never blocks on a prediction failure.
pub trait IStylePredictor: Send + Sync {
    fn predict(&self, vector: &FeatureVector) -> PredictionResult;
}
