//! Cross-crate seams.

mod predictor;

pub use predictor::IStylePredictor;
