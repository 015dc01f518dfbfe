//! # aura-cache
//!
//! Prediction memoization keyed by context fingerprint, with TTL tiered
//! by prediction confidence and LRU capacity bounds. Purely a
//! latency/cost layer: removing it changes model-invocation volume,
//! never results.

mod cache;
mod fingerprint;

pub use cache::PredictionCache;
pub use fingerprint::Fingerprint;
