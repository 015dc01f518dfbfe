//! # aura-features
//!
//! Feature normalization: converts a raw [`ContextRecord`] into the
//! fixed-length [`FeatureVector`] defined by the schema in `aura-core`.
//! Total by construction: every extractor has a documented default for
//! every possible absence, and the normalizer never fails on malformed
//! input.
//!
//! [`ContextRecord`]: aura_core::ContextRecord
//! [`FeatureVector`]: aura_core::FeatureVector

pub mod extractors;
mod normalizer;

pub use normalizer::normalize;
