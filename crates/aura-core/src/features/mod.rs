//! Feature vector schema.
//!
//! The schema fixes the length, order, valid range, and absent-field
//! default of every feature. Version bumps change `SCHEMA_VERSION`;
//! within a version the layout is frozen so that cached predictions and
//! model artifacts stay mutually consistent.

mod schema;
mod vector;

pub use schema::{Feature, FeatureSpec, FEATURE_COUNT, SCHEMA, SCHEMA_VERSION};
pub use vector::FeatureVector;

/// Divisor scaling raw viewport area (px²) into [0, 1].
/// 4096×4096 is treated as the largest plausible viewport.
pub const AREA_SCALE: f64 = 4096.0 * 4096.0;

/// Divisor scaling raw viewport diagonal (px) into [0, 1].
/// Diagonal of a 4096×4096 viewport.
pub const DIAGONAL_SCALE: f64 = 5792.6;

/// Divisor scaling session durations (seconds) into [0, 1]. One hour.
pub const SESSION_SCALE_SECS: f64 = 3600.0;

/// Divisor scaling interaction counts into [0, 1].
pub const INTERACTION_SCALE: f64 = 500.0;

/// Divisor scaling tenure (days) into [0, 1]. One year.
pub const TENURE_SCALE_DAYS: f64 = 365.0;
