//! # aura-core
//!
//! Foundation crate for the Aura adaptive presentation engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod context;
pub mod errors;
pub mod features;
pub mod persona;
pub mod prediction;
pub mod telemetry;
pub mod tokens;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AuraConfig;
pub use context::{ContextRecord, DeviceClass};
pub use errors::{AuraError, AuraResult};
pub use features::{Feature, FeatureVector, FEATURE_COUNT, SCHEMA_VERSION};
pub use persona::{Persona, VisualPreferences};
pub use prediction::{PredictionResult, StyleAxis, StyleChannel};
pub use tokens::DesignTokenBundle;
pub use traits::IStylePredictor;
