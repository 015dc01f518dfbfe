//! Error taxonomy for the Aura engine.
//!
//! These errors only surface from startup-time operations (artifact
//! validation, catalog loading, config parsing). The request path never
//! propagates them; malformed context, model failure, and cache failure
//! all resolve to documented defaults instead.

mod catalog_error;
mod config_error;
mod model_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use model_error::ModelError;

/// Top-level error type aggregating all subsystems.
#[derive(Debug, thiserror::Error)]
pub enum AuraError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias used across the workspace.
pub type AuraResult<T> = Result<T, AuraError>;
