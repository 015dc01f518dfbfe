/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {reason}")]
    Parse { reason: String },

    #[error("non-monotone TTL tiers: {reason}")]
    NonMonotoneTiers { reason: String },

    #[error("invalid weight {name}: {value}")]
    InvalidWeight { name: String, value: f64 },
}
