// Single source of truth for all default values.

// --- Prediction cache ---
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;
pub const DEFAULT_TTL_HIGH_SECS: u64 = 900; // 15 minutes
pub const DEFAULT_TTL_ELEVATED_SECS: u64 = 600; // 10 minutes
pub const DEFAULT_TTL_MODERATE_SECS: u64 = 360; // 6 minutes
pub const DEFAULT_TTL_FLOOR_SECS: u64 = 180; // 3 minutes
pub const DEFAULT_CONF_HIGH: f64 = 0.85;
pub const DEFAULT_CONF_ELEVATED: f64 = 0.60;
pub const DEFAULT_CONF_MODERATE: f64 = 0.40;

// --- Persona matcher ---
pub const DEFAULT_WEIGHT_DEVICE: f64 = 25.0;
pub const DEFAULT_WEIGHT_AGE: f64 = 25.0;
pub const DEFAULT_WEIGHT_CLIENT_TYPE: f64 = 20.0;
pub const DEFAULT_WEIGHT_REGION: f64 = 15.0;
pub const DEFAULT_WEIGHT_INTEREST: f64 = 15.0;
pub const DEFAULT_TOLERANCE_BAND: f64 = 5.0;
pub const DEFAULT_FLOOR_SCORE: f64 = 20.0;
pub const DEFAULT_SESSION_TTL_SECS: u64 = 86_400; // 24 hours

// --- Dual predictor ---
pub const DEFAULT_REGRESSION_CONFIDENCE: f64 = 0.6;
