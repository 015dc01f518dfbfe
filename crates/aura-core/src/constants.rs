//! Shared constants for the Aura presentation engine.

/// Aura engine version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Viewport width assumed when the context carries no viewport (px).
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1366.0;

/// Viewport height assumed when the context carries no viewport (px).
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 768.0;

/// Confidence assigned to degraded/fallback predictions.
pub const MIN_CONFIDENCE: f64 = 0.05;

// ---- Performance Targets ----

/// Target: full personalize call (normalize + cache + compose) in <100ms.
pub const PERF_PERSONALIZE_MS: u64 = 100;

/// Target: one dual-model prediction in double-digit milliseconds.
pub const PERF_PREDICT_MS: u64 = 50;
