//! Historical-summary features. Absent or empty history emits zeros
//! rather than failing the vector.

use aura_core::features::{INTERACTION_SCALE, SESSION_SCALE_SECS, TENURE_SCALE_DAYS};
use aura_core::ContextRecord;

/// Mean past-session duration, scaled into [0, 1].
pub fn mean_session_duration(ctx: &ContextRecord) -> f64 {
    let Some(history) = ctx.history.as_ref().filter(|h| !h.is_empty()) else {
        return 0.0;
    };
    let sum: f64 = history
        .iter()
        .map(|s| s.duration_secs.max(0.0))
        .sum();
    (sum / history.len() as f64) / SESSION_SCALE_SECS
}

/// Total past interactions, scaled into [0, 1].
pub fn total_interactions(ctx: &ContextRecord) -> f64 {
    let Some(history) = ctx.history.as_ref().filter(|h| !h.is_empty()) else {
        return 0.0;
    };
    let total: u64 = history.iter().map(|s| u64::from(s.interactions)).sum();
    total as f64 / INTERACTION_SCALE
}

/// Days since the first recorded session, scaled into [0, 1]. The
/// summaries carry no dates, so the visitor's tenure supplies the span;
/// without history the feature is zero regardless of tenure.
pub fn days_since_first(ctx: &ContextRecord) -> f64 {
    if ctx.history.as_ref().map_or(true, |h| h.is_empty()) {
        return 0.0;
    }
    let days = ctx.behavior.tenure_days.unwrap_or(0.0).max(0.0);
    days / TENURE_SCALE_DAYS
}
