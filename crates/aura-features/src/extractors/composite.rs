//! Composite features inferred from combinations of other signals.

use aura_core::context::DeviceClass;
use aura_core::features::{INTERACTION_SCALE, SESSION_SCALE_SECS};
use aura_core::ContextRecord;

/// Network speed class in [0, 1]. An explicit connection signal wins;
/// otherwise the class is inferred from the device: mobile devices lean
/// toward slower links, everything else stays at the neutral default.
pub fn connection_speed(ctx: &ContextRecord) -> f64 {
    if let Some(speed) = ctx.behavior.connection {
        return speed.as_feature();
    }
    match ctx.device_class() {
        DeviceClass::Mobile => 0.4,
        DeviceClass::Tablet | DeviceClass::Desktop => 0.5,
    }
}

/// Accessibility-need flag: 1.0 when any explicit accessibility signal
/// (reduced motion, high contrast, screen reader) is present.
pub fn accessibility_need(ctx: &ContextRecord) -> f64 {
    if ctx.needs_accessibility() {
        1.0
    } else {
        0.0
    }
}

/// Engagement level in [0, 1]: a weighted blend of current-session and
/// historical activity. All inputs are pre-scaled to [0, 1].
pub fn engagement_level(ctx: &ContextRecord, mean_hist_duration: f64, total_hist: f64) -> f64 {
    let session = (ctx.behavior.session_duration_secs.unwrap_or(0.0).max(0.0)
        / SESSION_SCALE_SECS)
        .min(1.0);
    let interactions = (f64::from(ctx.behavior.interaction_count.unwrap_or(0))
        / INTERACTION_SCALE)
        .min(1.0);
    let blend = 0.3 * session
        + 0.3 * interactions
        + 0.2 * mean_hist_duration.clamp(0.0, 1.0)
        + 0.2 * total_hist.clamp(0.0, 1.0);
    blend.clamp(0.0, 1.0)
}
