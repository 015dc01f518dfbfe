//! Assembles the full feature vector from the per-group extractors.

use aura_core::features::{Feature, INTERACTION_SCALE, SESSION_SCALE_SECS, TENURE_SCALE_DAYS};
use aura_core::{ContextRecord, FeatureVector, FEATURE_COUNT};
use tracing::warn;

use crate::extractors::{composite, device, history, temporal};

/// Normalize a context record into the fixed-length feature vector.
///
/// Never fails: every extractor is total, every field is clipped to its
/// declared range, and a vector that still comes out non-finite is
/// replaced wholesale by the precomputed all-defaults vector.
pub fn normalize(ctx: &ContextRecord) -> FeatureVector {
    let mut values = [0.0; FEATURE_COUNT];

    // Temporal
    values[Feature::HourOfDay.index()] = temporal::hour_of_day(ctx);
    values[Feature::IsWeekend.index()] = temporal::is_weekend(ctx);
    values[Feature::IsBusinessHours.index()] = temporal::is_business_hours(ctx);
    values[Feature::ActivityIntensity.index()] = temporal::activity_intensity(ctx);

    // Device
    let (is_mobile, is_tablet, is_desktop) = device::class_flags(ctx);
    values[Feature::IsMobile.index()] = is_mobile;
    values[Feature::IsTablet.index()] = is_tablet;
    values[Feature::IsDesktop.index()] = is_desktop;
    values[Feature::HasTouch.index()] = device::has_touch(ctx);
    values[Feature::PixelDensity.index()] = device::pixel_density(ctx);
    let (area, aspect, diagonal) = device::geometry(ctx);
    values[Feature::ViewportArea.index()] = area;
    values[Feature::AspectRatio.index()] = aspect;
    values[Feature::ViewportDiagonal.index()] = diagonal;

    // Behavioral aggregates
    values[Feature::SessionDuration.index()] =
        ctx.behavior.session_duration_secs.unwrap_or(0.0).max(0.0) / SESSION_SCALE_SECS;
    values[Feature::InteractionCount.index()] =
        f64::from(ctx.behavior.interaction_count.unwrap_or(0)) / INTERACTION_SCALE;
    values[Feature::TenureDays.index()] =
        ctx.behavior.tenure_days.unwrap_or(0.0).max(0.0) / TENURE_SCALE_DAYS;

    // Historical summaries
    let mean_hist = history::mean_session_duration(ctx);
    let total_hist = history::total_interactions(ctx);
    values[Feature::MeanSessionDuration.index()] = mean_hist;
    values[Feature::TotalInteractions.index()] = total_hist;
    values[Feature::DaysSinceFirst.index()] = history::days_since_first(ctx);

    // Composite
    values[Feature::ConnectionSpeed.index()] = composite::connection_speed(ctx);
    values[Feature::AccessibilityNeed.index()] = composite::accessibility_need(ctx);
    values[Feature::EngagementLevel.index()] =
        composite::engagement_level(ctx, mean_hist, total_hist);

    let vector = FeatureVector::new(values).clipped();
    if vector.is_finite() {
        vector
    } else {
        // Should be unreachable after the clip pass; prediction must
        // never see a non-finite vector.
        warn!("normalized vector still non-finite, using defaults");
        FeatureVector::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_context_yields_schema_defaults_for_history() {
        let v = normalize(&ContextRecord::new());
        assert_eq!(v.get(Feature::MeanSessionDuration), 0.0);
        assert_eq!(v.get(Feature::TotalInteractions), 0.0);
        assert_eq!(v.get(Feature::DaysSinceFirst), 0.0);
    }

    #[test]
    fn boolean_features_are_exact() {
        let v = normalize(&ContextRecord::new().with_viewport(375.0, 812.0).with_touch(true));
        for f in [
            Feature::IsWeekend,
            Feature::IsBusinessHours,
            Feature::IsMobile,
            Feature::IsTablet,
            Feature::IsDesktop,
            Feature::HasTouch,
            Feature::AccessibilityNeed,
        ] {
            let value = v.get(f);
            assert!(value == 0.0 || value == 1.0, "{:?} = {}", f, value);
        }
    }

    #[test]
    fn oversized_behavior_is_clamped() {
        let v = normalize(&ContextRecord::new().with_session(1e12, u32::MAX));
        assert_eq!(v.get(Feature::SessionDuration), 1.0);
        assert_eq!(v.get(Feature::InteractionCount), 1.0);
    }
}
