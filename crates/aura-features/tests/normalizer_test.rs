use aura_core::context::{AccessibilitySignals, SessionSummary};
use aura_core::features::Feature;
use aura_core::{ContextRecord, FeatureVector};
use aura_features::normalize;
use chrono::NaiveDateTime;

fn local(ts: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap()
}

#[test]
fn desktop_afternoon_scenario() {
    // 2024-06-05 is a Wednesday.
    let ctx = ContextRecord::new()
        .with_viewport(1920.0, 1080.0)
        .with_touch(false)
        .with_local_time(local("2024-06-05 14:30:00"));

    let v = normalize(&ctx);
    assert_eq!(v.get(Feature::IsDesktop), 1.0);
    assert_eq!(v.get(Feature::IsMobile), 0.0);
    assert_eq!(v.get(Feature::IsTablet), 0.0);
    assert_eq!(v.get(Feature::IsBusinessHours), 1.0);
    assert_eq!(v.get(Feature::HasTouch), 0.0);
    assert_eq!(v.get(Feature::HourOfDay), 14.0);
}

#[test]
fn mobile_night_scenario() {
    let ctx = ContextRecord::new()
        .with_viewport(375.0, 812.0)
        .with_touch(true)
        .with_local_time(local("2024-06-05 23:10:00"));

    let v = normalize(&ctx);
    assert_eq!(v.get(Feature::IsMobile), 1.0);
    assert_eq!(v.get(Feature::HasTouch), 1.0);
    assert_eq!(v.get(Feature::IsBusinessHours), 0.0);
    // Exactly one device-class flag set.
    let class_sum =
        v.get(Feature::IsMobile) + v.get(Feature::IsTablet) + v.get(Feature::IsDesktop);
    assert_eq!(class_sum, 1.0);
}

#[test]
fn fully_empty_context_is_valid() {
    let v = normalize(&ContextRecord::new());
    assert!(v.is_finite());
    assert!(v.is_within_bounds());
    // Desktop default assumption.
    assert_eq!(v.get(Feature::IsDesktop), 1.0);
    assert_eq!(v.get(Feature::HourOfDay), 12.0);
}

#[test]
fn negative_viewport_falls_back_to_geometry_defaults() {
    let ctx = ContextRecord::new().with_viewport(-500.0, -200.0);
    let v = normalize(&ctx);
    assert!(v.is_finite());
    assert!(v.is_within_bounds());
    assert_eq!(
        v.get(Feature::AspectRatio),
        Feature::AspectRatio.spec().default
    );
}

#[test]
fn absurd_pixel_ratio_is_clamped() {
    let v = normalize(&ContextRecord::new().with_pixel_ratio(80.0));
    assert_eq!(v.get(Feature::PixelDensity), 4.0);
    let v = normalize(&ContextRecord::new().with_pixel_ratio(0.01));
    assert_eq!(v.get(Feature::PixelDensity), 0.5);
}

#[test]
fn malformed_history_does_not_fail_the_vector() {
    let ctx = ContextRecord::new().with_history(vec![SessionSummary {
        duration_secs: f64::NAN,
        interactions: 0,
        page_views: 0,
    }]);
    let v = normalize(&ctx);
    assert!(v.is_finite());
    assert!(v.is_within_bounds());
}

#[test]
fn accessibility_signal_sets_need_flag() {
    let ctx = ContextRecord::new().with_accessibility(AccessibilitySignals {
        high_contrast: true,
        ..Default::default()
    });
    assert_eq!(normalize(&ctx).get(Feature::AccessibilityNeed), 1.0);
}

#[test]
fn normalize_is_deterministic() {
    let ctx = ContextRecord::new()
        .with_viewport(1280.0, 720.0)
        .with_session(300.0, 42)
        .with_local_time(local("2024-06-05 09:00:00"));
    assert_eq!(normalize(&ctx), normalize(&ctx));
}

#[test]
fn defaults_vector_matches_empty_context_where_documented() {
    // The all-defaults vector and a normalized empty context agree on
    // every absence-driven position.
    let defaults = FeatureVector::defaults();
    let v = normalize(&ContextRecord::new());
    for f in [
        Feature::HourOfDay,
        Feature::IsWeekend,
        Feature::IsBusinessHours,
        Feature::IsMobile,
        Feature::IsTablet,
        Feature::IsDesktop,
        Feature::HasTouch,
        Feature::PixelDensity,
        Feature::SessionDuration,
        Feature::InteractionCount,
        Feature::TenureDays,
        Feature::ConnectionSpeed,
        Feature::AccessibilityNeed,
        Feature::MeanSessionDuration,
        Feature::TotalInteractions,
        Feature::DaysSinceFirst,
        Feature::EngagementLevel,
    ] {
        assert_eq!(v.get(f), defaults.get(f), "{:?}", f);
    }
}
