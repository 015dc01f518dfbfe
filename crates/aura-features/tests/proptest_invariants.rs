//! Property-based tests for normalizer invariants.
//!
//! Uses proptest to fuzz-verify:
//!   - every normalized vector is finite and within schema bounds
//!   - boolean-origin features are exactly 0.0 or 1.0
//!   - device-class flags are mutually exclusive
//!   - normalization is total over arbitrary (including hostile) contexts

use proptest::prelude::*;

use aura_core::context::{AccessibilitySignals, ConnectionSpeed, SessionSummary};
use aura_core::features::{Feature, SCHEMA};
use aura_core::ContextRecord;
use aura_features::normalize;
use chrono::{NaiveDate, NaiveDateTime};

/// Arbitrary, possibly hostile context: dimensions may be negative,
/// zero, or absurdly large; every optional field may be absent.
fn arb_context() -> impl Strategy<Value = ContextRecord> {
    (
        prop::option::of((0i64..700_000, 0u32..86_400)),
        prop::option::of((-1e6f64..1e6, -1e6f64..1e6)),
        prop::option::of(any::<bool>()),
        prop::option::of(-10.0f64..100.0),
        prop::option::of((0f64..1e7, 0u32..100_000)),
        prop::option::of(-100.0f64..10_000.0),
        prop::option::of(prop::sample::select(vec![
            ConnectionSpeed::Slow,
            ConnectionSpeed::Moderate,
            ConnectionSpeed::Fast,
        ])),
        any::<(bool, bool, bool)>(),
        prop::option::of(prop::collection::vec(
            (-1e5f64..1e5, 0u32..10_000, 0u32..1_000),
            0..8,
        )),
    )
        .prop_map(
            |(ts, viewport, touch, ratio, session, tenure, connection, a11y, history)| {
                let mut ctx = ContextRecord::new();
                if let Some((days, secs)) = ts {
                    let date = NaiveDate::from_num_days_from_ce_opt(days as i32)
                        .unwrap_or_else(|| NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
                    let time = chrono::NaiveTime::from_num_seconds_from_midnight_opt(secs, 0)
                        .unwrap_or_default();
                    ctx = ctx.with_local_time(NaiveDateTime::new(date, time));
                }
                if let Some((w, h)) = viewport {
                    ctx = ctx.with_viewport(w, h);
                }
                if let Some(t) = touch {
                    ctx = ctx.with_touch(t);
                }
                if let Some(r) = ratio {
                    ctx = ctx.with_pixel_ratio(r);
                }
                if let Some((dur, count)) = session {
                    ctx = ctx.with_session(dur, count);
                }
                if let Some(days) = tenure {
                    ctx = ctx.with_tenure_days(days);
                }
                if let Some(speed) = connection {
                    ctx = ctx.with_connection(speed);
                }
                let (reduced_motion, high_contrast, screen_reader) = a11y;
                ctx = ctx.with_accessibility(AccessibilitySignals {
                    reduced_motion,
                    high_contrast,
                    screen_reader,
                });
                if let Some(sessions) = history {
                    ctx = ctx.with_history(
                        sessions
                            .into_iter()
                            .map(|(duration_secs, interactions, page_views)| SessionSummary {
                                duration_secs,
                                interactions,
                                page_views,
                            })
                            .collect(),
                    );
                }
                ctx
            },
        )
}

proptest! {
    /// REGRESSION GATE: every normalized vector is finite and within
    /// the declared schema bounds, for any context whatsoever.
    #[test]
    fn regression_gate_vector_always_valid(ctx in arb_context()) {
        let v = normalize(&ctx);
        prop_assert!(v.is_finite());
        prop_assert!(v.is_within_bounds());
        for (value, spec) in v.values().iter().zip(SCHEMA.iter()) {
            prop_assert!(
                *value >= spec.min && *value <= spec.max,
                "{} = {} outside [{}, {}]",
                spec.name, value, spec.min, spec.max
            );
        }
    }

    /// Boolean-origin features are exactly 0.0 or 1.0.
    #[test]
    fn prop_boolean_features_exact(ctx in arb_context()) {
        let v = normalize(&ctx);
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
            prop_assert!(value == 0.0 || value == 1.0, "{:?} = {}", f, value);
        }
    }

    /// Exactly one device-class flag is set.
    #[test]
    fn prop_device_class_exclusive(ctx in arb_context()) {
        let v = normalize(&ctx);
        let sum = v.get(Feature::IsMobile) + v.get(Feature::IsTablet) + v.get(Feature::IsDesktop);
        prop_assert_eq!(sum, 1.0);
    }

    /// Normalization is a pure function of the context.
    #[test]
    fn prop_normalize_deterministic(ctx in arb_context()) {
        prop_assert_eq!(normalize(&ctx), normalize(&ctx));
    }
}
