//! Property-based tests for persona scoring invariants.
//!
//! Scoring must be bounded in [0, 100] and fully deterministic for any
//! context; only the matcher's tie-break draws randomness.

use proptest::prelude::*;

use aura_core::config::MatcherWeights;
use aura_core::ContextRecord;
use aura_persona::scoring::score_persona;
use aura_persona::PersonaCatalog;
use chrono::NaiveDateTime;

fn arb_context() -> impl Strategy<Value = ContextRecord> {
    (
        prop::option::of((200.0f64..4000.0, 200.0f64..4000.0)),
        prop::option::of(any::<bool>()),
        prop::option::of(0u32..24),
        prop::option::of(0.0f64..2000.0),
        prop::option::of(prop::sample::select(vec![
            "DE", "US", "FR", "GB", "JP", "BR",
        ])),
        prop::collection::vec(
            prop::sample::select(vec!["fitness", "gaming", "travel", "reading", "none"]),
            0..3,
        ),
    )
        .prop_map(|(viewport, touch, hour, tenure, region, interests)| {
            let mut ctx = ContextRecord::new();
            if let Some((w, h)) = viewport {
                ctx = ctx.with_viewport(w, h);
            }
            if let Some(t) = touch {
                ctx = ctx.with_touch(t);
            }
            if let Some(h) = hour {
                let ts = format!("2024-06-05 {:02}:00:00", h);
                ctx = ctx.with_local_time(
                    NaiveDateTime::parse_from_str(&ts, "%Y-%m-%d %H:%M:%S").unwrap(),
                );
            }
            if let Some(days) = tenure {
                ctx = ctx.with_tenure_days(days);
            }
            if let Some(r) = region {
                ctx = ctx.with_region(r);
            }
            ctx.with_interests(interests.into_iter().map(String::from).collect())
        })
}

proptest! {
    /// REGRESSION GATE: every score is within [0, 100].
    #[test]
    fn regression_gate_scores_bounded(ctx in arb_context()) {
        let weights = MatcherWeights::default();
        for persona in PersonaCatalog::builtin().iter() {
            let score = score_persona(persona, &ctx, &weights);
            prop_assert!((0.0..=100.0).contains(&score), "{} = {}", persona.id, score);
        }
    }

    /// Scoring is deterministic: the full score set is identical across
    /// repeated calls for the same context.
    #[test]
    fn prop_score_set_stable(ctx in arb_context()) {
        let weights = MatcherWeights::default();
        let catalog = PersonaCatalog::builtin();
        let first: Vec<f64> = catalog.iter().map(|p| score_persona(p, &ctx, &weights)).collect();
        let second: Vec<f64> = catalog.iter().map(|p| score_persona(p, &ctx, &weights)).collect();
        prop_assert_eq!(first, second);
    }
}
