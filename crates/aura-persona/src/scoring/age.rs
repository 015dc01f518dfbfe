//! Inferred age-band alignment.
//!
//! The context carries no explicit age, so a band is inferred from
//! behavioral signals. When nothing is indicative, the dimension stays
//! neutral rather than biasing toward any band.

use aura_core::context::DeviceClass;
use aura_core::persona::AgeBand;
use aura_core::{ContextRecord, Persona};

/// Neutral fraction used when no band can be inferred.
const NEUTRAL: f64 = 0.5;

/// Infer an age band from context signals, if any are indicative:
/// accessibility needs read as senior, late-night mobile browsing as
/// young, long tenure as the established middle band.
pub fn inferred_band(ctx: &ContextRecord) -> Option<AgeBand> {
    if ctx.needs_accessibility() {
        return Some(AgeBand::Senior);
    }
    let late_night = ctx.local_hour().map_or(false, |h| h >= 22 || h < 4);
    if late_night && ctx.device_class() == DeviceClass::Mobile {
        return Some(AgeBand::Young);
    }
    if ctx.behavior.tenure_days.unwrap_or(0.0) >= 180.0 {
        return Some(AgeBand::Middle);
    }
    None
}

/// Fraction in [0, 1]: 1.0 when the persona's band matches the inferred
/// band, 0.4 for an adjacent band, 0.0 across the full span; neutral
/// 0.5 when no band is inferable.
pub fn affinity(persona: &Persona, ctx: &ContextRecord) -> f64 {
    let Some(inferred) = inferred_band(ctx) else {
        return NEUTRAL;
    };
    let rank = |b: AgeBand| match b {
        AgeBand::Young => 0i32,
        AgeBand::Middle => 1,
        AgeBand::Senior => 2,
    };
    match (rank(inferred) - rank(persona.age_band())).abs() {
        0 => 1.0,
        1 => 0.4,
        _ => 0.0,
    }
}
