//! Multi-criteria persona similarity scoring.
//!
//! Each dimension contributes a capped partial score: a fraction in
//! [0, 1] multiplied by its configured weight. The total is clamped to
//! [0, 100]. Scoring is pure: for a fixed context and catalog the
//! score set is identical across calls; randomness only enters at the
//! tie-break in the matcher.

pub mod age;
pub mod client;
pub mod device;
pub mod interest;
pub mod region;

use aura_core::config::MatcherWeights;
use aura_core::{ContextRecord, Persona};

/// Weighted similarity score for one persona against a context, in
/// [0, 100].
pub fn score_persona(persona: &Persona, ctx: &ContextRecord, weights: &MatcherWeights) -> f64 {
    let total = weights.device * device::affinity(persona, ctx)
        + weights.age * age::affinity(persona, ctx)
        + weights.client_type * client::affinity(persona, ctx)
        + weights.region * region::affinity(persona, ctx)
        + weights.interest * interest::affinity(persona, ctx);
    total.clamp(0.0, 100.0)
}
