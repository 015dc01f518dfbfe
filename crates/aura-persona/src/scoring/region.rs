//! Region alignment, when resolvable.

use aura_core::{ContextRecord, Persona};

/// Neutral fraction when the context region is unknown.
const NEUTRAL: f64 = 0.4;

/// Fraction in [0, 1]: exact (case-insensitive) region match scores
/// full, a known mismatch scores zero, an unresolvable region stays
/// neutral.
pub fn affinity(persona: &Persona, ctx: &ContextRecord) -> f64 {
    match ctx.locale.region.as_deref() {
        Some(region) if region.eq_ignore_ascii_case(&persona.region) => 1.0,
        Some(_) => 0.0,
        None => NEUTRAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_region_scores_full() {
        let persona = crate::catalog::default_persona(); // region US
        assert_eq!(affinity(&persona, &ContextRecord::new().with_region("us")), 1.0);
        assert_eq!(affinity(&persona, &ContextRecord::new().with_region("DE")), 0.0);
        assert_eq!(affinity(&persona, &ContextRecord::new()), NEUTRAL);
    }
}
