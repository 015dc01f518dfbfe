//! Interest-category overlap.

use aura_core::{ContextRecord, Persona};

/// Neutral fraction when the context carries no interest hints.
const NEUTRAL: f64 = 0.3;

/// Fraction in [0, 1]: full when the persona's primary interest appears
/// among the context hints, zero when hints exist but miss, neutral
/// when there are no hints at all.
pub fn affinity(persona: &Persona, ctx: &ContextRecord) -> f64 {
    if ctx.locale.interests.is_empty() {
        return NEUTRAL;
    }
    let hit = ctx
        .locale
        .interests
        .iter()
        .any(|i| i.eq_ignore_ascii_case(&persona.primary_interest));
    if hit {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_scores_full() {
        let persona = crate::catalog::default_persona(); // interest "general"
        let hit = ContextRecord::new().with_interests(vec!["General".to_string()]);
        let miss = ContextRecord::new().with_interests(vec!["gaming".to_string()]);
        assert_eq!(affinity(&persona, &hit), 1.0);
        assert_eq!(affinity(&persona, &miss), 0.0);
        assert_eq!(affinity(&persona, &ContextRecord::new()), NEUTRAL);
    }
}
