//! Deterministic token composition.
//!
//! Merge order is fixed: (1) the model prediction seeds the base
//! classes and variables, (2) persona rules override their variables
//! and contribute their class families, (3) theme variables are pinned
//! to the final resolved theme. Class exclusivity holds by construction
//! because each family is written exactly once.

use aura_core::prediction::{PredictionResult, StyleAxis, StyleChannel};
use aura_core::{DesignTokenBundle, Persona};

use crate::overrides::{accent_hsl, resolve_theme, ResolvedTheme};
use crate::vocabulary as vocab;

/// Compose the final bundle from a prediction and the active persona.
pub fn compose(prediction: &PredictionResult, persona: &Persona) -> DesignTokenBundle {
    let mut bundle = DesignTokenBundle::new();

    // (1) Base layer: model prediction.
    let density = prediction
        .axis(StyleAxis::Density)
        .map(|a| a.winner_label())
        .unwrap_or("comfortable");
    bundle.add_class(format!("density-{density}"));

    let typeface = prediction
        .axis(StyleAxis::Typeface)
        .map(|a| a.winner_label())
        .unwrap_or("sans");
    bundle.add_class(format!("type-{typeface}"));

    let predicted_theme = prediction
        .axis(StyleAxis::Theme)
        .map(|a| a.winner_label())
        .unwrap_or("automatic");
    let theme = resolve_theme(predicted_theme, persona);

    if let Some(c) = prediction.channel(StyleChannel::FontScale) {
        bundle.set_var(vocab::VAR_FONT_SCALE, format!("{:.3}", c.value));
    }
    if let Some(c) = prediction.channel(StyleChannel::SpacingUnit) {
        bundle.set_var(vocab::VAR_SPACING_UNIT, format!("{:.1}px", c.value));
    }
    if let Some(c) = prediction.channel(StyleChannel::AccentHue) {
        bundle.set_var(vocab::VAR_ACCENT_H, format!("{:.0}", c.value));
    }
    if let Some(c) = prediction.channel(StyleChannel::AccentSaturation) {
        bundle.set_var(vocab::VAR_ACCENT_S, format!("{:.0}%", c.value));
    }
    if let Some(c) = prediction.channel(StyleChannel::AccentLightness) {
        bundle.set_var(vocab::VAR_ACCENT_L, format!("{:.0}%", c.value));
    }
    if let Some(c) = prediction.channel(StyleChannel::MotionDuration) {
        bundle.set_var(vocab::VAR_TRANSITION_DURATION, format!("{:.0}ms", c.value));
    }

    // (2) Persona rule overrides, each family written once.
    bundle.set_var(
        vocab::VAR_FONT_SIZE,
        format!("{}px", persona.age_band().base_font_px()),
    );

    if let Some((h, s, l)) = accent_hsl(persona) {
        bundle.set_var(vocab::VAR_ACCENT_H, format!("{:.0}", h));
        bundle.set_var(vocab::VAR_ACCENT_S, format!("{:.0}%", s));
        bundle.set_var(vocab::VAR_ACCENT_L, format!("{:.0}%", l));
    }

    let animation = persona.prefs.animation;
    bundle.add_class(format!("{}{}", vocab::CLASS_ANIM_PREFIX, animation.class_suffix()));
    bundle.set_var(
        vocab::VAR_TRANSITION_DURATION,
        format!("{}ms", animation.duration_ms()),
    );

    bundle.set_var(
        vocab::VAR_SPACING_UNIT,
        format!("{}px", persona.prefs.density.spacing_px()),
    );

    let layout = persona.prefs.layout;
    bundle.add_class(format!("{}{}", vocab::CLASS_LAYOUT_PREFIX, layout.class_suffix()));
    bundle.set_var(vocab::VAR_BORDER_RADIUS, format!("{}px", layout.radius_px()));

    bundle.add_class(format!(
        "{}{}",
        vocab::CLASS_NAV_PREFIX,
        persona.prefs.navigation.class_suffix()
    ));

    // (3) Theme class and theme-dependent variables, always in agreement.
    match theme {
        ResolvedTheme::Light => {
            bundle.add_class(vocab::CLASS_THEME_LIGHT);
            bundle.set_var(vocab::VAR_SURFACE, vocab::SURFACE_LIGHT);
            bundle.set_var(vocab::VAR_TEXT, vocab::TEXT_LIGHT);
        }
        ResolvedTheme::Dark => {
            bundle.add_class(vocab::CLASS_THEME_DARK);
            bundle.set_var(vocab::VAR_SURFACE, vocab::SURFACE_DARK);
            bundle.set_var(vocab::VAR_TEXT, vocab::TEXT_DARK);
        }
    }

    tracing::debug!(
        persona = %persona.id,
        classes = bundle.classes.len(),
        degraded = prediction.degraded,
        "bundle composed"
    );
    bundle
}

/// Structural consistency check: at most one class per family, and the
/// theme-dependent variables agree with the theme class. Used by tests
/// and debugging assertions; `compose` guarantees it by construction.
pub fn is_self_consistent(bundle: &DesignTokenBundle) -> bool {
    for family in vocab::CLASS_FAMILIES {
        if bundle.classes_with_prefix(family).count() > 1 {
            return false;
        }
    }
    if bundle.has_class(vocab::CLASS_THEME_DARK) {
        return bundle.var(vocab::VAR_SURFACE) == Some(vocab::SURFACE_DARK)
            && bundle.var(vocab::VAR_TEXT) == Some(vocab::TEXT_DARK);
    }
    if bundle.has_class(vocab::CLASS_THEME_LIGHT) {
        return bundle.var(vocab::VAR_SURFACE) == Some(vocab::SURFACE_LIGHT)
            && bundle.var(vocab::VAR_TEXT) == Some(vocab::TEXT_LIGHT);
    }
    true
}
