//! Rule-based persona overrides.
//!
//! These mappings are fixed product rules, not learned: they must stay
//! available when the ML layer is degraded or absent.

use aura_core::persona::{ClientType, ColorScheme};
use aura_core::Persona;

/// Fixed professional accent (HSL) applied to business-type personas
/// instead of their personal color.
pub const BUSINESS_ACCENT_HSL: (f64, f64, f64) = (217.0, 60.0, 45.0);

/// Resolved accent source for a persona: individuals get their own
/// preferred color, business personas get the fixed professional
/// palette. `None` when an individual's hex is unparseable; the
/// model-predicted accent then stands.
pub fn accent_hsl(persona: &Persona) -> Option<(f64, f64, f64)> {
    match persona.client_type {
        ClientType::Business => Some(BUSINESS_ACCENT_HSL),
        ClientType::Individual => hex_to_hsl(&persona.prefs.accent_color),
    }
}

/// Resolve the predicted theme label to a concrete light/dark choice.
/// "automatic" defers to the persona's color-scheme preference, and an
/// automatic preference lands on light.
pub fn resolve_theme(predicted: &str, persona: &Persona) -> ResolvedTheme {
    match predicted {
        "dark" => ResolvedTheme::Dark,
        "light" => ResolvedTheme::Light,
        _ => match persona.prefs.color_scheme {
            ColorScheme::Dark => ResolvedTheme::Dark,
            ColorScheme::Light | ColorScheme::Automatic => ResolvedTheme::Light,
        },
    }
}

/// A concrete theme after "automatic" resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

/// Parse `#rrggbb` into HSL (h in degrees, s/l in percent).
pub fn hex_to_hsl(hex: &str) -> Option<(f64, f64, f64)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()? as f64 / 255.0;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()? as f64 / 255.0;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()? as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Some((0.0, 0.0, l * 100.0));
    }

    let delta = max - min;
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };
    let h = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    } * 60.0;

    Some((h, s * 100.0, l * 100.0))
}
