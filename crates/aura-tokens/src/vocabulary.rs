//! The fixed token vocabulary.
//!
//! Every class name and CSS variable the composer may emit is declared
//! here; the presentation layer's stylesheet is written against exactly
//! this set. Class families are mutually exclusive; a bundle carries
//! at most one class per family.

// --- Class families ---

pub const CLASS_THEME_LIGHT: &str = "theme-light";
pub const CLASS_THEME_DARK: &str = "theme-dark";

pub const CLASS_DENSITY_COMPACT: &str = "density-compact";
pub const CLASS_DENSITY_COMFORTABLE: &str = "density-comfortable";
pub const CLASS_DENSITY_SPACIOUS: &str = "density-spacious";

pub const CLASS_TYPE_SERIF: &str = "type-serif";
pub const CLASS_TYPE_SANS: &str = "type-sans";
pub const CLASS_TYPE_MONO: &str = "type-mono";

pub const CLASS_ANIM_PREFIX: &str = "anim-";
pub const CLASS_LAYOUT_PREFIX: &str = "layout-";
pub const CLASS_NAV_PREFIX: &str = "nav-";

/// Mutually exclusive class families, for consistency validation.
pub const CLASS_FAMILIES: [&str; 6] = [
    "theme-", "density-", "type-", "anim-", "layout-", "nav-",
];

// --- CSS variables ---

pub const VAR_FONT_SIZE: &str = "--aura-font-size";
pub const VAR_FONT_SCALE: &str = "--aura-font-scale";
pub const VAR_SPACING_UNIT: &str = "--aura-spacing-unit";
pub const VAR_ACCENT_H: &str = "--aura-accent-h";
pub const VAR_ACCENT_S: &str = "--aura-accent-s";
pub const VAR_ACCENT_L: &str = "--aura-accent-l";
pub const VAR_TRANSITION_DURATION: &str = "--aura-transition-duration";
pub const VAR_BORDER_RADIUS: &str = "--aura-border-radius";
pub const VAR_SURFACE: &str = "--aura-surface";
pub const VAR_TEXT: &str = "--aura-text";

// --- Theme-dependent values ---

pub const SURFACE_LIGHT: &str = "#ffffff";
pub const TEXT_LIGHT: &str = "#1a1b1e";
pub const SURFACE_DARK: &str = "#141517";
pub const TEXT_DARK: &str = "#e9ecef";
