use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Information-density preference. Four tiers mapping to the
/// spacing-unit variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum DensityPref {
    Compact,
    Cozy,
    Comfortable,
    Spacious,
}

impl DensityPref {
    /// Spacing unit for this tier (px).
    pub fn spacing_px(self) -> u32 {
        match self {
            Self::Compact => 4,
            Self::Cozy => 6,
            Self::Comfortable => 8,
            Self::Spacious => 12,
        }
    }
}

/// Typography style preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum TypographyPref {
    Serif,
    Sans,
    Mono,
}

/// Animation-level preference. Four tiers mapping to the
/// transition-duration variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum AnimationLevel {
    None,
    Subtle,
    Moderate,
    Playful,
}

impl AnimationLevel {
    /// Transition duration for this tier (ms).
    pub fn duration_ms(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Subtle => 80,
            Self::Moderate => 160,
            Self::Playful => 320,
        }
    }

    /// Class-name suffix for this tier.
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Subtle => "subtle",
            Self::Moderate => "moderate",
            Self::Playful => "playful",
        }
    }
}

/// Layout preference. Three tiers mapping to the border-radius variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum LayoutPref {
    Compact,
    Balanced,
    Airy,
}

impl LayoutPref {
    /// Border radius for this tier (px).
    pub fn radius_px(self) -> u32 {
        match self {
            Self::Compact => 2,
            Self::Balanced => 6,
            Self::Airy => 12,
        }
    }

    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Balanced => "balanced",
            Self::Airy => "airy",
        }
    }
}

/// Color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
    Automatic,
}

/// Navigation style preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum NavStyle {
    Sidebar,
    TopBar,
    Minimal,
}

impl NavStyle {
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Sidebar => "sidebar",
            Self::TopBar => "topbar",
            Self::Minimal => "minimal",
        }
    }
}

/// The full visual-preference set. Every persona exposes all fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VisualPreferences {
    pub density: DensityPref,
    pub typography: TypographyPref,
    pub animation: AnimationLevel,
    pub layout: LayoutPref,
    pub color_scheme: ColorScheme,
    /// Preferred accent color as `#rrggbb`.
    pub accent_color: String,
    pub navigation: NavStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_tiers_are_increasing() {
        assert!(DensityPref::Compact.spacing_px() < DensityPref::Cozy.spacing_px());
        assert!(DensityPref::Cozy.spacing_px() < DensityPref::Comfortable.spacing_px());
        assert!(DensityPref::Comfortable.spacing_px() < DensityPref::Spacious.spacing_px());
    }

    #[test]
    fn animation_none_means_no_motion() {
        assert_eq!(AnimationLevel::None.duration_ms(), 0);
    }
}
