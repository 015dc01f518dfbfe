//! Synthetic persona model.
//!
//! Personas are static, versioned catalog entries used as a
//! deterministic fallback and for consistent demo behavior. Every
//! persona carries the full visual-preference set; there are no
//! partial personas.

mod preferences;

pub use preferences::{
    AnimationLevel, ColorScheme, DensityPref, LayoutPref, NavStyle, TypographyPref,
    VisualPreferences,
};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Whether a persona models an individual visitor or a business/fleet
/// account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    Individual,
    Business,
}

/// Coarse budget segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum BudgetBand {
    Low,
    Mid,
    High,
}

/// Age bands driving the base font-size tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum AgeBand {
    Young,
    Middle,
    Senior,
}

impl AgeBand {
    /// Band boundaries: under 35, 35-59, 60 and up.
    pub fn of_age(age: u8) -> Self {
        match age {
            0..=34 => Self::Young,
            35..=59 => Self::Middle,
            _ => Self::Senior,
        }
    }

    /// Base font size for this band (px). Three tiers; Senior gets the
    /// largest.
    pub fn base_font_px(self) -> u32 {
        match self {
            Self::Young => 15,
            Self::Middle => 16,
            Self::Senior => 18,
        }
    }
}

/// A static catalog entry: demographics plus the full visual-preference
/// set. Catalog entries are read-only after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Persona {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub client_type: ClientType,
    /// Region code (e.g. "DE", "US").
    pub region: String,
    pub primary_interest: String,
    pub budget_band: BudgetBand,
    /// Vehicle/device fleet size for business personas.
    pub fleet_size: Option<u32>,
    pub prefs: VisualPreferences,
}

impl Persona {
    /// Age band for font-size tiering.
    pub fn age_band(&self) -> AgeBand {
        AgeBand::of_age(self.age)
    }
}
