//! The persona pool: read-only after load, every entry carries the
//! full preference set.

use aura_core::errors::CatalogError;
use aura_core::persona::{
    AnimationLevel, BudgetBand, ClientType, ColorScheme, DensityPref, LayoutPref, NavStyle,
    TypographyPref, VisualPreferences,
};
use aura_core::{AuraResult, Persona};

/// A fixed list of personas, loaded once at startup.
#[derive(Debug, Clone)]
pub struct PersonaCatalog {
    personas: Vec<Persona>,
}

impl PersonaCatalog {
    /// Load from a JSON array of persona records (the startup loader
    /// collaborator's format). Rejects empty catalogs and duplicate ids.
    pub fn from_json(input: &str) -> AuraResult<Self> {
        let personas: Vec<Persona> =
            serde_json::from_str(input).map_err(|e| CatalogError::Invalid {
                reason: e.to_string(),
            })?;
        Self::from_personas(personas)
    }

    /// Wrap an already-deserialized list, applying the same checks.
    pub fn from_personas(personas: Vec<Persona>) -> AuraResult<Self> {
        if personas.is_empty() {
            return Err(CatalogError::Empty.into());
        }
        for (i, p) in personas.iter().enumerate() {
            if personas[..i].iter().any(|q| q.id == p.id) {
                return Err(CatalogError::Invalid {
                    reason: format!("duplicate persona id: {}", p.id),
                }
                .into());
            }
        }
        Ok(Self { personas })
    }

    /// The built-in demo catalog: eight synthetic personas spanning the
    /// age bands, client types, and preference space.
    pub fn builtin() -> Self {
        Self {
            personas: builtin_personas(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Persona> {
        self.personas.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Persona> {
        self.personas.iter()
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}

/// The fixed catalog-independent fallback persona, returned whenever
/// the catalog is empty or no candidate clears the floor score.
pub fn default_persona() -> Persona {
    Persona {
        id: "default".to_string(),
        name: "Default Visitor".to_string(),
        age: 40,
        client_type: ClientType::Individual,
        region: "US".to_string(),
        primary_interest: "general".to_string(),
        budget_band: BudgetBand::Mid,
        fleet_size: None,
        prefs: VisualPreferences {
            density: DensityPref::Comfortable,
            typography: TypographyPref::Sans,
            animation: AnimationLevel::Subtle,
            layout: LayoutPref::Balanced,
            color_scheme: ColorScheme::Automatic,
            accent_color: "#4263eb".to_string(),
            navigation: NavStyle::TopBar,
        },
    }
}

fn builtin_personas() -> Vec<Persona> {
    vec![
        Persona {
            id: "anna-fitness".to_string(),
            name: "Anna".to_string(),
            age: 29,
            client_type: ClientType::Individual,
            region: "DE".to_string(),
            primary_interest: "fitness".to_string(),
            budget_band: BudgetBand::Mid,
            fleet_size: None,
            prefs: VisualPreferences {
                density: DensityPref::Cozy,
                typography: TypographyPref::Sans,
                animation: AnimationLevel::Moderate,
                layout: LayoutPref::Balanced,
                color_scheme: ColorScheme::Automatic,
                accent_color: "#e8590c".to_string(),
                navigation: NavStyle::TopBar,
            },
        },
        Persona {
            id: "ben-gaming".to_string(),
            name: "Ben".to_string(),
            age: 24,
            client_type: ClientType::Individual,
            region: "US".to_string(),
            primary_interest: "gaming".to_string(),
            budget_band: BudgetBand::Low,
            fleet_size: None,
            prefs: VisualPreferences {
                density: DensityPref::Compact,
                typography: TypographyPref::Sans,
                animation: AnimationLevel::Playful,
                layout: LayoutPref::Compact,
                color_scheme: ColorScheme::Dark,
                accent_color: "#7048e8".to_string(),
                navigation: NavStyle::Minimal,
            },
        },
        Persona {
            id: "clara-travel".to_string(),
            name: "Clara".to_string(),
            age: 41,
            client_type: ClientType::Individual,
            region: "FR".to_string(),
            primary_interest: "travel".to_string(),
            budget_band: BudgetBand::High,
            fleet_size: None,
            prefs: VisualPreferences {
                density: DensityPref::Comfortable,
                typography: TypographyPref::Serif,
                animation: AnimationLevel::Subtle,
                layout: LayoutPref::Airy,
                color_scheme: ColorScheme::Light,
                accent_color: "#1098ad".to_string(),
                navigation: NavStyle::Sidebar,
            },
        },
        Persona {
            id: "dmitri-logistics".to_string(),
            name: "Dmitri".to_string(),
            age: 52,
            client_type: ClientType::Business,
            region: "DE".to_string(),
            primary_interest: "logistics".to_string(),
            budget_band: BudgetBand::High,
            fleet_size: Some(120),
            prefs: VisualPreferences {
                density: DensityPref::Compact,
                typography: TypographyPref::Sans,
                animation: AnimationLevel::None,
                layout: LayoutPref::Compact,
                color_scheme: ColorScheme::Light,
                accent_color: "#364fc7".to_string(),
                navigation: NavStyle::Sidebar,
            },
        },
        Persona {
            id: "elena-retail".to_string(),
            name: "Elena".to_string(),
            age: 36,
            client_type: ClientType::Business,
            region: "ES".to_string(),
            primary_interest: "retail".to_string(),
            budget_band: BudgetBand::Mid,
            fleet_size: Some(8),
            prefs: VisualPreferences {
                density: DensityPref::Cozy,
                typography: TypographyPref::Sans,
                animation: AnimationLevel::Subtle,
                layout: LayoutPref::Balanced,
                color_scheme: ColorScheme::Automatic,
                accent_color: "#087f5b".to_string(),
                navigation: NavStyle::TopBar,
            },
        },
        Persona {
            id: "frank-gardening".to_string(),
            name: "Frank".to_string(),
            age: 67,
            client_type: ClientType::Individual,
            region: "US".to_string(),
            primary_interest: "gardening".to_string(),
            budget_band: BudgetBand::Mid,
            fleet_size: None,
            prefs: VisualPreferences {
                density: DensityPref::Spacious,
                typography: TypographyPref::Serif,
                animation: AnimationLevel::None,
                layout: LayoutPref::Airy,
                color_scheme: ColorScheme::Light,
                accent_color: "#2b8a3e".to_string(),
                navigation: NavStyle::Sidebar,
            },
        },
        Persona {
            id: "grace-reading".to_string(),
            name: "Grace".to_string(),
            age: 73,
            client_type: ClientType::Individual,
            region: "GB".to_string(),
            primary_interest: "reading".to_string(),
            budget_band: BudgetBand::Low,
            fleet_size: None,
            prefs: VisualPreferences {
                density: DensityPref::Spacious,
                typography: TypographyPref::Serif,
                animation: AnimationLevel::Subtle,
                layout: LayoutPref::Airy,
                color_scheme: ColorScheme::Automatic,
                accent_color: "#9c36b5".to_string(),
                navigation: NavStyle::Minimal,
            },
        },
        Persona {
            id: "hiro-manufacturing".to_string(),
            name: "Hiro".to_string(),
            age: 45,
            client_type: ClientType::Business,
            region: "JP".to_string(),
            primary_interest: "manufacturing".to_string(),
            budget_band: BudgetBand::High,
            fleet_size: Some(300),
            prefs: VisualPreferences {
                density: DensityPref::Compact,
                typography: TypographyPref::Mono,
                animation: AnimationLevel::None,
                layout: LayoutPref::Compact,
                color_scheme: ColorScheme::Dark,
                accent_color: "#f08c00".to_string(),
                navigation: NavStyle::Sidebar,
            },
        },
    ]
}
