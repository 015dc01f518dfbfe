/// Feature schema version. Cached predictions and model artifacts are
/// only valid against the version they were produced for.
pub const SCHEMA_VERSION: u32 = 1;

/// Number of features in the vector.
pub const FEATURE_COUNT: usize = 21;

/// All features, in schema order. The ordinal of each variant is its
/// index in the vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Feature {
    HourOfDay = 0,
    IsWeekend = 1,
    IsBusinessHours = 2,
    ActivityIntensity = 3,
    IsMobile = 4,
    IsTablet = 5,
    IsDesktop = 6,
    HasTouch = 7,
    PixelDensity = 8,
    ViewportArea = 9,
    AspectRatio = 10,
    ViewportDiagonal = 11,
    SessionDuration = 12,
    InteractionCount = 13,
    TenureDays = 14,
    ConnectionSpeed = 15,
    AccessibilityNeed = 16,
    MeanSessionDuration = 17,
    TotalInteractions = 18,
    DaysSinceFirst = 19,
    EngagementLevel = 20,
}

impl Feature {
    /// Index of this feature in the vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Schema entry for this feature.
    pub fn spec(self) -> &'static FeatureSpec {
        &SCHEMA[self.index()]
    }
}

/// Declared bounds and absent-field default for one feature.
#[derive(Debug, Clone, Copy)]
pub struct FeatureSpec {
    pub feature: Feature,
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

/// The full schema, in vector order.
pub static SCHEMA: [FeatureSpec; FEATURE_COUNT] = [
    FeatureSpec {
        feature: Feature::HourOfDay,
        name: "hour_of_day",
        min: 0.0,
        max: 23.0,
        default: 12.0,
    },
    FeatureSpec {
        feature: Feature::IsWeekend,
        name: "is_weekend",
        min: 0.0,
        max: 1.0,
        default: 0.0,
    },
    FeatureSpec {
        feature: Feature::IsBusinessHours,
        name: "is_business_hours",
        min: 0.0,
        max: 1.0,
        default: 1.0,
    },
    FeatureSpec {
        feature: Feature::ActivityIntensity,
        name: "activity_intensity",
        min: 0.0,
        max: 1.0,
        default: 0.5,
    },
    FeatureSpec {
        feature: Feature::IsMobile,
        name: "is_mobile",
        min: 0.0,
        max: 1.0,
        default: 0.0,
    },
    FeatureSpec {
        feature: Feature::IsTablet,
        name: "is_tablet",
        min: 0.0,
        max: 1.0,
        default: 0.0,
    },
    FeatureSpec {
        feature: Feature::IsDesktop,
        name: "is_desktop",
        min: 0.0,
        max: 1.0,
        default: 1.0,
    },
    FeatureSpec {
        feature: Feature::HasTouch,
        name: "has_touch",
        min: 0.0,
        max: 1.0,
        default: 0.0,
    },
    FeatureSpec {
        feature: Feature::PixelDensity,
        name: "pixel_density",
        min: 0.5,
        max: 4.0,
        default: 1.0,
    },
    FeatureSpec {
        feature: Feature::ViewportArea,
        name: "viewport_area",
        min: 0.0,
        max: 1.0,
        default: 0.0625, // 1366x768 scaled
    },
    FeatureSpec {
        feature: Feature::AspectRatio,
        name: "aspect_ratio",
        min: 0.2,
        max: 5.0,
        default: 16.0 / 9.0,
    },
    FeatureSpec {
        feature: Feature::ViewportDiagonal,
        name: "viewport_diagonal",
        min: 0.0,
        max: 1.0,
        default: 0.2706, // 1366x768 scaled
    },
    FeatureSpec {
        feature: Feature::SessionDuration,
        name: "session_duration",
        min: 0.0,
        max: 1.0,
        default: 0.0,
    },
    FeatureSpec {
        feature: Feature::InteractionCount,
        name: "interaction_count",
        min: 0.0,
        max: 1.0,
        default: 0.0,
    },
    FeatureSpec {
        feature: Feature::TenureDays,
        name: "tenure_days",
        min: 0.0,
        max: 1.0,
        default: 0.0,
    },
    FeatureSpec {
        feature: Feature::ConnectionSpeed,
        name: "connection_speed",
        min: 0.0,
        max: 1.0,
        default: 0.5,
    },
    FeatureSpec {
        feature: Feature::AccessibilityNeed,
        name: "accessibility_need",
        min: 0.0,
        max: 1.0,
        default: 0.0,
    },
    FeatureSpec {
        feature: Feature::MeanSessionDuration,
        name: "mean_session_duration",
        min: 0.0,
        max: 1.0,
        default: 0.0,
    },
    FeatureSpec {
        feature: Feature::TotalInteractions,
        name: "total_interactions",
        min: 0.0,
        max: 1.0,
        default: 0.0,
    },
    FeatureSpec {
        feature: Feature::DaysSinceFirst,
        name: "days_since_first",
        min: 0.0,
        max: 1.0,
        default: 0.0,
    },
    FeatureSpec {
        feature: Feature::EngagementLevel,
        name: "engagement_level",
        min: 0.0,
        max: 1.0,
        default: 0.0,
    },
];
