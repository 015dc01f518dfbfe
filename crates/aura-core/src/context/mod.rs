//! Per-request visitor context.
//!
//! A [`ContextRecord`] is an ephemeral snapshot of visitor signals (time,
//! device, behavior, history). Every field is optional at this boundary;
//! downstream consumers resolve absences through documented defaults and
//! never fail on a partial record.

mod signals;

pub use signals::{AccessibilitySignals, BehaviorInfo, ConnectionSpeed, SessionSummary};

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_VIEWPORT_WIDTH;

/// Viewport width below which a device is classified as mobile (px).
pub const MOBILE_MAX_WIDTH: f64 = 768.0;

/// Viewport width below which a device is classified as tablet (px).
pub const TABLET_MAX_WIDTH: f64 = 1024.0;

/// Device class derived from viewport width. The three classes are
/// mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    /// Classify a viewport width in pixels.
    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_MAX_WIDTH {
            Self::Mobile
        } else if width < TABLET_MAX_WIDTH {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    /// Stable name used in fingerprints and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

/// Raw device signals as captured at the boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceInfo {
    /// Viewport width in px.
    pub viewport_width: Option<f64>,
    /// Viewport height in px.
    pub viewport_height: Option<f64>,
    /// Primary pointer is touch.
    pub touch: Option<bool>,
    /// Device pixel ratio.
    pub pixel_ratio: Option<f64>,
}

/// Locale and interest hints, when resolvable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleInfo {
    /// Region code (e.g. "DE", "US"), if resolvable.
    pub region: Option<String>,
    /// Interest-category hints gathered from recent navigation.
    pub interests: Vec<String>,
}

/// Ephemeral per-request context. Owned by the caller for the duration
/// of one prediction request; never persisted by the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextRecord {
    /// Visitor-local timestamp.
    pub timestamp: Option<NaiveDateTime>,
    pub device: DeviceInfo,
    pub behavior: BehaviorInfo,
    /// Summaries of past sessions, most recent last. Absent for
    /// first-time visitors.
    pub history: Option<Vec<SessionSummary>>,
    pub locale: LocaleInfo,
}

impl ContextRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Local hour of day (0-23), if a timestamp is present.
    pub fn local_hour(&self) -> Option<u32> {
        self.timestamp.map(|t| t.hour())
    }

    /// Whether the local timestamp falls on a weekend.
    pub fn is_weekend(&self) -> Option<bool> {
        self.timestamp
            .map(|t| matches!(t.weekday(), Weekday::Sat | Weekday::Sun))
    }

    /// Device class from viewport width; missing viewport classifies as
    /// desktop (the documented default assumption).
    pub fn device_class(&self) -> DeviceClass {
        DeviceClass::from_width(self.device.viewport_width.unwrap_or(DEFAULT_VIEWPORT_WIDTH))
    }

    /// Whether any explicit accessibility signal is set.
    pub fn needs_accessibility(&self) -> bool {
        let a = &self.behavior.accessibility;
        a.reduced_motion || a.high_contrast || a.screen_reader
    }

    // --- builders, used by the capture layer and tests ---

    pub fn with_local_time(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.device.viewport_width = Some(width);
        self.device.viewport_height = Some(height);
        self
    }

    pub fn with_touch(mut self, touch: bool) -> Self {
        self.device.touch = Some(touch);
        self
    }

    pub fn with_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device.pixel_ratio = Some(ratio);
        self
    }

    pub fn with_session(mut self, duration_secs: f64, interactions: u32) -> Self {
        self.behavior.session_duration_secs = Some(duration_secs);
        self.behavior.interaction_count = Some(interactions);
        self
    }

    pub fn with_tenure_days(mut self, days: f64) -> Self {
        self.behavior.tenure_days = Some(days);
        self
    }

    pub fn with_connection(mut self, speed: ConnectionSpeed) -> Self {
        self.behavior.connection = Some(speed);
        self
    }

    pub fn with_accessibility(mut self, signals: AccessibilitySignals) -> Self {
        self.behavior.accessibility = signals;
        self
    }

    pub fn with_history(mut self, history: Vec<SessionSummary>) -> Self {
        self.history = Some(history);
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.locale.region = Some(region.into());
        self
    }

    pub fn with_interests(mut self, interests: Vec<String>) -> Self {
        self.locale.interests = interests;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_class_thresholds() {
        assert_eq!(DeviceClass::from_width(375.0), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_width(767.9), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_width(768.0), DeviceClass::Tablet);
        assert_eq!(DeviceClass::from_width(1023.9), DeviceClass::Tablet);
        assert_eq!(DeviceClass::from_width(1024.0), DeviceClass::Desktop);
        assert_eq!(DeviceClass::from_width(1920.0), DeviceClass::Desktop);
    }

    #[test]
    fn empty_context_classifies_as_desktop() {
        assert_eq!(ContextRecord::new().device_class(), DeviceClass::Desktop);
    }

    #[test]
    fn weekend_detection() {
        // 2024-06-08 is a Saturday.
        let sat = NaiveDateTime::parse_from_str("2024-06-08 10:00:00", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        let ctx = ContextRecord::new().with_local_time(sat);
        assert_eq!(ctx.is_weekend(), Some(true));
        assert_eq!(ctx.local_hour(), Some(10));
    }
}
