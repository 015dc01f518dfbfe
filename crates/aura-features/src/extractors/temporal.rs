//! Temporal features: hour of day, weekend/business-hours flags, and a
//! fixed hourly activity-intensity curve.

use aura_core::ContextRecord;

/// Hour at which business hours start (inclusive).
pub const BUSINESS_HOURS_START: u32 = 9;

/// Hour at which business hours end (exclusive).
pub const BUSINESS_HOURS_END: u32 = 18;

/// Fixed activity-intensity lookup per local hour. Not learned; encodes
/// the typical engagement curve of the property (night trough, morning
/// ramp, midday plateau, evening peak).
const ACTIVITY_CURVE: [f64; 24] = [
    0.15, 0.10, 0.08, 0.05, 0.05, 0.08, // 00-05
    0.15, 0.30, 0.50, 0.65, 0.75, 0.80, // 06-11
    0.85, 0.80, 0.75, 0.70, 0.72, 0.78, // 12-17
    0.85, 0.90, 0.80, 0.60, 0.40, 0.25, // 18-23
];

/// Local hour of day. Missing timestamp defaults to noon.
pub fn hour_of_day(ctx: &ContextRecord) -> f64 {
    ctx.local_hour().unwrap_or(12) as f64
}

/// Weekend flag. Missing timestamp defaults to weekday.
pub fn is_weekend(ctx: &ContextRecord) -> f64 {
    if ctx.is_weekend().unwrap_or(false) {
        1.0
    } else {
        0.0
    }
}

/// Business-hours flag: 9-18 local on weekdays. A missing timestamp
/// defaults to noon on a weekday, so the flag defaults to 1.
pub fn is_business_hours(ctx: &ContextRecord) -> f64 {
    let hour = ctx.local_hour().unwrap_or(12);
    let weekend = ctx.is_weekend().unwrap_or(false);
    if !weekend && (BUSINESS_HOURS_START..BUSINESS_HOURS_END).contains(&hour) {
        1.0
    } else {
        0.0
    }
}

/// Activity intensity for the local hour, from the fixed curve.
pub fn activity_intensity(ctx: &ContextRecord) -> f64 {
    let hour = ctx.local_hour().unwrap_or(12) as usize;
    ACTIVITY_CURVE[hour.min(23)]
}
