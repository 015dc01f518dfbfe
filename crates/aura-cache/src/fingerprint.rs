//! Context fingerprinting.
//!
//! The fingerprint hashes only the stable, low-cardinality subset of
//! the context that dominates prediction variance: device class, touch
//! capability, a 4-hour local-hour bucket, pixel density rounded to the
//! nearest 0.5, and the accessibility and weekend flags. Contexts that
//! differ only in noisy fields (exact pixel ratio, exact timestamp,
//! session counters) collapse to the same key.

use std::fmt;

use aura_core::ContextRecord;

/// Width of the local-hour bucket (hours).
const HOUR_BUCKET_SIZE: u32 = 4;

/// Deterministic cache key over the reduced context subset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprint a context. Absent fields hash through the same
    /// defaults the normalizer uses, so a context and its normalized
    /// form always agree on the key.
    pub fn of(ctx: &ContextRecord) -> Self {
        let hour_bucket = ctx.local_hour().unwrap_or(12) / HOUR_BUCKET_SIZE;
        let density_half_steps =
            (ctx.device.pixel_ratio.unwrap_or(1.0).clamp(0.5, 4.0) * 2.0).round() as i64;

        let mut hasher = blake3::Hasher::new();
        hasher.update(ctx.device_class().name().as_bytes());
        hasher.update(&[u8::from(ctx.device.touch.unwrap_or(false))]);
        hasher.update(&hour_bucket.to_le_bytes());
        hasher.update(&density_half_steps.to_le_bytes());
        hasher.update(&[u8::from(ctx.needs_accessibility())]);
        hasher.update(&[u8::from(ctx.is_weekend().unwrap_or(false))]);

        let hex = hasher.finalize().to_hex();
        Self(hex[..16].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn at_hour(hour: u32) -> ContextRecord {
        let ts = format!("2024-06-05 {:02}:15:00", hour);
        let t = NaiveDateTime::parse_from_str(&ts, "%Y-%m-%d %H:%M:%S").unwrap();
        ContextRecord::new().with_local_time(t)
    }

    #[test]
    fn fingerprint_is_deterministic() {
        let ctx = ContextRecord::new().with_viewport(1920.0, 1080.0);
        assert_eq!(Fingerprint::of(&ctx), Fingerprint::of(&ctx));
    }

    #[test]
    fn noisy_pixel_ratio_collapses() {
        let a = ContextRecord::new().with_pixel_ratio(2.0);
        let b = ContextRecord::new().with_pixel_ratio(2.08);
        assert_eq!(Fingerprint::of(&a), Fingerprint::of(&b));
    }

    #[test]
    fn timestamps_in_the_same_bucket_collapse() {
        assert_eq!(Fingerprint::of(&at_hour(13)), Fingerprint::of(&at_hour(15)));
        assert_ne!(Fingerprint::of(&at_hour(13)), Fingerprint::of(&at_hour(22)));
    }

    #[test]
    fn device_class_changes_the_key() {
        let mobile = ContextRecord::new().with_viewport(375.0, 812.0);
        let desktop = ContextRecord::new().with_viewport(1920.0, 1080.0);
        assert_ne!(Fingerprint::of(&mobile), Fingerprint::of(&desktop));
    }

    #[test]
    fn session_counters_do_not_affect_the_key() {
        let a = ContextRecord::new().with_session(10.0, 1);
        let b = ContextRecord::new().with_session(4_000.0, 250);
        assert_eq!(Fingerprint::of(&a), Fingerprint::of(&b));
    }
}
