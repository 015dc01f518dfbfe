//! Client-type alignment (individual vs. fleet/business signals).

use aura_core::context::DeviceClass;
use aura_core::persona::ClientType;
use aura_core::{ContextRecord, Persona};

/// Business likelihood in [0, 1] from context signals: weekday business
/// hours on a desktop push up, weekend and touch-mobile usage push down.
pub fn business_signal(ctx: &ContextRecord) -> f64 {
    let mut signal: f64 = 0.5;
    let business_hours = ctx.local_hour().map_or(true, |h| (9..18).contains(&h))
        && !ctx.is_weekend().unwrap_or(false);
    if business_hours && ctx.device_class() == DeviceClass::Desktop {
        signal += 0.25;
    }
    if ctx.is_weekend().unwrap_or(false) {
        signal -= 0.2;
    }
    if ctx.device_class() == DeviceClass::Mobile && ctx.device.touch.unwrap_or(false) {
        signal -= 0.15;
    }
    signal.clamp(0.0, 1.0)
}

/// Fraction in [0, 1]: how close the context's business likelihood sits
/// to the persona's client type (1.0 for business, 0.0 for individual).
pub fn affinity(persona: &Persona, ctx: &ContextRecord) -> f64 {
    let target = match persona.client_type {
        ClientType::Business => 1.0,
        ClientType::Individual => 0.0,
    };
    1.0 - (business_signal(ctx) - target).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn at(ts: &str) -> ContextRecord {
        let t = NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap();
        ContextRecord::new().with_local_time(t)
    }

    #[test]
    fn weekday_desktop_leans_business() {
        // 2024-06-05 is a Wednesday.
        let ctx = at("2024-06-05 10:00:00").with_viewport(1920.0, 1080.0);
        assert!(business_signal(&ctx) > 0.5);
    }

    #[test]
    fn weekend_touch_mobile_leans_individual() {
        // 2024-06-08 is a Saturday.
        let ctx = at("2024-06-08 11:00:00")
            .with_viewport(375.0, 812.0)
            .with_touch(true);
        assert!(business_signal(&ctx) < 0.5);
    }

    #[test]
    fn affinity_is_complementary_between_types() {
        let ctx = at("2024-06-05 10:00:00").with_viewport(1920.0, 1080.0);
        let mut business = crate::catalog::default_persona();
        business.client_type = ClientType::Business;
        let individual = crate::catalog::default_persona();
        let sum = affinity(&business, &ctx) + affinity(&individual, &ctx);
        assert!((sum - 1.0).abs() < 1e-9);
    }
}
