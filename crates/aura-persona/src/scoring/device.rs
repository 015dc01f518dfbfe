//! Device-class compatibility.

use aura_core::context::DeviceClass;
use aura_core::persona::ClientType;
use aura_core::{ContextRecord, Persona};

/// The device class a persona is most at home on: business users sit at
/// desks, young individuals live on phones, seniors favor tablets.
fn expected_class(persona: &Persona) -> DeviceClass {
    if persona.client_type == ClientType::Business {
        return DeviceClass::Desktop;
    }
    match persona.age {
        0..=29 => DeviceClass::Mobile,
        30..=59 => DeviceClass::Desktop,
        _ => DeviceClass::Tablet,
    }
}

/// Fraction in [0, 1]: 1.0 on an exact class match, 0.5 for adjacent
/// classes (mobile-tablet, tablet-desktop), 0.1 across the full span.
pub fn affinity(persona: &Persona, ctx: &ContextRecord) -> f64 {
    let expected = expected_class(persona);
    let actual = ctx.device_class();
    if expected == actual {
        return 1.0;
    }
    let rank = |c: DeviceClass| match c {
        DeviceClass::Mobile => 0i32,
        DeviceClass::Tablet => 1,
        DeviceClass::Desktop => 2,
    };
    if (rank(expected) - rank(actual)).abs() == 1 {
        0.5
    } else {
        0.1
    }
}
