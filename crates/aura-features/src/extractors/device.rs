//! Device features: mutually exclusive device-class flags, pointer
//! capability, pixel density, and derived viewport geometry.

use aura_core::constants::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use aura_core::context::DeviceClass;
use aura_core::features::{Feature, AREA_SCALE, DIAGONAL_SCALE};
use aura_core::ContextRecord;

/// Device-class flags as (is_mobile, is_tablet, is_desktop). Exactly one
/// is 1.0 because the class is a single enum value.
pub fn class_flags(ctx: &ContextRecord) -> (f64, f64, f64) {
    match ctx.device_class() {
        DeviceClass::Mobile => (1.0, 0.0, 0.0),
        DeviceClass::Tablet => (0.0, 1.0, 0.0),
        DeviceClass::Desktop => (0.0, 0.0, 1.0),
    }
}

/// Touch-pointer flag. Missing signal defaults to no touch.
pub fn has_touch(ctx: &ContextRecord) -> f64 {
    if ctx.device.touch.unwrap_or(false) {
        1.0
    } else {
        0.0
    }
}

/// Device pixel ratio. Missing signal defaults to 1.0; the schema clip
/// pass bounds it to [0.5, 4.0].
pub fn pixel_density(ctx: &ContextRecord) -> f64 {
    ctx.device.pixel_ratio.unwrap_or(1.0)
}

/// Derived viewport geometry: (area, aspect ratio, diagonal), each
/// scaled into its schema range. Zero or negative dimensions fall back
/// to the schema defaults instead of dividing by zero.
pub fn geometry(ctx: &ContextRecord) -> (f64, f64, f64) {
    let width = ctx.device.viewport_width.unwrap_or(DEFAULT_VIEWPORT_WIDTH);
    let height = ctx
        .device
        .viewport_height
        .unwrap_or(DEFAULT_VIEWPORT_HEIGHT);

    if width <= 0.0 || height <= 0.0 || !width.is_finite() || !height.is_finite() {
        return (
            Feature::ViewportArea.spec().default,
            Feature::AspectRatio.spec().default,
            Feature::ViewportDiagonal.spec().default,
        );
    }

    let area = (width * height) / AREA_SCALE;
    let aspect = width / height;
    let diagonal = (width * width + height * height).sqrt() / DIAGONAL_SCALE;
    (area, aspect, diagonal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_flags_are_mutually_exclusive() {
        for width in [320.0, 375.0, 768.0, 1024.0, 1920.0, 3840.0] {
            let ctx = ContextRecord::new().with_viewport(width, 800.0);
            let (m, t, d) = class_flags(&ctx);
            assert_eq!(m + t + d, 1.0, "width {width}");
        }
    }

    #[test]
    fn geometry_guards_zero_height() {
        let ctx = ContextRecord::new().with_viewport(1920.0, 0.0);
        let (area, aspect, diagonal) = geometry(&ctx);
        assert_eq!(area, Feature::ViewportArea.spec().default);
        assert_eq!(aspect, Feature::AspectRatio.spec().default);
        assert_eq!(diagonal, Feature::ViewportDiagonal.spec().default);
    }

    #[test]
    fn geometry_guards_negative_width() {
        let ctx = ContextRecord::new().with_viewport(-100.0, 768.0);
        let (_, aspect, _) = geometry(&ctx);
        assert_eq!(aspect, Feature::AspectRatio.spec().default);
    }

    #[test]
    fn geometry_of_full_hd() {
        let ctx = ContextRecord::new().with_viewport(1920.0, 1080.0);
        let (area, aspect, diagonal) = geometry(&ctx);
        assert!((aspect - 16.0 / 9.0).abs() < 1e-9);
        assert!(area > 0.0 && area < 1.0);
        assert!(diagonal > 0.0 && diagonal < 1.0);
    }
}
