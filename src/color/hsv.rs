use libm::{fabsf, fmodf};

use crate::{
    color::Rgb,
    math::{clampf, normalize_degrees},
};

/// Convert a floating point HSV triple to 8-bit RGB
///
/// # Arguments
/// * `hue` - Hue in degrees, wrapped into `[0, 360)`
/// * `saturation` - Saturation, expected in `[0, 1]`
/// * `value` - Value, expected in `[0, 1]`
///
/// Saturation and value are not clamped here, callers keep them in range.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Rgb {
    let hue = normalize_degrees(hue);

    let chroma = value * saturation;
    let x = chroma * (1.0 - fabsf(fmodf(hue / 60.0, 2.0) - 1.0));
    let m = value - chroma;

    let (r, g, b) = if hue < 60.0 {
        (chroma, x, 0.0)
    } else if hue < 120.0 {
        (x, chroma, 0.0)
    } else if hue < 180.0 {
        (0.0, chroma, x)
    } else if hue < 240.0 {
        (0.0, x, chroma)
    } else if hue < 300.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };

    Rgb {
        r: to_channel(r + m),
        g: to_channel(g + m),
        b: to_channel(b + m),
    }
}

/// Scale a `[0, 1]` component to a byte, truncating toward zero
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(component: f32) -> u8 {
    clampf(component * 255.0, 0.0, 255.0) as u8
}
