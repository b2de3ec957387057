use crate::color::Rgb;

/// LED turned off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Pack a color into the `0x00GGRRBB` word shifted out by WS2812 drivers
///
/// PIO based drivers usually shift this word left by 8 before pushing it
/// to the state machine.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn grb_word(color: Rgb) -> u32 {
    ((color.g as u32) << 16) | ((color.r as u32) << 8) | color.b as u32
}
