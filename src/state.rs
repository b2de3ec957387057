//! HSV color state with absolute and relative controls
//!
//! Base values are set by absolute commands. Relative commands only move
//! transient offsets, which are folded into the base at render time.

use crate::{
    color::{Rgb, hsv_to_rgb},
    math::{clampf, normalize_degrees},
    segment::{Segment, render_segment},
};

/// Default base hue in degrees
pub const DEFAULT_HUE: f32 = 25.0;
/// Default saturation
pub const DEFAULT_SATURATION: f32 = 1.0;
/// Default base brightness
pub const DEFAULT_BRIGHTNESS: f32 = 125.0 / 255.0;
/// Default lower brightness limit
pub const DEFAULT_MIN_BRIGHTNESS: f32 = 0.05;
/// Default upper brightness limit
pub const DEFAULT_MAX_BRIGHTNESS: f32 = 1.0;

/// Allowed range of the effective brightness
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessRange {
    min: f32,
    max: f32,
}

impl BrightnessRange {
    /// Create a brightness range, swapping the bounds if given in reverse
    pub fn new(min: f32, max: f32) -> Self {
        if min > max {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    pub const fn min(self) -> f32 {
        self.min
    }

    pub const fn max(self) -> f32 {
        self.max
    }

    /// Clamp a brightness into this range
    #[inline]
    pub fn clamp(self, brightness: f32) -> f32 {
        clampf(brightness, self.min, self.max)
    }
}

impl Default for BrightnessRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_BRIGHTNESS,
            max: DEFAULT_MAX_BRIGHTNESS,
        }
    }
}

/// Current color model of the strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorState {
    /// Base hue in degrees, `[0, 360)`
    hue: f32,
    /// Saturation, `[0, 1]`
    saturation: f32,
    /// Base brightness, inside `range`
    brightness: f32,
    /// Relative hue shift in degrees, `[0, 360)`
    hue_offset: f32,
    /// Relative brightness shift
    brightness_offset: f32,
    range: BrightnessRange,
}

impl ColorState {
    /// Create a new color state with zero offsets
    pub fn new(hue: f32, saturation: f32, brightness: f32, range: BrightnessRange) -> Self {
        Self {
            hue: normalize_degrees(hue),
            saturation: clampf(saturation, 0.0, 1.0),
            brightness: range.clamp(brightness),
            hue_offset: 0.0,
            brightness_offset: 0.0,
            range,
        }
    }

    pub const fn hue(&self) -> f32 {
        self.hue
    }

    pub const fn saturation(&self) -> f32 {
        self.saturation
    }

    pub const fn brightness(&self) -> f32 {
        self.brightness
    }

    pub const fn hue_offset(&self) -> f32 {
        self.hue_offset
    }

    pub const fn brightness_offset(&self) -> f32 {
        self.brightness_offset
    }

    pub const fn range(&self) -> BrightnessRange {
        self.range
    }

    /// Hue used for rendering: base plus offset, wrapped into `[0, 360)`
    pub fn effective_hue(&self) -> f32 {
        normalize_degrees(self.hue + self.hue_offset)
    }

    /// Brightness used for rendering: base plus offset, clamped into the range
    pub fn effective_brightness(&self) -> f32 {
        self.range.clamp(self.brightness + self.brightness_offset)
    }

    /// Set the base hue and drop any relative hue shift
    pub fn set_hue(&mut self, degrees: f32) {
        self.hue = normalize_degrees(degrees);
        self.hue_offset = 0.0;
    }

    /// Set the base brightness from a percentage and drop the relative shift
    pub fn set_brightness(&mut self, percent: f32) {
        self.brightness = self.range.clamp(percent / 100.0);
        self.brightness_offset = 0.0;
    }

    /// Rotate the hue offset by `delta` degrees
    ///
    /// The offset wraps, so a stream of small deltas keeps rotating smoothly.
    pub fn adjust_hue(&mut self, delta: f32) {
        self.hue_offset = normalize_degrees(self.hue_offset + delta);
    }

    /// Move the brightness offset by `delta` (normalized, not percent)
    ///
    /// The effective brightness is clamped, not the offset itself, so the
    /// offset never runs away past either limit.
    pub fn adjust_brightness(&mut self, delta: f32) {
        let desired = self
            .range
            .clamp(self.brightness + self.brightness_offset + delta);
        self.brightness_offset = desired - self.brightness;
    }

    /// Overwrite all base values at once
    pub(crate) fn set_base(&mut self, hue: f32, saturation: f32, brightness: f32) {
        self.hue = normalize_degrees(hue);
        self.saturation = clampf(saturation, 0.0, 1.0);
        self.brightness = self.range.clamp(brightness);
    }

    pub(crate) fn clear_offsets(&mut self) {
        self.hue_offset = 0.0;
        self.brightness_offset = 0.0;
    }

    /// Effective color of the lit segment
    pub fn color(&self) -> Rgb {
        hsv_to_rgb(
            self.effective_hue(),
            self.saturation,
            self.effective_brightness(),
        )
    }

    /// Render the effective color over `segment`, turning everything else off
    pub fn render(&self, leds: &mut [Rgb], segment: Segment) {
        render_segment(leds, segment, self.color());
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new(
            DEFAULT_HUE,
            DEFAULT_SATURATION,
            DEFAULT_BRIGHTNESS,
            BrightnessRange::default(),
        )
    }
}
