//! Motion to color mapping
//!
//! Maps device orientation onto the color wheel:
//! - yaw sweeps the full hue circle, roll adds up to a third of a turn
//! - roll also drives saturation
//! - pitch drives brightness

use core::f32::consts::PI;

use libm::fmodf;

use crate::{
    math::{FULL_TURN, clampf},
    state::{BrightnessRange, ColorState},
};

const SATURATION_BASE: f32 = 0.35;
const SATURATION_SPAN: f32 = 0.65;
const MIN_SATURATION: f32 = 0.2;
const MAX_SATURATION: f32 = 1.0;
const BRIGHTNESS_BASE: f32 = 0.2;
const BRIGHTNESS_SPAN: f32 = 0.8;
const ROLL_HUE_SPAN: f32 = 120.0;

/// How motion updates treat relative offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPolicy {
    /// Motion is an absolute set: both offsets are cleared
    #[default]
    Absolute,
    /// Motion only replaces base values, offsets keep applying on top
    KeepOffsets,
}

/// Device orientation in radians
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub pitch: f32,
    pub roll: f32,
    pub yaw: f32,
}

impl Orientation {
    pub const fn new(pitch: f32, roll: f32, yaw: f32) -> Self {
        Self { pitch, roll, yaw }
    }
}

/// Color derived from an orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionColor {
    /// Hue in degrees, `[0, 360)`
    pub hue: f32,
    /// Saturation, `[0.2, 1]`
    pub saturation: f32,
    /// Brightness, inside the configured range
    pub brightness: f32,
}

/// Map an orientation to hue, saturation and brightness
pub fn motion_color(orientation: Orientation, range: BrightnessRange) -> MotionColor {
    let norm_roll = clampf((orientation.roll + PI) / (2.0 * PI), 0.0, 1.0);
    let norm_yaw = clampf((orientation.yaw + PI) / (2.0 * PI), 0.0, 1.0);
    let norm_pitch = clampf((orientation.pitch + PI / 2.0) / PI, 0.0, 1.0);

    MotionColor {
        hue: fmodf(norm_yaw * FULL_TURN + norm_roll * ROLL_HUE_SPAN, FULL_TURN),
        saturation: clampf(
            SATURATION_BASE + norm_roll * SATURATION_SPAN,
            MIN_SATURATION,
            MAX_SATURATION,
        ),
        brightness: range.clamp(BRIGHTNESS_BASE + norm_pitch * BRIGHTNESS_SPAN),
    }
}

/// Commit a motion sample into the color state
///
/// Returns the color that was committed.
pub fn commit_motion(
    state: &mut ColorState,
    orientation: Orientation,
    policy: MotionPolicy,
) -> MotionColor {
    let color = motion_color(orientation, state.range());
    state.set_base(color.hue, color.saturation, color.brightness);
    if policy == MotionPolicy::Absolute {
        state.clear_offsets();
    }
    color
}
