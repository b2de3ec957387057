//! Float helpers for the color model
//!
//! The crate is `no_std`, so transcendental helpers come from `libm`.

use libm::fmodf;

/// Full turn in degrees
pub const FULL_TURN: f32 = 360.0;

/// Clamp a value into `[min, max]`
///
/// Unlike `f32::clamp` this never panics, `min > max` simply yields `max`
/// for large values and `min` for small ones.
#[inline]
pub fn clampf(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

/// Wrap an angle in degrees into `[0, 360)`
///
/// Negative angles wrap forward, so `-90` becomes `270`.
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    let mut wrapped = fmodf(degrees, FULL_TURN);
    if wrapped < 0.0 {
        wrapped += FULL_TURN;
    }
    // Tiny negative remainders round up to exactly 360 after the shift
    if wrapped >= FULL_TURN {
        wrapped -= FULL_TURN;
    }
    wrapped
}
