//! Lit LED segment
//!
//! A segment is an inclusive, 0-based index range inside a strip of fixed
//! length. Every LED outside the segment is forced off on render.

use crate::color::{BLACK, Rgb};

/// Inclusive range of lit LEDs
///
/// Always satisfies `start <= end <= len - 1` for the strip length it was
/// built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    start: u16,
    end: u16,
}

impl Segment {
    /// Segment covering the whole strip
    pub fn full(len: usize) -> Self {
        Self {
            start: 0,
            end: last_index(len),
        }
    }

    /// Create a segment, clamping both bounds into the strip
    ///
    /// If clamping leaves `start > end`, `end` is pulled up to `start`.
    pub fn new(start: usize, end: usize, len: usize) -> Self {
        Self::repaired(clamp_index(start, len), clamp_index(end, len), len)
    }

    /// Move the first lit LED, keeping the current end where possible
    #[must_use]
    pub fn with_start(self, index: usize, len: usize) -> Self {
        Self::repaired(clamp_index(index, len), self.end, len)
    }

    /// Move the last lit LED, never past the current start
    #[must_use]
    pub fn with_end(self, index: usize, len: usize) -> Self {
        Self::repaired(self.start, clamp_index(index, len), len)
    }

    /// Re-fit the segment into a strip of `len` LEDs
    #[must_use]
    pub fn fit(self, len: usize) -> Self {
        Self::repaired(self.start, self.end, len)
    }

    pub const fn start(self) -> u16 {
        self.start
    }

    pub const fn end(self) -> u16 {
        self.end
    }

    /// Get the number of LEDs in the segment
    pub fn count(self) -> usize {
        usize::from(self.end - self.start) + 1
    }

    /// Check if the LED at `index` is lit by this segment
    pub fn contains(self, index: usize) -> bool {
        (usize::from(self.start)..=usize::from(self.end)).contains(&index)
    }

    fn repaired(start: u16, end: u16, len: usize) -> Self {
        let last = last_index(len);
        let start = start.min(last);
        let end = end.min(last).max(start);
        Self { start, end }
    }
}

/// Paint `color` over the segment and turn every other LED off
///
/// The whole buffer is rewritten, so nothing from a previous segment survives.
pub fn render_segment(leds: &mut [Rgb], segment: Segment, color: Rgb) {
    for (index, led) in leds.iter_mut().enumerate() {
        *led = if segment.contains(index) { color } else { BLACK };
    }
}

fn last_index(len: usize) -> u16 {
    u16::try_from(len.saturating_sub(1)).unwrap_or(u16::MAX)
}

fn clamp_index(index: usize, len: usize) -> u16 {
    u16::try_from(index)
        .unwrap_or(u16::MAX)
        .min(last_index(len))
}
