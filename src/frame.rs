//! Binary run-list frames
//!
//! A frame paints solid color runs straight into the pixel buffer, skipping
//! the HSV model and the segment entirely.
//!
//! Wire format:
//!
//! ```text
//! [0xA0, version, run_count, (start_lo, start_hi, len_lo, len_hi, r, g, b) * run_count]
//! ```

use core::fmt;

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;

/// First byte of every frame
pub const FRAME_COMMAND_ID: u8 = 0xA0;
/// The only supported frame version
pub const FRAME_VERSION: u8 = 1;
/// Command id, version and run count
pub const FRAME_HEADER_LEN: usize = 3;
/// Encoded size of a single run
pub const RUN_LEN: usize = 7;
/// Largest number of runs a frame can declare
pub const MAX_RUNS: usize = 255;

/// One solid color span of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRun {
    /// First LED index
    pub start: u16,
    /// Number of LEDs
    pub length: u16,
    pub color: Rgb,
}

impl FrameRun {
    pub const fn new(start: u16, length: u16, color: Rgb) -> Self {
        Self {
            start,
            length,
            color,
        }
    }

    fn from_chunk(chunk: &[u8]) -> Self {
        Self {
            start: u16::from_le_bytes([chunk[0], chunk[1]]),
            length: u16::from_le_bytes([chunk[2], chunk[3]]),
            color: Rgb {
                r: chunk[4],
                g: chunk[5],
                b: chunk[6],
            },
        }
    }

    /// Encode the run in wire order
    pub fn to_bytes(self) -> [u8; RUN_LEN] {
        let start = self.start.to_le_bytes();
        let length = self.length.to_le_bytes();
        [
            start[0],
            start[1],
            length[0],
            length[1],
            self.color.r,
            self.color.g,
            self.color.b,
        ]
    }

    /// Paint the run, silently cut at the end of `leds`
    pub fn paint(self, leds: &mut [Rgb]) {
        let start = usize::from(self.start);
        let end = start
            .saturating_add(usize::from(self.length))
            .min(leds.len());
        if start < end {
            leds[start..end].fill(self.color);
        }
    }
}

/// The payload does not carry the frame signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotAFrame;

impl fmt::Display for NotAFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "payload is not a frame")
    }
}

/// Outcome of painting a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Every declared run was applied
    Complete,
    /// The payload ended before all declared runs; earlier runs stay applied
    Truncated,
    /// Version byte is not supported, nothing was painted
    UnsupportedVersion(u8),
}

/// Report of a painted frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// Run count from the header
    pub declared: u8,
    /// Runs actually painted
    pub applied: u8,
    pub status: FrameStatus,
}

/// A recognized frame borrowed from a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    version: u8,
    declared: u8,
    body: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Recognize a frame by its signature
    ///
    /// Only the signature is checked here, the version and body are validated
    /// when the frame is painted.
    pub fn parse(bytes: &'a [u8]) -> Result<Self, NotAFrame> {
        if !is_frame(bytes) {
            return Err(NotAFrame);
        }
        Ok(Self {
            version: bytes[1],
            declared: bytes[2],
            body: &bytes[FRAME_HEADER_LEN..],
        })
    }

    pub const fn version(&self) -> u8 {
        self.version
    }

    /// Run count from the header
    pub const fn declared_runs(&self) -> u8 {
        self.declared
    }

    pub const fn is_supported(&self) -> bool {
        self.version == FRAME_VERSION
    }

    /// Check if the body is too short for the declared run count
    pub fn is_truncated(&self) -> bool {
        self.body.len() / RUN_LEN < usize::from(self.declared)
    }

    /// Iterate over the complete runs of a supported frame
    ///
    /// Yields nothing for unsupported versions and stops at the first
    /// incomplete run.
    pub fn runs(self) -> impl Iterator<Item = FrameRun> + 'a {
        let count = if self.is_supported() {
            usize::from(self.declared)
        } else {
            0
        };
        self.body
            .chunks_exact(RUN_LEN)
            .take(count)
            .map(FrameRun::from_chunk)
    }

    /// Paint all runs in order, later runs win on overlap
    pub fn paint(&self, leds: &mut [Rgb]) -> FrameReport {
        if !self.is_supported() {
            #[cfg(feature = "esp32-log")]
            println!("[Frame.paint] unsupported frame version {}", self.version);
            return FrameReport {
                declared: self.declared,
                applied: 0,
                status: FrameStatus::UnsupportedVersion(self.version),
            };
        }

        let mut applied: u8 = 0;
        for run in self.runs() {
            run.paint(leds);
            applied += 1;
        }

        let status = if self.is_truncated() {
            #[cfg(feature = "esp32-log")]
            println!(
                "[Frame.paint] truncated frame: {} of {} runs applied",
                applied, self.declared
            );
            FrameStatus::Truncated
        } else {
            FrameStatus::Complete
        };

        FrameReport {
            declared: self.declared,
            applied,
            status,
        }
    }
}

/// Check the frame signature: at least a header and the frame command id
pub fn is_frame(bytes: &[u8]) -> bool {
    bytes.len() >= FRAME_HEADER_LEN && bytes[0] == FRAME_COMMAND_ID
}

/// Decode a frame and paint it into `leds`
pub fn decode_frame(bytes: &[u8], leds: &mut [Rgb]) -> Result<FrameReport, NotAFrame> {
    Ok(Frame::parse(bytes)?.paint(leds))
}

/// Error while authoring a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEncodeError {
    /// The run count byte is already at 255
    TooManyRuns,
    /// The output buffer has no room left
    BufferFull,
}

impl fmt::Display for FrameEncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyRuns => write!(f, "frame cannot hold more than {MAX_RUNS} runs"),
            Self::BufferFull => write!(f, "frame buffer is full"),
        }
    }
}

/// Builds a version 1 frame into a fixed capacity buffer
///
/// `CAP` is the largest payload the transport accepts.
#[derive(Debug, Clone)]
pub struct FrameBuilder<const CAP: usize> {
    bytes: Vec<u8, CAP>,
}

impl<const CAP: usize> FrameBuilder<CAP> {
    /// Start an empty frame
    pub fn new() -> Result<Self, FrameEncodeError> {
        let bytes = Vec::from_slice(&[FRAME_COMMAND_ID, FRAME_VERSION, 0])
            .map_err(|()| FrameEncodeError::BufferFull)?;
        Ok(Self { bytes })
    }

    /// Append a run
    pub fn push(&mut self, run: FrameRun) -> Result<(), FrameEncodeError> {
        if usize::from(self.bytes[2]) >= MAX_RUNS {
            return Err(FrameEncodeError::TooManyRuns);
        }
        self.bytes
            .extend_from_slice(&run.to_bytes())
            .map_err(|()| FrameEncodeError::BufferFull)?;
        self.bytes[2] += 1;
        Ok(())
    }

    /// Number of runs pushed so far
    pub fn len(&self) -> usize {
        usize::from(self.bytes[2])
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn finish(self) -> Vec<u8, CAP> {
        self.bytes
    }
}

/// Encode a run list as a version 1 frame
pub fn encode_frame<const CAP: usize>(
    runs: &[FrameRun],
) -> Result<Vec<u8, CAP>, FrameEncodeError> {
    let mut builder = FrameBuilder::<CAP>::new()?;
    for run in runs {
        builder.push(*run)?;
    }
    Ok(builder.finish())
}
