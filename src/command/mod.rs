//! Command protocol parser
//!
//! Turns one received payload into a typed [`Command`]. Binary frames are
//! recognized on the raw bytes; everything else goes through an ordered table
//! of text rules. A rule only commits once its numbers scan, otherwise the
//! next rule gets a chance.

mod scan;

use core::fmt;

use heapless::Vec;

use crate::{frame::Frame, motion::Orientation};

/// Size of the text buffer including the terminator slot
pub const PAYLOAD_CAPACITY: usize = 128;

/// Longest text payload that is matched, longer ones are cut
pub const MAX_TEXT_LEN: usize = PAYLOAD_CAPACITY - 1;

/// Bounded copy of a text payload
pub type TextPayload = Vec<u8, PAYLOAD_CAPACITY>;

/// A parsed command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command<'a> {
    /// Binary run-list frame
    Frame(Frame<'a>),
    /// Ask the host to reset the device
    Reset,
    /// Absolute hue in degrees
    SetHue(f32),
    /// Absolute brightness in percent
    SetBrightness(f32),
    /// Relative hue change in degrees
    AdjustHue(f32),
    /// Relative brightness change in percent
    AdjustBrightness(f32),
    /// New first lit LED, 0-based
    SegmentStart(usize),
    /// New last lit LED, 0-based
    SegmentEnd(usize),
    /// Device orientation sample
    Motion(Orientation),
}

/// Payload matched no command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// No rule matched, carries the (truncated) text that was tried
    Unrecognized(TextPayload),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized(text) => match core::str::from_utf8(text) {
                Ok(text) => write!(f, "unrecognized command: '{text}'"),
                Err(_) => write!(f, "unrecognized command: {} non-utf8 bytes", text.len()),
            },
        }
    }
}

type TextRule = fn(&[u8]) -> Option<Command<'static>>;

/// Text rules in priority order
const TEXT_RULES: [TextRule; 8] = [
    parse_reset,
    parse_set_hue,
    parse_set_brightness,
    parse_adjust_hue,
    parse_adjust_brightness,
    parse_segment_start,
    parse_segment_end,
    parse_motion,
];

impl<'a> Command<'a> {
    /// Parse one payload
    ///
    /// Frames are checked on the full payload. Text is first bounded by
    /// [`bounded_text`].
    pub fn parse(payload: &'a [u8]) -> Result<Self, CommandError> {
        if let Ok(frame) = Frame::parse(payload) {
            return Ok(Self::Frame(frame));
        }

        let text = bounded_text(payload);
        TEXT_RULES
            .iter()
            .find_map(|rule| rule(text.as_slice()))
            .ok_or(CommandError::Unrecognized(text))
    }
}

/// Copy a payload the way a NUL terminated C buffer would see it
///
/// At most [`MAX_TEXT_LEN`] bytes are kept and the text ends at the first NUL.
pub fn bounded_text(payload: &[u8]) -> TextPayload {
    let payload = &payload[..payload.len().min(MAX_TEXT_LEN)];
    let end = payload
        .iter()
        .position(|&byte| byte == 0)
        .unwrap_or(payload.len());

    let mut text = TextPayload::new();
    // Never fails, `end` is within capacity
    let _ = text.extend_from_slice(&payload[..end]);
    text
}

fn parse_reset(text: &[u8]) -> Option<Command<'static>> {
    text.starts_with(b"RESET").then_some(Command::Reset)
}

fn parse_set_hue(text: &[u8]) -> Option<Command<'static>> {
    scan::keyword_float(text, b"H_SET,").map(Command::SetHue)
}

fn parse_set_brightness(text: &[u8]) -> Option<Command<'static>> {
    scan::keyword_float(text, b"B_SET,").map(Command::SetBrightness)
}

fn parse_adjust_hue(text: &[u8]) -> Option<Command<'static>> {
    scan::keyword_float(text, b"H,").map(Command::AdjustHue)
}

fn parse_adjust_brightness(text: &[u8]) -> Option<Command<'static>> {
    scan::keyword_float(text, b"B,").map(Command::AdjustBrightness)
}

fn parse_segment_start(text: &[u8]) -> Option<Command<'static>> {
    scan::keyword_uint(text, b"SEG_START,").map(|value| Command::SegmentStart(to_index(value)))
}

fn parse_segment_end(text: &[u8]) -> Option<Command<'static>> {
    scan::keyword_uint(text, b"SEG_END,").map(|value| Command::SegmentEnd(to_index(value)))
}

fn parse_motion(text: &[u8]) -> Option<Command<'static>> {
    scan::float_triplet(text)
        .map(|(pitch, roll, yaw)| Command::Motion(Orientation::new(pitch, roll, yaw)))
}

/// Convert a 1-based LED number to a 0-based index, `0` maps to `0`
fn to_index(value: u32) -> usize {
    usize::try_from(value.saturating_sub(1)).unwrap_or(usize::MAX)
}
