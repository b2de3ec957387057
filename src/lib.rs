#![no_std]

pub mod channel;
pub mod color;
pub mod command;
pub mod controller;
pub mod frame;
pub mod math;
pub mod motion;
pub mod segment;
pub mod state;
pub mod strip;

pub use channel::{PayloadChannel, PayloadReceiver, PayloadSender};
pub use command::{Command, CommandError};
pub use controller::{Applied, ControllerConfig, LightController};
pub use frame::{
    Frame, FrameBuilder, FrameReport, FrameRun, FrameStatus, NotAFrame, decode_frame,
};
pub use motion::{MotionPolicy, Orientation};
pub use segment::Segment;
pub use state::{BrightnessRange, ColorState};
pub use strip::{LightStrip, ResetError, StripError, SystemReset};

pub use color::{Rgb, hsv_to_rgb};

/// Abstract LED driver trait
///
/// Implement this trait to push rendered pixels to a physical strip.
/// [`LightStrip`] is generic over it.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
