#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::command::{Command, CommandError};
use crate::frame::{Frame, FrameReport};
use crate::motion::{MotionPolicy, Orientation, commit_motion};
use crate::segment::Segment;
use crate::state::{
    BrightnessRange, ColorState, DEFAULT_BRIGHTNESS, DEFAULT_HUE, DEFAULT_SATURATION,
};

/// Configuration for the light controller
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Initial hue in degrees
    pub hue: f32,
    /// Initial saturation, `[0, 1]`
    pub saturation: f32,
    /// Initial brightness, `[0, 1]`
    pub brightness: f32,
    /// Limits of the effective brightness
    pub brightness_range: BrightnessRange,
    /// Initial lit segment, the whole strip if `None`
    pub segment: Option<Segment>,
    /// Offset handling for motion samples
    pub motion_policy: MotionPolicy,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            hue: DEFAULT_HUE,
            saturation: DEFAULT_SATURATION,
            brightness: DEFAULT_BRIGHTNESS,
            brightness_range: BrightnessRange::default(),
            segment: None,
            motion_policy: MotionPolicy::default(),
        }
    }
}

/// What a payload did to the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Color model changed and the segment was re-rendered
    Color,
    /// A frame was painted directly into the buffer
    Frame(FrameReport),
    /// The host has to reset the device
    ResetRequested,
}

/// Light controller - owns the color model and the pixel buffer
///
/// Not reentrant: hosts with several payload sources must serialize calls,
/// see [`crate::channel`].
pub struct LightController<const NUM_LEDS: usize> {
    state: ColorState,
    segment: Segment,
    motion_policy: MotionPolicy,
    frame_buffer: [Rgb; NUM_LEDS],
}

impl<const NUM_LEDS: usize> LightController<NUM_LEDS> {
    /// Create a controller and render the initial color
    pub fn new(config: &ControllerConfig) -> Self {
        let mut controller = Self {
            state: ColorState::new(
                config.hue,
                config.saturation,
                config.brightness,
                config.brightness_range,
            ),
            segment: config
                .segment
                .map_or_else(|| Segment::full(NUM_LEDS), |segment| segment.fit(NUM_LEDS)),
            motion_policy: config.motion_policy,
            frame_buffer: [Rgb::default(); NUM_LEDS],
        };
        controller.render();
        controller
    }

    /// Apply one received payload
    ///
    /// Unrecognized payloads leave the state and the buffer untouched.
    pub fn apply(&mut self, payload: &[u8]) -> Result<Applied, CommandError> {
        let command = match Command::parse(payload) {
            Ok(command) => command,
            Err(err) => {
                #[cfg(feature = "esp32-log")]
                println!("[LightController.apply] {}", err);
                return Err(err);
            }
        };
        Ok(self.execute(command))
    }

    /// Execute an already parsed command
    pub fn execute(&mut self, command: Command<'_>) -> Applied {
        match command {
            Command::Frame(frame) => return Applied::Frame(self.apply_frame(&frame)),
            Command::Reset => {
                #[cfg(feature = "esp32-log")]
                println!("[LightController.execute] reset requested");
                return Applied::ResetRequested;
            }
            Command::SetHue(degrees) => self.state.set_hue(degrees),
            Command::SetBrightness(percent) => self.state.set_brightness(percent),
            Command::AdjustHue(delta) => self.state.adjust_hue(delta),
            Command::AdjustBrightness(percent) => self.state.adjust_brightness(percent / 100.0),
            Command::SegmentStart(index) => {
                self.segment = self.segment.with_start(index, NUM_LEDS);
            }
            Command::SegmentEnd(index) => {
                self.segment = self.segment.with_end(index, NUM_LEDS);
            }
            Command::Motion(orientation) => {
                commit_motion(&mut self.state, orientation, self.motion_policy);
            }
        }
        self.render();
        Applied::Color
    }

    /// Set the base hue in degrees and re-render
    pub fn set_hue(&mut self, degrees: f32) {
        self.execute(Command::SetHue(degrees));
    }

    /// Set the base brightness in percent and re-render
    pub fn set_brightness(&mut self, percent: f32) {
        self.execute(Command::SetBrightness(percent));
    }

    /// Rotate the hue offset and re-render
    pub fn adjust_hue(&mut self, delta: f32) {
        self.execute(Command::AdjustHue(delta));
    }

    /// Move the effective brightness by a normalized delta and re-render
    pub fn adjust_brightness(&mut self, delta: f32) {
        self.state.adjust_brightness(delta);
        self.render();
    }

    /// Move the first lit LED (0-based) and re-render
    pub fn set_segment_start(&mut self, index: usize) {
        self.execute(Command::SegmentStart(index));
    }

    /// Move the last lit LED (0-based) and re-render
    pub fn set_segment_end(&mut self, index: usize) {
        self.execute(Command::SegmentEnd(index));
    }

    /// Commit a motion sample (radians) and re-render
    pub fn render_motion_color(&mut self, pitch: f32, roll: f32, yaw: f32) {
        self.execute(Command::Motion(Orientation::new(pitch, roll, yaw)));
    }

    /// Paint a frame directly, bypassing the color model
    ///
    /// Until the next color command the state no longer matches the buffer.
    pub fn apply_frame(&mut self, frame: &Frame<'_>) -> FrameReport {
        frame.paint(&mut self.frame_buffer)
    }

    /// Render the effective color over the segment
    pub fn render(&mut self) {
        self.state.render(&mut self.frame_buffer, self.segment);
    }

    /// Current pixel buffer
    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer
    }

    pub const fn state(&self) -> &ColorState {
        &self.state
    }

    pub const fn segment(&self) -> Segment {
        self.segment
    }

    pub const fn motion_policy(&self) -> MotionPolicy {
        self.motion_policy
    }
}
