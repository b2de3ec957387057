//! Host side adapter
//!
//! Pairs a [`LightController`] with the two collaborators a transport has to
//! provide: an [`OutputDriver`] that pushes pixels to the physical strip and a
//! [`SystemReset`] capability for the `RESET` command.

use core::fmt;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::channel::PayloadReceiver;
use crate::command::CommandError;
use crate::controller::{Applied, LightController};
use crate::OutputDriver;

/// The host could not reset the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetError;

impl fmt::Display for ResetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "system reset failed")
    }
}

/// Platform reset, e.g. a watchdog reboot
///
/// On success the call usually never returns.
pub trait SystemReset {
    fn request_reset(&mut self) -> Result<(), ResetError>;
}

/// Error while handling a payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripError {
    Command(CommandError),
    Reset(ResetError),
}

impl From<CommandError> for StripError {
    fn from(err: CommandError) -> Self {
        Self::Command(err)
    }
}

impl From<ResetError> for StripError {
    fn from(err: ResetError) -> Self {
        Self::Reset(err)
    }
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command(err) => err.fmt(f),
            Self::Reset(err) => err.fmt(f),
        }
    }
}

/// LED strip driven by received payloads
///
/// # Usage
///
/// ```ignore
/// static PAYLOADS: PayloadChannel<512, 4> = PayloadChannel::new();
///
/// let controller = LightController::<300>::new(&ControllerConfig::default());
/// let mut strip = LightStrip::new(controller, driver, WatchdogReset);
///
/// // BLE write callback
/// let _ = PAYLOADS.try_send(bytes);
///
/// // Main loop
/// loop {
///     strip.drain(&PAYLOADS.receiver());
/// }
/// ```
pub struct LightStrip<O: OutputDriver, R: SystemReset, const NUM_LEDS: usize> {
    output: O,
    reset: R,
    controller: LightController<NUM_LEDS>,
}

impl<O: OutputDriver, R: SystemReset, const NUM_LEDS: usize> LightStrip<O, R, NUM_LEDS> {
    /// Create a strip and push the controller's current buffer once
    pub fn new(controller: LightController<NUM_LEDS>, output: O, reset: R) -> Self {
        let mut strip = Self {
            output,
            reset,
            controller,
        };
        strip.show();
        strip
    }

    /// Apply one payload and push the result to the strip
    ///
    /// Nothing is written when the payload is rejected. A reset request is
    /// forwarded to [`SystemReset`] instead of writing.
    pub fn handle(&mut self, payload: &[u8]) -> Result<Applied, StripError> {
        let applied = self.controller.apply(payload)?;
        if applied == Applied::ResetRequested {
            self.reset.request_reset()?;
        } else {
            self.show();
        }
        Ok(applied)
    }

    /// Handle every queued payload in arrival order
    ///
    /// Rejected payloads are skipped. Stops after a reset request.
    /// Returns the number of payloads taken from the queue.
    pub fn drain<const CAP: usize, const DEPTH: usize>(
        &mut self,
        payloads: &PayloadReceiver<'_, CAP, DEPTH>,
    ) -> usize {
        let mut handled = 0;
        while let Ok(payload) = payloads.try_receive() {
            handled += 1;
            match self.handle(&payload) {
                Ok(Applied::ResetRequested) => break,
                Ok(_) => {}
                Err(_err) => {
                    #[cfg(feature = "esp32-log")]
                    println!("[LightStrip.drain] skipping payload: {}", _err);
                }
            }
        }
        handled
    }

    /// Push the current buffer to the output driver
    pub fn show(&mut self) {
        self.output.write(self.controller.frame());
    }

    pub fn controller(&self) -> &LightController<NUM_LEDS> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut LightController<NUM_LEDS> {
        &mut self.controller
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
