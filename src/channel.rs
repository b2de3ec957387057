//! Bounded payload queue for `no_std` hosts.
//!
//! The controller is single consumer and must not be called reentrantly.
//! Transports that deliver payloads from interrupts or from several tasks
//! (a BLE write callback next to a motion sampling timer, say) push into a
//! [`PayloadChannel`] and a single loop drains it into the strip.
//!
//! Synchronization is a `critical-section` mutex around a `heapless::Deque`.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::{Deque, Vec};

/// Owned copy of one received payload, at most `CAP` bytes
pub type Payload<const CAP: usize> = Vec<u8, CAP>;

/// Error returned when the queue is full, hands the payload back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Error returned when the queue is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Queue of up to `DEPTH` payloads of at most `CAP` bytes each.
pub struct PayloadChannel<const CAP: usize, const DEPTH: usize> {
    inner: Mutex<RefCell<Deque<Payload<CAP>, DEPTH>>>,
}

impl<const CAP: usize, const DEPTH: usize> PayloadChannel<CAP, DEPTH> {
    /// Create an empty queue, usable in a `static`.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for a transport callback.
    pub const fn sender(&self) -> PayloadSender<'_, CAP, DEPTH> {
        PayloadSender { channel: self }
    }

    /// Handle for the loop that feeds the strip.
    pub const fn receiver(&self) -> PayloadReceiver<'_, CAP, DEPTH> {
        PayloadReceiver { channel: self }
    }

    /// Queue a copy of `bytes`, cut to `CAP` bytes.
    pub fn try_send(&self, bytes: &[u8]) -> Result<(), TrySendError<Payload<CAP>>> {
        let mut payload = Payload::<CAP>::new();
        // Cannot fail after the cut
        let _ = payload.extend_from_slice(&bytes[..bytes.len().min(CAP)]);
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(payload).map_err(TrySendError)
        })
    }

    /// Take the oldest payload.
    pub fn try_receive(&self) -> Result<Payload<CAP>, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Number of queued payloads.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const CAP: usize, const DEPTH: usize> Default for PayloadChannel<CAP, DEPTH> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer side of a [`PayloadChannel`].
#[derive(Clone, Copy)]
pub struct PayloadSender<'a, const CAP: usize, const DEPTH: usize> {
    channel: &'a PayloadChannel<CAP, DEPTH>,
}

impl<const CAP: usize, const DEPTH: usize> PayloadSender<'_, CAP, DEPTH> {
    /// Queue a copy of `bytes`, cut to `CAP` bytes.
    pub fn try_send(&self, bytes: &[u8]) -> Result<(), TrySendError<Payload<CAP>>> {
        self.channel.try_send(bytes)
    }
}

/// Consumer side of a [`PayloadChannel`].
#[derive(Clone, Copy)]
pub struct PayloadReceiver<'a, const CAP: usize, const DEPTH: usize> {
    channel: &'a PayloadChannel<CAP, DEPTH>,
}

impl<const CAP: usize, const DEPTH: usize> PayloadReceiver<'_, CAP, DEPTH> {
    /// Take the oldest payload.
    pub fn try_receive(&self) -> Result<Payload<CAP>, TryReceiveError> {
        self.channel.try_receive()
    }
}
