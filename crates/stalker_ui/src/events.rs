//! # Widget Event Channel
//!
//! Input notifications flow from whatever owns the platform event loop into
//! the frame driver over a bounded channel:
//!
//! ```text
//! ┌──────────────┐      ┌─────────────┐      ┌──────────────┐
//! │ Event Source │─────>│   Channel   │─────>│ Frame Driver │
//! │ (platform)   │      │  (bounded)  │      │ (per tick)   │
//! └──────────────┘      └─────────────┘      └──────────────┘
//! ```
//!
//! Sends never block: pointer-move bursts beyond the channel capacity are
//! dropped, and the next sample supersedes them anyway.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

/// Notifications the widget reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StalkerEvent {
    /// The pointer moved to new client coordinates.
    PointerMoved {
        /// Client X coordinate.
        x: f32,
        /// Client Y coordinate.
        y: f32,
    },
    /// The window was resized.
    Resized {
        /// New viewport width.
        width: f32,
        /// New viewport height.
        height: f32,
    },
}

/// Event bus between input sources and the frame driver.
///
/// Pre-allocates a bounded channel so a pointer-move storm cannot grow
/// memory without bound.
pub struct EventBus {
    /// Sender end - held by event producers.
    sender: Sender<StalkerEvent>,
    /// Receiver end - held by the frame driver.
    receiver: Receiver<StalkerEvent>,
}

impl EventBus {
    /// Creates a new event bus.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum events in flight before drops. 256 comfortably
    ///   covers one frame of pointer events on high-rate mice.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Creates a sender handle (clone for multiple producers).
    #[must_use]
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Creates a receiver handle.
    #[must_use]
    pub fn receiver(&self) -> EventReceiver {
        EventReceiver {
            receiver: self.receiver.clone(),
        }
    }
}

/// Handle for sending events.
#[derive(Clone)]
pub struct EventSender {
    sender: Sender<StalkerEvent>,
}

impl EventSender {
    /// Sends an event (non-blocking).
    ///
    /// Returns `false` if the event was dropped - either the channel is full
    /// (a later sample will supersede it) or the driver is gone.
    #[inline]
    pub fn send(&self, event: StalkerEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                // Channel full - a later sample supersedes the dropped one.
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                // Driver stopped - nothing left to animate.
                false
            }
        }
    }
}

/// Handle for receiving events.
#[derive(Clone)]
pub struct EventReceiver {
    receiver: Receiver<StalkerEvent>,
}

impl EventReceiver {
    /// Receives all pending events (non-blocking).
    ///
    /// Called once per frame tick; handling is run-to-completion.
    #[inline]
    pub fn drain(&self) -> Vec<StalkerEvent> {
        let mut events = Vec::with_capacity(self.receiver.len());
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }

    /// Receives one event (non-blocking).
    #[inline]
    pub fn try_recv(&self) -> Option<StalkerEvent> {
        self.receiver.try_recv().ok()
    }

    /// Returns true if there are pending events.
    #[inline]
    #[must_use]
    pub fn has_events(&self) -> bool {
        !self.receiver.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_send_receive() {
        let bus = EventBus::new(16);
        let sender = bus.sender();
        let receiver = bus.receiver();

        assert!(sender.send(StalkerEvent::PointerMoved { x: 10.0, y: 20.0 }));
        assert!(receiver.has_events());

        let received = receiver.try_recv().unwrap();
        assert_eq!(received, StalkerEvent::PointerMoved { x: 10.0, y: 20.0 });
    }

    #[test]
    fn test_full_channel_drops_instead_of_blocking() {
        let bus = EventBus::new(2);
        let sender = bus.sender();

        assert!(sender.send(StalkerEvent::PointerMoved { x: 1.0, y: 1.0 }));
        assert!(sender.send(StalkerEvent::PointerMoved { x: 2.0, y: 2.0 }));
        // Third send exceeds capacity - dropped, not blocked.
        assert!(!sender.send(StalkerEvent::PointerMoved { x: 3.0, y: 3.0 }));
    }

    #[test]
    fn test_drain_empties_channel() {
        let bus = EventBus::new(16);
        let sender = bus.sender();
        let receiver = bus.receiver();

        for i in 0..10 {
            let _ = sender.send(StalkerEvent::PointerMoved {
                x: i as f32,
                y: 0.0,
            });
        }

        let events = receiver.drain();
        assert_eq!(events.len(), 10);
        assert!(!receiver.has_events());
    }
}
