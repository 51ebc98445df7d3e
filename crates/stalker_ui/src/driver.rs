//! The frame driver.
//!
//! The widget needs a heartbeat: one tick per frame to step the heading and
//! advance the tweens. The driver owns that heartbeat as a cancelable task
//! bound to the widget's lifetime - a dedicated thread that drains the
//! event channel, steps the controller, and publishes a state snapshot.
//! `stop()` (or dropping the driver) signals the loop and joins it; nothing
//! keeps running once the widget is gone.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use stalker_core::Vec2;

use crate::animations::StalkerAnimations;
use crate::events::{EventBus, EventReceiver, EventSender, StalkerEvent};
use crate::stalker::StalkerController;

/// Maximum delta time fed to a single frame, in seconds.
///
/// After a stall (suspended laptop, debugger pause) the tweens get one
/// clamped step instead of a visible jump across the screen.
const MAX_DELTA_TIME: f32 = 0.1;

/// Event channel capacity - comfortably one frame of events from a
/// high-rate mouse.
const EVENT_CAPACITY: usize = 256;

/// A copyable snapshot of the widget state, published once per frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct StalkerSnapshot {
    /// Centered pointer position.
    pub position: Vec2,
    /// Smoothed heading in [0, 360).
    pub degrees: f32,
    /// Target heading in [0, 360).
    pub target_degrees: f32,
    /// True once the first pointer sample has been seen.
    pub appeared: bool,
    /// Frames ticked so far.
    pub frame: u64,
}

/// Owns the widget's frame thread.
///
/// Created with [`FrameDriver::spawn`]; stopped explicitly with
/// [`FrameDriver::stop`] or implicitly on drop.
pub struct FrameDriver {
    /// Signals the loop to exit.
    shutdown: Arc<AtomicBool>,
    /// The frame thread, joined on stop.
    handle: Option<JoinHandle<()>>,
    /// Template sender for event producers.
    sender: EventSender,
    /// Latest published state.
    snapshot: Arc<Mutex<StalkerSnapshot>>,
}

impl FrameDriver {
    /// Starts the frame thread for a controller.
    ///
    /// The tick rate comes from the controller's configuration. Events sent
    /// through [`FrameDriver::sender`] handles are drained at the start of
    /// every tick, run-to-completion.
    #[must_use]
    pub fn spawn<A>(controller: StalkerController<A>) -> Self
    where
        A: StalkerAnimations + Send + 'static,
    {
        let shutdown = Arc::new(AtomicBool::new(false));
        let snapshot = Arc::new(Mutex::new(StalkerSnapshot::default()));
        let bus = EventBus::new(EVENT_CAPACITY);
        let sender = bus.sender();
        let receiver = bus.receiver();
        let tick = Duration::from_secs_f64(1.0 / f64::from(controller.config().tick_rate));

        let loop_shutdown = Arc::clone(&shutdown);
        let loop_snapshot = Arc::clone(&snapshot);
        let handle = thread::spawn(move || {
            Self::frame_loop(controller, &receiver, &loop_shutdown, &loop_snapshot, tick);
        });

        tracing::info!(tick_us = tick.as_micros() as u64, "frame driver started");

        Self {
            shutdown,
            handle: Some(handle),
            sender,
            snapshot,
        }
    }

    /// Frame thread main loop.
    fn frame_loop<A>(
        mut controller: StalkerController<A>,
        receiver: &EventReceiver,
        shutdown: &AtomicBool,
        snapshot: &Mutex<StalkerSnapshot>,
        tick: Duration,
    ) where
        A: StalkerAnimations,
    {
        let start = Instant::now();
        let mut last = start;
        let mut frame: u64 = 0;

        while !shutdown.load(Ordering::Relaxed) {
            let frame_start = Instant::now();
            let now = frame_start.duration_since(start).as_secs_f32();
            let dt = frame_start
                .duration_since(last)
                .as_secs_f32()
                .min(MAX_DELTA_TIME);
            last = frame_start;

            for event in receiver.drain() {
                match event {
                    StalkerEvent::PointerMoved { x, y } => {
                        controller.handle_pointer_move(x, y);
                    }
                    StalkerEvent::Resized { width, height } => {
                        controller.handle_resize(width, height, now);
                    }
                }
            }

            controller.frame(now, dt);
            frame += 1;
            *snapshot.lock() = controller.snapshot(frame);

            let elapsed = frame_start.elapsed();
            if elapsed < tick {
                thread::sleep(tick - elapsed);
            } else {
                tracing::warn!(
                    frame,
                    elapsed_us = elapsed.as_micros() as u64,
                    "frame exceeded tick budget"
                );
            }
        }

        tracing::info!(frames = frame, "frame driver stopped");
    }

    /// Returns a sender handle for feeding events to the widget.
    #[must_use]
    pub fn sender(&self) -> EventSender {
        self.sender.clone()
    }

    /// Returns the latest published state snapshot.
    #[must_use]
    pub fn snapshot(&self) -> StalkerSnapshot {
        *self.snapshot.lock()
    }

    /// Returns true while the frame thread is alive.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stops the frame thread and waits for it to exit.
    ///
    /// Idempotent - later calls (including the drop) are no-ops.
    pub fn stop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for FrameDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animations::TweenAnimations;
    use crate::config::StalkerConfig;
    use crate::surface::RecordingSurface;
    use crate::viewport::Viewport;

    fn fast_config() -> StalkerConfig {
        StalkerConfig {
            tick_rate: 240,
            ..StalkerConfig::default()
        }
    }

    fn spawn_driver() -> (FrameDriver, RecordingSurface) {
        let surface = RecordingSurface::new();
        let log = surface.clone();
        let config = fast_config();
        let animations = TweenAnimations::new(surface, &config);
        let controller =
            StalkerController::new(animations, Viewport::new(1000.0, 800.0), config).unwrap();
        (FrameDriver::spawn(controller), log)
    }

    fn wait_until(deadline: Duration, mut done: impl FnMut() -> bool) -> bool {
        let limit = Instant::now() + deadline;
        while Instant::now() < limit {
            if done() {
                return true;
            }
            thread::sleep(Duration::from_millis(2));
        }
        done()
    }

    #[test]
    fn test_driver_processes_pointer_events() {
        let (mut driver, log) = spawn_driver();
        let sender = driver.sender();

        assert!(sender.send(StalkerEvent::PointerMoved { x: 600.0, y: 500.0 }));

        assert!(
            wait_until(Duration::from_secs(2), || driver.snapshot().appeared),
            "driver never processed the pointer event"
        );
        let snapshot = driver.snapshot();
        assert_eq!(snapshot.position, Vec2::new(100.0, 100.0));
        assert!(log.last_position().is_some());

        driver.stop();
    }

    #[test]
    fn test_driver_ticks_while_idle() {
        let (mut driver, _log) = spawn_driver();

        assert!(
            wait_until(Duration::from_secs(2), || driver.snapshot().frame > 5),
            "driver frames never advanced"
        );

        driver.stop();
    }

    #[test]
    fn test_stop_is_clean_and_idempotent() {
        let (mut driver, _log) = spawn_driver();
        assert!(driver.is_running());

        driver.stop();
        assert!(!driver.is_running());

        // Second stop (and the implicit one in drop) must be harmless.
        driver.stop();
    }

    #[test]
    fn test_drop_stops_the_thread() {
        let (driver, _log) = spawn_driver();
        let shutdown = Arc::clone(&driver.shutdown);

        drop(driver);
        assert!(shutdown.load(Ordering::SeqCst));
    }
}
