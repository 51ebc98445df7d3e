//! # Stalker UI
//!
//! A cursor-trailing widget: a visual marker glides after the pointer and
//! rotates toward the direction of travel, always along the shorter arc.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                        WIDGET PIPELINE                           │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  Pointer/Resize Events → Controller → Tween Bank → Surface       │
//! │          ↓                   ↓            ↓           ↓          │
//! │    Event Channel       Heading Math   Easing      Transform      │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The controller owns all widget state: the centered pointer position, the
//! smoothed heading, and the viewport (refreshed behind a debounce). Each
//! frame it advances the heading one shortest-arc step toward its target and
//! lets the tween bank flush eased values to the render surface.
//!
//! ## Design Philosophy
//!
//! - The marker stays hidden until the first pointer sample, then snaps into
//!   place once and fades in. After that it only ever eases.
//! - Rotation turns the SHORT way around the circle. 350 deg to 10 deg is a
//!   20 deg turn, not a 340 deg spin.
//! - The frame task is owned, cancelable, and dies with the widget.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animations;
pub mod config;
pub mod driver;
pub mod error;
pub mod events;
pub mod stalker;
pub mod surface;
pub mod viewport;

pub use animations::{StalkerAnimations, TweenAnimations};
pub use config::StalkerConfig;
pub use driver::{FrameDriver, StalkerSnapshot};
pub use error::{StalkerError, StalkerResult};
pub use events::{EventBus, EventReceiver, EventSender, StalkerEvent};
pub use stalker::{StalkerController, StalkerState};
pub use surface::{RecordingLookup, RecordingSurface, StalkerSurface, SurfaceLookup, SurfaceOp};
pub use viewport::{ResizeDebounce, Viewport};
