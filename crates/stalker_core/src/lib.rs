//! # Stalker Core
//!
//! Math and motion primitives for a cursor-trailing widget:
//!
//! - [`Vec2`] - pointer-space positions and movement deltas
//! - [`angle`] - degree-domain helpers (headings, shortest-arc differences)
//! - [`Easing`] - deceleration curves for visual motion
//! - [`Tween`] - a retargetable fixed-duration interpolation ("ease-to")
//!
//! ## Design Philosophy
//!
//! The widget must GLIDE after the pointer, it must never teleport. Every
//! primitive here exists to turn a raw input sample into decelerating motion:
//! positions ease over a fixed duration, headings turn along the shorter arc.
//!
//! Nothing in this crate touches a clock, a thread, or a platform API -
//! callers feed in delta time and get values back.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod angle;
pub mod easing;
pub mod math;
pub mod tween;

pub use angle::{heading_degrees, shortest_angle_delta, wrap_degrees};
pub use easing::Easing;
pub use math::Vec2;
pub use tween::{Tween, Tween2D};
