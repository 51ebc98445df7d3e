//! The render-surface seam.
//!
//! The widget never touches a DOM, a compositor, or a GPU. It talks to a
//! [`StalkerSurface`]: three "set element transform" primitives that a
//! platform backend implements. [`RecordingSurface`] is the headless
//! implementation used by tests and diagnostics.

use parking_lot::Mutex;
use std::sync::Arc;

use stalker_core::Vec2;

/// Transform primitives of the visual element being driven.
///
/// Implementations apply values immediately; all smoothing happens on the
/// widget side before a value reaches the surface.
pub trait StalkerSurface {
    /// Places the element at a centered-coordinate position.
    fn set_position(&mut self, position: Vec2);

    /// Rotates the element, in degrees.
    fn set_rotation(&mut self, degrees: f32);

    /// Sets the element opacity (0 = hidden, 1 = fully visible).
    fn set_opacity(&mut self, opacity: f32);
}

/// Looks up render surfaces by element identifier.
///
/// A missing element is not a recoverable condition for a purely visual
/// widget - binding fails up front rather than animating nothing.
pub trait SurfaceLookup {
    /// The surface type this lookup produces.
    type Surface: StalkerSurface;

    /// Resolves an element identifier to its surface, if it exists.
    fn find(&mut self, id: &str) -> Option<Self::Surface>;
}

/// A single recorded surface operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceOp {
    /// `set_position` was called.
    Position(Vec2),
    /// `set_rotation` was called.
    Rotation(f32),
    /// `set_opacity` was called.
    Opacity(f32),
}

/// A surface that records every operation applied to it.
///
/// Clones share the same log, so a test can keep one handle while the
/// widget owns the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Arc<Mutex<Vec<SurfaceOp>>>,
}

impl RecordingSurface {
    /// Creates an empty recording surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every recorded operation, in order.
    #[must_use]
    pub fn ops(&self) -> Vec<SurfaceOp> {
        self.ops.lock().clone()
    }

    /// Returns the most recently applied position, if any.
    #[must_use]
    pub fn last_position(&self) -> Option<Vec2> {
        self.ops.lock().iter().rev().find_map(|op| match op {
            SurfaceOp::Position(p) => Some(*p),
            _ => None,
        })
    }

    /// Returns the most recently applied rotation, if any.
    #[must_use]
    pub fn last_rotation(&self) -> Option<f32> {
        self.ops.lock().iter().rev().find_map(|op| match op {
            SurfaceOp::Rotation(r) => Some(*r),
            _ => None,
        })
    }

    /// Returns the most recently applied opacity, if any.
    #[must_use]
    pub fn last_opacity(&self) -> Option<f32> {
        self.ops.lock().iter().rev().find_map(|op| match op {
            SurfaceOp::Opacity(o) => Some(*o),
            _ => None,
        })
    }

    /// Returns how many operations have been recorded.
    #[must_use]
    pub fn op_count(&self) -> usize {
        self.ops.lock().len()
    }
}

impl StalkerSurface for RecordingSurface {
    fn set_position(&mut self, position: Vec2) {
        self.ops.lock().push(SurfaceOp::Position(position));
    }

    fn set_rotation(&mut self, degrees: f32) {
        self.ops.lock().push(SurfaceOp::Rotation(degrees));
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.ops.lock().push(SurfaceOp::Opacity(opacity));
    }
}

/// A lookup over a fixed set of recording surfaces, for tests and headless
/// runs: every known id resolves to a fresh handle onto the same log.
#[derive(Debug, Default)]
pub struct RecordingLookup {
    surfaces: Vec<(String, RecordingSurface)>,
}

impl RecordingLookup {
    /// Creates an empty lookup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a surface under an identifier, returning a shared handle.
    pub fn register(&mut self, id: impl Into<String>) -> RecordingSurface {
        let surface = RecordingSurface::new();
        self.surfaces.push((id.into(), surface.clone()));
        surface
    }
}

impl SurfaceLookup for RecordingLookup {
    type Surface = RecordingSurface;

    fn find(&mut self, id: &str) -> Option<RecordingSurface> {
        self.surfaces
            .iter()
            .find(|(known, _)| known == id)
            .map(|(_, surface)| surface.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_surface_preserves_order() {
        let mut surface = RecordingSurface::new();
        surface.set_position(Vec2::new(1.0, 2.0));
        surface.set_rotation(45.0);
        surface.set_opacity(1.0);

        assert_eq!(
            surface.ops(),
            vec![
                SurfaceOp::Position(Vec2::new(1.0, 2.0)),
                SurfaceOp::Rotation(45.0),
                SurfaceOp::Opacity(1.0),
            ]
        );
    }

    #[test]
    fn test_clones_share_the_log() {
        let surface = RecordingSurface::new();
        let mut handle = surface.clone();

        handle.set_rotation(90.0);
        assert_eq!(surface.last_rotation(), Some(90.0));
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let mut lookup = RecordingLookup::new();
        let _log = lookup.register("stalker");

        assert!(lookup.find("stalker").is_some());
        assert!(lookup.find("ghost").is_none());
    }
}
