//! The animations interface and its tween-bank implementation.
//!
//! The controller does not own easing math for positions - it hands
//! targets to an [`StalkerAnimations`] implementation and steps it once per
//! frame. [`TweenAnimations`] is the production implementation: one
//! retargetable tween per animated property, flushed to the render surface
//! as values change.

use stalker_core::{Easing, Tween, Tween2D, Vec2};

use crate::config::StalkerConfig;
use crate::surface::StalkerSurface;

/// Animation operations the controller drives.
pub trait StalkerAnimations {
    /// Places the marker instantly (the first-appearance snap).
    fn set_position(&mut self, position: Vec2);

    /// Eases the marker toward a position over the trail duration.
    fn animate_to(&mut self, position: Vec2);

    /// Applies a rotation in degrees on the next advance.
    fn set_rotation(&mut self, degrees: f32);

    /// Starts the fade from hidden to fully visible.
    fn fade_in(&mut self);

    /// Advances all tweens by `dt` seconds and flushes changed values.
    fn advance(&mut self, dt: f32);
}

/// Tween bank driving a render surface.
///
/// Position trails with the configured easing; opacity fades linearly over
/// its own duration; rotation is pre-smoothed by the controller and applied
/// directly.
pub struct TweenAnimations<S: StalkerSurface> {
    surface: S,
    position: Tween2D,
    opacity: Tween,
    rotation: f32,
    rotation_dirty: bool,
}

impl<S: StalkerSurface> TweenAnimations<S> {
    /// Creates a tween bank over a surface, hidden at the origin.
    #[must_use]
    pub fn new(surface: S, config: &StalkerConfig) -> Self {
        Self {
            surface,
            position: Tween2D::new(0.0, 0.0, config.trail_duration_secs, config.easing),
            opacity: Tween::new(0.0, config.fade_duration_secs, Easing::Linear),
            rotation: 0.0,
            rotation_dirty: false,
        }
    }

    /// Returns the surface, consuming the bank.
    pub fn into_surface(self) -> S {
        self.surface
    }
}

impl<S: StalkerSurface> StalkerAnimations for TweenAnimations<S> {
    fn set_position(&mut self, position: Vec2) {
        self.position.set(position.x, position.y);
        self.surface.set_position(position);
    }

    fn animate_to(&mut self, position: Vec2) {
        self.position.ease_to(position.x, position.y);
    }

    fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
        self.rotation_dirty = true;
    }

    fn fade_in(&mut self) {
        self.opacity.ease_to(1.0);
    }

    fn advance(&mut self, dt: f32) {
        // Sampled before stepping so the frame that lands on the target
        // still flushes the exact final value.
        let position_active = !self.position.is_complete();
        let opacity_active = !self.opacity.is_complete();

        self.position.update(dt);
        self.opacity.update(dt);

        if position_active {
            let (x, y) = self.position.value();
            self.surface.set_position(Vec2::new(x, y));
        }
        if opacity_active {
            self.surface.set_opacity(self.opacity.value());
        }
        if self.rotation_dirty {
            self.surface.set_rotation(self.rotation);
            self.rotation_dirty = false;
        }
    }
}
