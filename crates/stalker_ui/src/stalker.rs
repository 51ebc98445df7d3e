//! The stalker controller.
//!
//! Turns a stream of pointer samples into smoothed motion: the centered
//! position trails behind the pointer on eased tweens, and the heading
//! chases the direction of travel one shortest-arc step per frame.
//!
//! Two states, one transition: **Hidden** until the first pointer sample,
//! then **Tracking** for the rest of the widget's life. The first sample
//! snaps the marker into place and fades it in; everything after that
//! only ever eases.

use stalker_core::{heading_degrees, shortest_angle_delta, wrap_degrees, Vec2};

use crate::animations::{StalkerAnimations, TweenAnimations};
use crate::config::StalkerConfig;
use crate::driver::StalkerSnapshot;
use crate::error::{StalkerError, StalkerResult};
use crate::surface::{StalkerSurface, SurfaceLookup};
use crate::viewport::{ResizeDebounce, Viewport};

/// The widget's mutable state.
#[derive(Debug, Clone, Copy)]
pub struct StalkerState {
    /// Pointer position re-origined so (0,0) is the viewport center.
    pub position: Vec2,
    /// Smoothed heading in [0, 360).
    pub degrees: f32,
    /// Heading of the last movement vector, in [0, 360).
    pub target_degrees: f32,
    /// True once the first pointer sample has been seen.
    pub appeared: bool,
}

impl Default for StalkerState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            degrees: 0.0,
            target_degrees: 0.0,
            appeared: false,
        }
    }
}

/// The cursor-trailing widget controller.
///
/// Owns all widget state and mediates between input events and the
/// animations bank. All methods are total; the only fallible operation is
/// construction.
pub struct StalkerController<A: StalkerAnimations> {
    config: StalkerConfig,
    viewport: Viewport,
    debounce: ResizeDebounce,
    state: StalkerState,
    animations: A,
}

impl<A: StalkerAnimations> StalkerController<A> {
    /// Creates a controller over an animations bank.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration fails validation.
    pub fn new(
        animations: A,
        viewport: Viewport,
        config: StalkerConfig,
    ) -> StalkerResult<Self> {
        config.validate()?;
        let debounce = ResizeDebounce::new(config.resize_debounce_secs());
        Ok(Self {
            config,
            viewport,
            debounce,
            state: StalkerState::default(),
            animations,
        })
    }

    /// Handles a pointer-move sample in client coordinates.
    ///
    /// Computes the centered position and the movement heading, then either
    /// snaps + fades in (first sample) or retargets the trail tweens. A
    /// zero delta re-targets the heading to the current smoothed value, so
    /// a stationary pointer stops the turn instead of completing it.
    pub fn handle_pointer_move(&mut self, client_x: f32, client_y: f32) {
        let position = self.viewport.centered(client_x, client_y);
        let delta = position - self.state.position;

        if delta.is_zero() {
            self.state.target_degrees = self.state.degrees;
        } else {
            self.state.target_degrees = heading_degrees(delta);
        }

        self.state.position = position;
        self.render_update();
    }

    /// Handles a resize notification.
    ///
    /// The new dimensions are not used until the debounce quiet period has
    /// elapsed; re-notifying cancels the pending refresh and re-arms it.
    pub fn handle_resize(&mut self, width: f32, height: f32, now: f32) {
        self.debounce.schedule(Viewport::new(width, height), now);
    }

    /// Advances the widget by one frame.
    ///
    /// Commits any debounced viewport refresh, steps the heading one
    /// shortest-arc increment toward its target, and advances the tween
    /// bank. `now` is seconds since the driver started; `dt` is seconds
    /// since the previous frame.
    pub fn frame(&mut self, now: f32, dt: f32) {
        if let Some(viewport) = self.debounce.poll(now) {
            tracing::debug!(
                width = viewport.width,
                height = viewport.height,
                "viewport refreshed"
            );
            self.viewport = viewport;
        }

        if self.state.appeared {
            let diff = shortest_angle_delta(self.state.target_degrees, self.state.degrees);
            self.state.degrees = wrap_degrees(
                self.state.degrees + diff * self.config.rotation_smoothing,
            );
            self.animations.set_rotation(self.state.degrees);
        }

        self.animations.advance(dt);
    }

    /// First sample: snap into place and fade in. After that: retarget the
    /// trail.
    fn render_update(&mut self) {
        if !self.state.appeared {
            self.state.appeared = true;
            self.animations.set_position(self.state.position);
            self.animations.fade_in();
            tracing::debug!(
                x = self.state.position.x,
                y = self.state.position.y,
                "stalker appeared"
            );
            return;
        }
        self.animations.animate_to(self.state.position);
    }

    /// Returns the widget state.
    #[must_use]
    pub fn state(&self) -> &StalkerState {
        &self.state
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &StalkerConfig {
        &self.config
    }

    /// Returns the viewport currently used for centering.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Returns a copyable snapshot of the widget state.
    #[must_use]
    pub fn snapshot(&self, frame: u64) -> StalkerSnapshot {
        StalkerSnapshot {
            position: self.state.position,
            degrees: self.state.degrees,
            target_degrees: self.state.target_degrees,
            appeared: self.state.appeared,
            frame,
        }
    }
}

impl<S: StalkerSurface> StalkerController<TweenAnimations<S>> {
    /// Looks up the target surface by identifier and builds a controller
    /// with the production tween bank bound to it.
    ///
    /// # Errors
    ///
    /// Returns `TargetNotFound` if the lookup cannot resolve `target_id`,
    /// or `InvalidConfig` if the configuration fails validation.
    pub fn bind<L>(
        lookup: &mut L,
        target_id: &str,
        viewport: Viewport,
        config: StalkerConfig,
    ) -> StalkerResult<Self>
    where
        L: SurfaceLookup<Surface = S>,
    {
        let surface = lookup.find(target_id).ok_or_else(|| {
            StalkerError::TargetNotFound {
                id: target_id.to_string(),
            }
        })?;
        let animations = TweenAnimations::new(surface, &config);
        Self::new(animations, viewport, config)
    }
}
