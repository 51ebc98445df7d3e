//! Widget configuration.
//!
//! Loaded once at startup from TOML (or built in code) and validated before
//! the widget is constructed. Nothing re-reads configuration at runtime.

use serde::Deserialize;
use stalker_core::Easing;

use crate::error::{StalkerError, StalkerResult};

/// Configuration for the stalker widget.
///
/// Every field has a default tuned for a 60fps cursor trail; a TOML file
/// only needs to name the fields it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StalkerConfig {
    /// Duration of the position trail segments, in seconds.
    pub trail_duration_secs: f32,
    /// Duration of the initial fade-in, in seconds.
    pub fade_duration_secs: f32,
    /// Per-frame rotation smoothing factor in (0, 1]:
    /// each frame the heading closes this fraction of the remaining arc.
    pub rotation_smoothing: f32,
    /// Quiet period after the last resize event before the viewport
    /// dimensions are refreshed, in milliseconds.
    pub resize_debounce_ms: u64,
    /// Easing curve for the position trail.
    pub easing: Easing,
    /// Frame driver tick rate, in frames per second.
    pub tick_rate: u32,
}

impl Default for StalkerConfig {
    fn default() -> Self {
        Self {
            trail_duration_secs: 0.4,
            fade_duration_secs: 0.5,
            rotation_smoothing: 0.1,
            resize_debounce_ms: 200,
            easing: Easing::CubicOut,
            tick_rate: 60,
        }
    }
}

impl StalkerConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the TOML is malformed, names unknown
    /// fields, or fails validation.
    pub fn from_toml_str(text: &str) -> StalkerResult<Self> {
        let config: Self = toml::from_str(text)
            .map_err(|e| StalkerError::InvalidConfig(format!("failed to parse TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the file cannot be read or fails to parse
    /// or validate.
    pub fn load(path: impl AsRef<std::path::Path>) -> StalkerResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            StalkerError::InvalidConfig(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    /// Validates field ranges.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first out-of-range field.
    pub fn validate(&self) -> StalkerResult<()> {
        if !self.trail_duration_secs.is_finite() || self.trail_duration_secs <= 0.0 {
            return Err(StalkerError::InvalidConfig(format!(
                "trail_duration_secs must be positive, got {}",
                self.trail_duration_secs
            )));
        }
        if !self.fade_duration_secs.is_finite() || self.fade_duration_secs <= 0.0 {
            return Err(StalkerError::InvalidConfig(format!(
                "fade_duration_secs must be positive, got {}",
                self.fade_duration_secs
            )));
        }
        if !self.rotation_smoothing.is_finite()
            || self.rotation_smoothing <= 0.0
            || self.rotation_smoothing > 1.0
        {
            return Err(StalkerError::InvalidConfig(format!(
                "rotation_smoothing must be in (0, 1], got {}",
                self.rotation_smoothing
            )));
        }
        if self.tick_rate == 0 {
            return Err(StalkerError::InvalidConfig(
                "tick_rate must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Resize debounce window in seconds.
    #[must_use]
    pub fn resize_debounce_secs(&self) -> f32 {
        self.resize_debounce_ms as f32 / 1000.0
    }
}
