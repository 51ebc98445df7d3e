//! # Widget Error Types
//!
//! The widget has exactly two ways to fail, and both happen at startup:
//! the target surface does not exist, or the configuration is unusable.
//! Every steady-state operation is total over its inputs.

use thiserror::Error;

/// Errors that can occur while setting up the widget.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StalkerError {
    /// The render surface lookup returned nothing for the target id.
    #[error("target surface not found: {id}")]
    TargetNotFound {
        /// The identifier that failed to resolve.
        id: String,
    },

    /// Invalid configuration file or out-of-range values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for widget setup operations.
pub type StalkerResult<T> = Result<T, StalkerError>;
