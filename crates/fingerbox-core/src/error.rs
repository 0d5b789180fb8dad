//! Error handling for fingerbox
//!
//! Validation failures are raised before any geometry is computed. The pure
//! geometry functions never fail; they clamp to the nearest valid shape and
//! only report [`BoxError::DegenerateGeometry`] when a caller asks for a
//! strict check.

use thiserror::Error;

/// Errors raised while validating or building a box.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoxError {
    /// A dimension is zero, negative or not a finite number.
    #[error("Invalid dimension '{name}': {value} (must be a positive finite number)")]
    InvalidDimension {
        /// Name of the offending field.
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// Material is too thick for the smallest box dimension.
    #[error("Thickness {thickness} must be less than half the smallest dimension ({limit})")]
    ThicknessTooLarge {
        /// Requested material thickness.
        thickness: f64,
        /// Exclusive upper bound, half the smallest of width/height/depth.
        limit: f64,
    },

    /// Finger joints were requested without a usable finger size.
    #[error("Finger joints require a positive finger size")]
    MissingFingerSize,

    /// Geometry collapsed below floating point resolution.
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

impl BoxError {
    /// Shorthand for [`BoxError::InvalidDimension`].
    pub fn invalid_dimension(name: impl Into<String>, value: f64) -> Self {
        Self::InvalidDimension {
            name: name.into(),
            value,
        }
    }
}

/// Result type alias for box operations.
pub type BoxResult<T> = Result<T, BoxError>;
