//! Error types for rastergeom.
//!
//! All failures are raised synchronously by the call that detects them. No
//! operation returns a partial result.

use thiserror::Error;

/// The main error type for rastergeom operations.
#[derive(Error, Debug)]
pub enum RasterError {
    /// Too few points along an axis, or a zero span where a division occurs
    #[error("Degenerate input: {message}")]
    DegenerateInput { message: String },

    /// Invalid parameter errors (unknown reduction, bad factor, bad layer)
    #[error("Invalid argument: {param} - {message}")]
    InvalidArgument { param: String, message: String },

    /// Array and coordinate shapes disagree
    #[error("Shape mismatch: {message}")]
    ShapeMismatch { message: String },

    /// No handler registered for a type or any of its ancestors
    #[error("No dispatch for {type_name} type")]
    NoDispatch { type_name: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// ndarray shape construction errors
    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

impl RasterError {
    pub(crate) fn degenerate(message: impl Into<String>) -> Self {
        RasterError::DegenerateInput {
            message: message.into(),
        }
    }

    pub(crate) fn invalid(param: &str, message: impl Into<String>) -> Self {
        RasterError::InvalidArgument {
            param: param.to_string(),
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results with RasterError
pub type Result<T> = std::result::Result<T, RasterError>;
