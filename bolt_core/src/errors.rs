//! # Error Types
//!
//! Structured error types for bolt_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::errors::{FastenerError, FastenerResult};
//!
//! fn validate_load(load_n: f64) -> FastenerResult<()> {
//!     if load_n <= 0.0 {
//!         return Err(FastenerError::InvalidInput {
//!             field: "required_load_n".to_string(),
//!             value: load_n.to_string(),
//!             reason: "Required load must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bolt_core operations
pub type FastenerResult<T> = Result<T, FastenerError>;

/// Structured error type for fastener calculations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
///
/// Note that an exhausted size table in reverse sizing is *not* an error;
/// it is reported as a normal outcome value by the design calculation.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FastenerError {
    /// Thread geometry is non-physical (nominal diameter must exceed pitch,
    /// both must be positive)
    #[error("Invalid thread geometry: d={nominal_diameter_mm} mm, p={pitch_mm} mm - {reason}")]
    InvalidGeometry {
        nominal_diameter_mm: f64,
        pitch_mm: f64,
        reason: String,
    },

    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl FastenerError {
    /// Create an InvalidGeometry error
    pub fn invalid_geometry(
        nominal_diameter_mm: f64,
        pitch_mm: f64,
        reason: impl Into<String>,
    ) -> Self {
        FastenerError::InvalidGeometry {
            nominal_diameter_mm,
            pitch_mm,
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FastenerError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        FastenerError::MissingField {
            field: field.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FastenerError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            FastenerError::InvalidInput { .. } => "INVALID_INPUT",
            FastenerError::MissingField { .. } => "MISSING_FIELD",
            FastenerError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
