//! # Error Types
//!
//! Structured error types for tongue_core. Every failure carries enough
//! context for a presentation layer to explain it without re-deriving what
//! went wrong, and every variant serializes to JSON for API consumers.
//!
//! ## Example
//!
//! ```rust
//! use tongue_core::errors::{CalcError, CalcResult};
//!
//! fn validate_weight(weight_lb: f64) -> CalcResult<()> {
//!     if !weight_lb.is_finite() {
//!         return Err(CalcError::InvalidInput {
//!             field: "weight".to_string(),
//!             value: weight_lb.to_string(),
//!             reason: "Weight must be a finite number".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for tongue_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for solver and persistence operations.
///
/// `InvalidInput` describes *what* is wrong with the data, while
/// `DegenerateGeometry` describes *why* an otherwise well-formed layout
/// cannot be solved. The two are kept apart so callers can word their
/// feedback accordingly.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is malformed (non-finite, duplicated, missing, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Supports collapse onto the hitch so the moment balance carries no information
    #[error("Degenerate geometry: {reason}")]
    DegenerateGeometry { reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DegenerateGeometry error
    pub fn degenerate_geometry(reason: impl Into<String>) -> Self {
        CalcError::DegenerateGeometry {
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True for errors raised by the equilibrium solver itself
    pub fn is_solver_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. } | CalcError::DegenerateGeometry { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::DegenerateGeometry { .. } => "DEGENERATE_GEOMETRY",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}
