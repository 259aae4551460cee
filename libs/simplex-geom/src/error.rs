//! # Geometry Errors
//!
//! Error types for shape construction and queries.

use thiserror::Error;

/// Errors that can occur when building or querying a shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Supplied points fail a geometric validity predicate
    #[error("Invalid geometry: {message}")]
    InvalidGeometry { message: String },

    /// A scalar parameter violates a precondition
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// A derived quantity was queried before the shape was initialized
    #[error("Shape not initialized: {message}")]
    Uninitialized { message: String },
}

impl GeometryError {
    /// Creates an invalid geometry error.
    pub fn invalid_geometry(message: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates an uninitialized state error.
    pub fn uninitialized(message: impl Into<String>) -> Self {
        Self::Uninitialized {
            message: message.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
