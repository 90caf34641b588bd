//! Error type system for the lending catalog
//!
//! This module provides the crate-wide error type with:
//! - Hierarchical error classification
//! - Stable error type names for callers that report upstream
//! - A crate-level Result alias

use serde::{Deserialize, Serialize};

/// Main error type for the lending catalog boundary
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    // Shape-level errors
    #[error("Invalid cover state: {0}")]
    InvalidCoverState(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    // Policy parsing errors
    #[error("Invalid policy value for {key}: {value:?}")]
    InvalidPolicyValue { key: &'static str, value: String },

    // Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl CatalogError {
    /// Get the error type name for reporting
    pub fn error_type(&self) -> &'static str {
        match self {
            CatalogError::InvalidCoverState(_) => "InvalidCoverState",
            CatalogError::ValidationError(_) => "ValidationError",
            CatalogError::InvalidPolicyValue { .. } => "InvalidPolicyValue",
            CatalogError::SerializationError(_) => "SerializationError",
        }
    }
}

/// Error report structure handed to callers that surface failures upstream
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Error type identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorReport {
    /// Create an error report from a CatalogError
    pub fn from_error(error: &CatalogError) -> Self {
        Self {
            error: error.error_type().to_string(),
            message: error.to_string(),
        }
    }
}

/// Result type alias for operations that can fail with CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;
