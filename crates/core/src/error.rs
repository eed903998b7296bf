//! Error types for Catalog Admin
//!
//! This module provides the error type shared by the core crate and the
//! UI: configuration problems and form checks that fail before any request
//! is sent.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Catalog Admin
#[derive(Debug, Error)]
pub enum AdminError {
    // ========================================================================
    // Form Errors
    // ========================================================================
    /// A required form field was left empty
    #[error("Field '{field}' is required for {resource}")]
    MissingField {
        resource: &'static str,
        field: &'static str,
    },

    /// A form field could not be parsed into its record type
    #[error("Field '{field}' has an invalid value '{value}': {message}")]
    InvalidField {
        field: &'static str,
        value: String,
        message: String,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read
    #[error("Failed to read config file '{path}': {message}")]
    ConfigRead { path: PathBuf, message: String },

    /// Configuration file is not valid TOML
    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParse { path: PathBuf, message: String },
}

impl AdminError {
    /// Create a missing-field error
    pub fn missing(resource: &'static str, field: &'static str) -> Self {
        AdminError::MissingField { resource, field }
    }

    /// Create an invalid-field error
    pub fn invalid(field: &'static str, value: impl Into<String>, msg: impl Into<String>) -> Self {
        AdminError::InvalidField {
            field,
            value: value.into(),
            message: msg.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        AdminError::InvalidConfig(msg.into())
    }

    /// Check if this error came from a form check
    pub fn is_form(&self) -> bool {
        matches!(
            self,
            AdminError::MissingField { .. } | AdminError::InvalidField { .. }
        )
    }
}

/// Result type alias using AdminError
pub type AdminResult<T> = Result<T, AdminError>;

// ============================================================================
// Tests
// ============================================================================
