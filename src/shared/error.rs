//! Shared Error Types
//!
//! This module defines error types that describe bad input independently of
//! the HTTP layer. The backend wraps them in `BackendError`, which decides the
//! status code and the JSON body.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON serialization/deserialization failures
//! - `ValidationError` - A single field failed validation
//! - `InvalidFields` - One or more fields failed validation, with every message per field
//!
//! # Usage
//!
//! ```rust
//! use jobtrack::shared::error::SharedError;
//!
//! let error = SharedError::validation("status", "\"hired\" is not a valid choice.");
//! assert_eq!(error.field_errors()["status"].len(), 1);
//! ```
use std::collections::BTreeMap;

use thiserror::Error;

/// Field name to the list of messages reported for it.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Errors raised while turning client input into model values
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error on one field
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Validation errors collected across several fields
    #[error("Invalid input in {} field(s)", fields.len())]
    InvalidFields {
        /// Messages keyed by field name
        fields: FieldErrors,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a multi-field validation error; an empty map is still an error.
    pub fn invalid_fields(fields: FieldErrors) -> Self {
        Self::InvalidFields { fields }
    }

    /// Per-field detail for the response body.
    ///
    /// Serialization errors are reported under `non_field_errors`.
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            Self::SerializationError { message } => {
                FieldErrors::from([("non_field_errors".to_string(), vec![message.clone()])])
            }
            Self::ValidationError { field, message } => {
                FieldErrors::from([(field.clone(), vec![message.clone()])])
            }
            Self::InvalidFields { fields } => fields.clone(),
        }
    }
}

impl From<validator::ValidationErrors> for SharedError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, field_errors) in errors.field_errors() {
            let messages = fields.entry(field.to_string()).or_default();
            for error in field_errors {
                let message = match (&error.message, error.params.get("max")) {
                    (Some(message), _) => message.to_string(),
                    (None, Some(max)) if error.code == "length" => {
                        format!("Ensure this field has no more than {} characters.", max)
                    }
                    (None, _) => error.code.to_string(),
                };
                messages.push(message);
            }
        }
        Self::InvalidFields { fields }
    }
}
