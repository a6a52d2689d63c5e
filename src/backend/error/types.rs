/**
 * Backend Error Types
 *
 * This module defines the errors a request can end in. Each variant maps to
 * one HTTP status code.
 *
 * # Error Categories
 *
 * ## Authentication (401)
 *
 * Missing, malformed, expired, or wrong-kind tokens, and bad credentials.
 *
 * ## Authorization (403)
 *
 * The requester is authenticated but does not own the target, or the parent
 * application of a nested create does not resolve for them. The message is
 * the same whether or not the identifier exists for another user.
 *
 * ## Not Found (404)
 *
 * The identifier is not in the requester's owner-scoped set.
 *
 * ## Validation (400)
 *
 * Wrapped `SharedError`s, carrying per-field detail.
 *
 * ## Internal (500)
 *
 * Database, hashing, and token-encoding failures. The detail is logged and
 * never sent to the client.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::error::FieldErrors;
use crate::shared::SharedError;

/// Message for every ownership failure
pub const PERMISSION_DENIED: &str = "You do not have permission to perform this action.";

/// Message for every owner-scoped lookup miss
pub const NOT_FOUND: &str = "No matching record found.";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use axum::http::StatusCode;
/// use jobtrack::backend::error::BackendError;
///
/// let err = BackendError::handler(StatusCode::CONFLICT, "Username already taken");
/// assert_eq!(err.status_code(), StatusCode::CONFLICT);
///
/// let err = BackendError::forbidden();
/// assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Authentication failed or was absent
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Authenticated, but not allowed to act on the target
    #[error("Forbidden")]
    Forbidden,

    /// Not in the requester's owner-scoped set
    #[error("Not found")]
    NotFound,

    /// Input validation error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Token signing error
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing error
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new authentication error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create an ownership error
    pub fn forbidden() -> Self {
        Self::Forbidden
    }

    /// Create an owner-scoped lookup miss
    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Create a single-field validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SharedError(SharedError::validation(field, message))
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `SharedError` - 400 Bad Request
    /// - `Database`, `Token`, `PasswordHash` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Token(_) | Self::PasswordHash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the client-facing error message
    ///
    /// Internal errors are reduced to a fixed message.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Unauthorized { message } => message.clone(),
            Self::Forbidden => PERMISSION_DENIED.to_string(),
            Self::NotFound => NOT_FOUND.to_string(),
            Self::SharedError(_) => "Invalid input.".to_string(),
            Self::Database(_) | Self::Token(_) | Self::PasswordHash(_) => {
                "Internal server error".to_string()
            }
        }
    }

    /// Per-field detail, present only for validation errors
    pub fn field_errors(&self) -> Option<FieldErrors> {
        match self {
            Self::SharedError(err) => Some(err.field_errors()),
            _ => None,
        }
    }

    /// Whether the error hides a server-side failure
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}
