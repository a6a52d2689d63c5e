//! Backend Error Module
//!
//! This module defines the error type returned by every handler and its
//! conversion into an HTTP response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and extractor-rejection conversions
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::Json;
//! use jobtrack::backend::error::BackendError;
//!
//! async fn handler() -> Result<Json<()>, BackendError> {
//!     Err(BackendError::not_found())
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, NOT_FOUND, PERMISSION_DENIED};
