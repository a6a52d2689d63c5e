//! Shared Module
//!
//! Types that describe the tracker independently of the HTTP server: the
//! data model, the transport representations clients send and receive, the
//! input error type, and application configuration.
//!
//! A client crate can depend on these types alone to talk to the API.

/// Entity definitions and canonical ordering
pub mod models;

/// Transport representations and input validation
pub mod serializers;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
