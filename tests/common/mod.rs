//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - An in-memory application with migrations applied
//! - Authentication test helpers
//! - Custom assertion macros

pub mod assertions;
pub mod database;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use database::*;
