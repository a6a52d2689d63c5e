//! Integration tests
//!
//! Drive the full router over an in-memory database.

pub mod api;
pub mod database;
