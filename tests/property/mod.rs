//! Property-based tests using proptest

pub mod status_proptest;
pub mod validation_proptest;
