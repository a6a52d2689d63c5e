//! Database behaviour observed through the API

pub mod cascade_test;
