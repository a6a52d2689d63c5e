//! API endpoint tests

pub mod auth_test;
pub mod contacts_test;
pub mod tasks_test;
