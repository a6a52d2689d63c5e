//! Custom assertion macros and utilities
//!
//! Provides assertion macros that print the response body on failure.

/// Assert a response status, showing the body if it differs
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status_code(),
            $status,
            "unexpected status, body: {}",
            $response.text()
        );
    };
}

/// Assert that an error body reports a problem with `field`
#[macro_export]
macro_rules! assert_field_error {
    ($body:expr, $field:expr) => {
        assert!(
            $body["fields"][$field].is_array(),
            "Expected an error for field '{}', got: {}",
            $field,
            $body
        );
    };
}

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}
