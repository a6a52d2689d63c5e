//! Property-based tests for application status parsing

use proptest::prelude::*;

use jobtrack::shared::models::ApplicationStatus;

fn status_strategy() -> impl Strategy<Value = ApplicationStatus> {
    prop::sample::select(ApplicationStatus::ALL.to_vec())
}

proptest! {
    #[test]
    fn test_status_parses_its_own_name(status in status_strategy()) {
        prop_assert_eq!(status.as_str().parse::<ApplicationStatus>().unwrap(), status);
        prop_assert_eq!(status.to_string(), status.as_str());
    }

    #[test]
    fn test_status_json_matches_name(status in status_strategy()) {
        let json = serde_json::to_value(status).unwrap();
        prop_assert_eq!(json, serde_json::Value::String(status.as_str().to_string()));
    }

    #[test]
    fn test_unknown_status_rejected(raw in "[a-zA-Z]{1,12}") {
        let known = ApplicationStatus::ALL.iter().any(|s| s.as_str() == raw);
        prop_assume!(!known);

        let err = raw.parse::<ApplicationStatus>().unwrap_err();
        prop_assert!(err.field_errors().contains_key("status"));
    }
}
