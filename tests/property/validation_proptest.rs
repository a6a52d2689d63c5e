//! Property-based tests for write validation

use proptest::prelude::*;

use jobtrack::shared::models::{ApplicationFields, TaskFields};
use jobtrack::shared::serializers::{
    apply_update, build_fields, ApplicationInput, TaskInput, WriteMode,
};

proptest! {
    #[test]
    fn test_titles_are_stored_trimmed(
        title in "[A-Za-z][A-Za-z ]{0,40}",
        pad in " {0,4}",
    ) {
        let input = TaskInput {
            title: Some(Some(format!("{}{}{}", pad, title, pad))),
            ..TaskInput::default()
        };
        let fields = build_fields(input).unwrap();
        prop_assert_eq!(fields.title, title.trim());
    }

    #[test]
    fn test_blank_titles_rejected(title in " {0,10}") {
        let input = TaskInput {
            title: Some(Some(title)),
            ..TaskInput::default()
        };
        let err = build_fields(input).unwrap_err();
        prop_assert!(err.field_errors().contains_key("title"));
    }

    #[test]
    fn test_overlong_company_rejected(extra in 1usize..50) {
        let input = ApplicationInput {
            title: Some(Some("Engineer".to_string())),
            company: Some(Some("x".repeat(200 + extra))),
            ..ApplicationInput::default()
        };
        let err = build_fields(input).unwrap_err();
        prop_assert!(err.field_errors().contains_key("company"));
    }

    #[test]
    fn test_padding_does_not_count_toward_length(len in 1usize..=200, pad in " {1,8}") {
        let input = ApplicationInput {
            title: Some(Some(format!("{}{}{}", pad, "x".repeat(len), pad))),
            company: Some(Some("Acme".to_string())),
            ..ApplicationInput::default()
        };
        let fields = build_fields(input).unwrap();
        prop_assert_eq!(fields.title.len(), len);
    }

    #[test]
    fn test_failed_update_leaves_fields_untouched(priority in any::<i64>(), status in "[a-z]{3,10}") {
        prop_assume!(!["applied", "interview", "offer", "rejected"].contains(&status.as_str()));

        let original = ApplicationFields {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            ..ApplicationFields::default()
        };
        let mut fields = original.clone();
        let input = ApplicationInput {
            priority: Some(Some(priority)),
            status: Some(Some(status)),
            ..ApplicationInput::default()
        };

        prop_assert!(apply_update(input, WriteMode::Partial, &mut fields).is_err());
        prop_assert_eq!(fields, original);
    }

    #[test]
    fn test_partial_done_toggle_keeps_title(done in any::<bool>()) {
        let mut fields = TaskFields {
            title: "Follow up".to_string(),
            ..TaskFields::default()
        };
        let input = TaskInput {
            done: Some(Some(done)),
            ..TaskInput::default()
        };

        apply_update(input, WriteMode::Partial, &mut fields).unwrap();
        prop_assert_eq!(fields.done, done);
        prop_assert_eq!(fields.title, "Follow up");
    }
}
