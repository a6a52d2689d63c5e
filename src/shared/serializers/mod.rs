//! Serialization Layer
//!
//! Transport representations for the tracker entities, in both directions.
//!
//! # Input
//!
//! Each entity has an `*Input` type listing only its client-writable fields,
//! every one optional. Fields are read with [`double_option`], so an explicit
//! `null` is told apart from an omitted field and rejected where the column
//! does not accept it. Anything else a client sends (`id`, `user`,
//! `application`, `created_at`, `updated_at`, nested `contacts`/`tasks`) has no
//! field to land in and is dropped by serde without an error.
//!
//! Input goes through [`build_fields`] (create) or [`apply_update`] (full or
//! partial update). Both trim the text fields, validate, and only then
//! produce or modify the entity's `*Fields`, so a rejected payload never
//! reaches a model value:
//!
//! - `Create` and `Replace` require the entity's required fields
//! - `Partial` only validates what was sent
//!
//! # Output
//!
//! `*Response` types carry every persisted field plus the server-owned ones.
//! `ApplicationResponse` also embeds read-only [`ContactSummary`] and
//! [`TaskSummary`] lists.

/// Application input and output
pub mod application;

/// Contact input and output
pub mod contact;

/// Task input and output
pub mod task;

use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::shared::error::{FieldErrors, SharedError};

pub use application::{ApplicationInput, ApplicationResponse};
pub use contact::{ContactInput, ContactResponse, ContactSummary};
pub use task::{TaskInput, TaskResponse, TaskSummary};

const REQUIRED: &str = "This field is required.";
const BLANK: &str = "This field may not be blank.";
const INVALID_EMAIL: &str = "Enter a valid email address.";
const NULL: &str = "This field may not be null.";

/// How a payload is applied to an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// POST: required fields must be present
    Create,
    /// PUT: required fields must be present, omitted optional fields keep their values
    Replace,
    /// PATCH: only the fields sent are validated and written
    Partial,
}

/// A client payload that writes an entity's client-owned fields
pub trait WritePayload: Validate {
    /// The entity values this payload writes
    type Fields: Default;

    /// Strip surrounding whitespace from the text fields that store it trimmed.
    fn trim(&mut self);

    /// Names of required fields absent from the payload.
    fn missing_required(&self) -> Vec<&'static str>;

    /// Rules the `Validate` derive does not cover.
    fn check_values(&self, errors: &mut FieldErrors);

    /// Copy every provided value onto `fields`. Only called after validation.
    fn merge_into(self, fields: &mut Self::Fields);
}

/// Validate a trimmed `payload` for `mode`, collecting every failing field.
pub fn validate_payload<P: WritePayload>(payload: &P, mode: WriteMode) -> Result<(), SharedError> {
    let mut errors = FieldErrors::new();

    if mode != WriteMode::Partial {
        for field in payload.missing_required() {
            errors.entry(field.to_string()).or_default().push(REQUIRED.to_string());
        }
    }

    if let Err(invalid) = payload.validate() {
        for (field, messages) in SharedError::from(invalid).field_errors() {
            errors.entry(field).or_default().extend(messages);
        }
    }

    payload.check_values(&mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SharedError::invalid_fields(errors))
    }
}

/// Phase one of a create: validated client values on top of the defaults.
pub fn build_fields<P: WritePayload>(mut payload: P) -> Result<P::Fields, SharedError> {
    payload.trim();
    validate_payload(&payload, WriteMode::Create)?;
    let mut fields = P::Fields::default();
    payload.merge_into(&mut fields);
    Ok(fields)
}

/// Validate `payload` and, only if it passes, write it onto `fields`.
pub fn apply_update<P: WritePayload>(
    mut payload: P,
    mode: WriteMode,
    fields: &mut P::Fields,
) -> Result<(), SharedError> {
    payload.trim();
    validate_payload(&payload, mode)?;
    payload.merge_into(fields);
    Ok(())
}

/// Distinguish an absent field (`None`) from an explicit `null` (`Some(None)`).
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn not_null<T>(errors: &mut FieldErrors, field: &'static str, value: &Option<Option<T>>) {
    if matches!(value, Some(None)) {
        errors.entry(field.to_string()).or_default().push(NULL.to_string());
    }
}

fn not_blank(errors: &mut FieldErrors, field: &'static str, value: &Option<Option<String>>) {
    if let Some(Some(v)) = value {
        if v.trim().is_empty() {
            errors.entry(field.to_string()).or_default().push(BLANK.to_string());
        }
    }
}

fn blank_or_email(errors: &mut FieldErrors, field: &'static str, value: &Option<Option<String>>) {
    use validator::ValidateEmail;

    if let Some(Some(email)) = value {
        if !email.is_empty() && !email.validate_email() {
            errors.entry(field.to_string()).or_default().push(INVALID_EMAIL.to_string());
        }
    }
}

fn trim_value(value: &mut Option<Option<String>>) {
    if let Some(Some(v)) = value {
        let trimmed = v.trim();
        if trimmed.len() != v.len() {
            *v = trimmed.to_string();
        }
    }
}

fn set_value<T>(target: &mut T, value: Option<Option<T>>) {
    if let Some(Some(value)) = value {
        *target = value;
    }
}
