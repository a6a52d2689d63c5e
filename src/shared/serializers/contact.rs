/**
 * Contact Serializers
 *
 * The parent application never comes from the body: `ContactInput` has no
 * field for it, and the controller takes it from the URL.
 */

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::shared::error::FieldErrors;
use crate::shared::models::contact::{EMAIL_MAX_LEN, NAME_MAX_LEN, PHONE_MAX_LEN};
use crate::shared::models::{ApplicationId, Contact, ContactFields};
use crate::shared::serializers::{
    blank_or_email, double_option, not_blank, not_null, set_value, trim_value, WritePayload,
};

/// Client-writable contact fields
///
/// None of them accepts `null`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct ContactInput {
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = NAME_MAX_LEN))]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = EMAIL_MAX_LEN))]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = NAME_MAX_LEN))]
    pub role: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = PHONE_MAX_LEN))]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

impl WritePayload for ContactInput {
    type Fields = ContactFields;

    // Notes keep their formatting.
    fn trim(&mut self) {
        trim_value(&mut self.name);
        trim_value(&mut self.email);
        trim_value(&mut self.role);
        trim_value(&mut self.phone);
    }

    fn missing_required(&self) -> Vec<&'static str> {
        if self.name.is_none() {
            vec!["name"]
        } else {
            Vec::new()
        }
    }

    fn check_values(&self, errors: &mut FieldErrors) {
        not_null(errors, "name", &self.name);
        not_null(errors, "email", &self.email);
        not_null(errors, "role", &self.role);
        not_null(errors, "phone", &self.phone);
        not_null(errors, "notes", &self.notes);
        not_blank(errors, "name", &self.name);
        blank_or_email(errors, "email", &self.email);
    }

    fn merge_into(self, fields: &mut ContactFields) {
        set_value(&mut fields.name, self.name);
        set_value(&mut fields.email, self.email);
        set_value(&mut fields.role, self.role);
        set_value(&mut fields.phone, self.phone);
        set_value(&mut fields.notes, self.notes);
    }
}

/// A contact as returned by the contact endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub id: i64,
    /// Parent application
    pub application: ApplicationId,
    #[serde(flatten)]
    pub fields: ContactFields,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            application: contact.application_id,
            fields: contact.fields,
        }
    }
}

/// The contact columns embedded in an application response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContactSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub phone: String,
}
