/**
 * Application Serializers
 *
 * `ApplicationInput` is what a client may write; `ApplicationResponse` is what
 * it reads back, including the owner and read-only summaries of the
 * application's contacts and tasks.
 */

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::shared::error::{FieldErrors, SharedError};
use crate::shared::models::application::{SOURCE_MAX_LEN, TEXT_MAX_LEN};
use crate::shared::models::{
    Application, ApplicationFields, ApplicationId, ApplicationStatus, UserId,
};
use crate::shared::serializers::{
    double_option, not_blank, not_null, set_value, trim_value, ContactSummary, TaskSummary,
    WritePayload,
};

/// Client-writable application fields
///
/// `None` is an omitted field and `Some(None)` an explicit `null`, which only
/// the salary fields accept.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct ApplicationInput {
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = TEXT_MAX_LEN))]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = TEXT_MAX_LEN))]
    pub company: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = TEXT_MAX_LEN))]
    pub location: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = TEXT_MAX_LEN))]
    pub stage: Option<Option<String>>,
    /// Checked against [`ApplicationStatus`] during validation
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub status: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = SOURCE_MAX_LEN))]
    pub source: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub priority: Option<Option<i64>>,
}

impl ApplicationInput {
    /// Input that writes back every client field of `fields` unchanged.
    pub fn from_fields(fields: &ApplicationFields) -> Self {
        Self {
            title: Some(Some(fields.title.clone())),
            company: Some(Some(fields.company.clone())),
            location: Some(Some(fields.location.clone())),
            stage: Some(Some(fields.stage.clone())),
            status: Some(Some(fields.status.to_string())),
            source: Some(Some(fields.source.clone())),
            salary_min: Some(fields.salary_min),
            salary_max: Some(fields.salary_max),
            priority: Some(Some(fields.priority)),
        }
    }

    fn parsed_status(&self) -> Option<Result<ApplicationStatus, SharedError>> {
        self.status.as_ref()?.as_deref().map(str::parse)
    }
}

impl WritePayload for ApplicationInput {
    type Fields = ApplicationFields;

    fn trim(&mut self) {
        trim_value(&mut self.title);
        trim_value(&mut self.company);
        trim_value(&mut self.location);
        trim_value(&mut self.stage);
        trim_value(&mut self.source);
    }

    fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_none() {
            missing.push("title");
        }
        if self.company.is_none() {
            missing.push("company");
        }
        missing
    }

    fn check_values(&self, errors: &mut FieldErrors) {
        not_null(errors, "title", &self.title);
        not_null(errors, "company", &self.company);
        not_null(errors, "location", &self.location);
        not_null(errors, "stage", &self.stage);
        not_null(errors, "status", &self.status);
        not_null(errors, "source", &self.source);
        not_null(errors, "priority", &self.priority);
        not_blank(errors, "title", &self.title);
        not_blank(errors, "company", &self.company);
        if let Some(Err(invalid)) = self.parsed_status() {
            for (field, messages) in invalid.field_errors() {
                errors.entry(field).or_default().extend(messages);
            }
        }
    }

    fn merge_into(self, fields: &mut ApplicationFields) {
        if let Some(Ok(status)) = self.parsed_status() {
            fields.status = status;
        }
        set_value(&mut fields.title, self.title);
        set_value(&mut fields.company, self.company);
        set_value(&mut fields.location, self.location);
        set_value(&mut fields.stage, self.stage);
        set_value(&mut fields.source, self.source);
        set_value(&mut fields.priority, self.priority);
        if let Some(salary_min) = self.salary_min {
            fields.salary_min = salary_min;
        }
        if let Some(salary_max) = self.salary_max {
            fields.salary_max = salary_max;
        }
    }
}

/// An application as returned to its owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationResponse {
    pub id: ApplicationId,
    /// Owning user
    pub user: UserId,
    #[serde(flatten)]
    pub fields: ApplicationFields,
    /// Read-only; contacts are written through their own endpoints
    pub contacts: Vec<ContactSummary>,
    /// Read-only; tasks are written through their own endpoints
    pub tasks: Vec<TaskSummary>,
    pub created_at: NaiveDate,
    pub updated_at: DateTime<Utc>,
}

impl ApplicationResponse {
    /// Render an application with its prefetched children.
    pub fn new(
        application: Application,
        contacts: Vec<ContactSummary>,
        tasks: Vec<TaskSummary>,
    ) -> Self {
        Self {
            id: application.id,
            user: application.user_id,
            fields: application.fields,
            contacts,
            tasks,
            created_at: application.created_at,
            updated_at: application.updated_at,
        }
    }
}
