/**
 * Task Serializers
 *
 * `created_at` and the parent application are server-owned; `TaskInput`
 * carries neither.
 */

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::shared::error::FieldErrors;
use crate::shared::models::task::TITLE_MAX_LEN;
use crate::shared::models::{ApplicationId, Task, TaskFields};
use crate::shared::serializers::{
    double_option, not_blank, not_null, set_value, trim_value, WritePayload,
};

/// Client-writable task fields
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct TaskInput {
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = TITLE_MAX_LEN))]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub done: Option<Option<bool>>,
}

impl WritePayload for TaskInput {
    type Fields = TaskFields;

    fn trim(&mut self) {
        trim_value(&mut self.title);
    }

    fn missing_required(&self) -> Vec<&'static str> {
        if self.title.is_none() {
            vec!["title"]
        } else {
            Vec::new()
        }
    }

    fn check_values(&self, errors: &mut FieldErrors) {
        not_null(errors, "title", &self.title);
        not_null(errors, "done", &self.done);
        not_blank(errors, "title", &self.title);
    }

    fn merge_into(self, fields: &mut TaskFields) {
        set_value(&mut fields.title, self.title);
        set_value(&mut fields.done, self.done);
        if let Some(due_date) = self.due_date {
            fields.due_date = due_date;
        }
    }
}

/// A task as returned by the task endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    pub id: i64,
    /// Parent application
    pub application: ApplicationId,
    #[serde(flatten)]
    pub fields: TaskFields,
    pub created_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            application: task.application_id,
            fields: task.fields,
            created_at: task.created_at,
        }
    }
}

/// The task columns embedded in an application response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TaskSummary {
    pub id: i64,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}
