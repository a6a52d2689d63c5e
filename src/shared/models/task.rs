/**
 * Task Model
 *
 * A to-do item attached to one application ("Send follow-up email",
 * "Prepare for interview"). Ownership follows the parent application's user.
 */

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::models::ApplicationId;

/// Maximum length of `title`
pub const TITLE_MAX_LEN: u64 = 200;

/// Open tasks first, then earliest due date with undated tasks last, then
/// newest first. Columns are qualified with the `t` alias.
pub const TASK_ORDERING: &str =
    "t.done ASC, t.due_date IS NULL ASC, t.due_date ASC, t.created_at DESC, t.id DESC";

/// Client-writable task values
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::FromRow)]
pub struct TaskFields {
    pub title: String,
    /// Optional deadline
    pub due_date: Option<NaiveDate>,
    pub done: bool,
}

/// A persisted task
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Task {
    pub id: i64,
    /// Parent application
    pub application_id: ApplicationId,
    #[sqlx(flatten)]
    pub fields: TaskFields,
    /// Set once at insertion
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fields.title)
    }
}

/// A task ready for insertion under a resolved parent
#[derive(Debug, Clone)]
pub struct NewTask {
    pub application_id: ApplicationId,
    pub fields: TaskFields,
    pub created_at: DateTime<Utc>,
}
