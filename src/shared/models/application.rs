/**
 * Application Model
 *
 * A job application owned by exactly one user. The owner is assigned when the
 * row is inserted and no update statement ever touches it.
 */

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::models::{ApplicationId, UserId};

/// Maximum length of `title`, `company`, `location` and `stage`
pub const TEXT_MAX_LEN: u64 = 200;

/// Maximum length of `source`
pub const SOURCE_MAX_LEN: u64 = 120;

/// Newest first; columns are qualified with the `a` alias.
pub const APPLICATION_ORDERING: &str = "a.created_at DESC, a.id DESC";

/// Where an application stands in the hiring process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Submitted, no response yet
    #[default]
    Applied,
    /// Interviews in progress
    Interview,
    /// Offer received
    Offer,
    /// Turned down
    Rejected,
}

impl ApplicationStatus {
    /// Every status, in pipeline order
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Interview,
        ApplicationStatus::Offer,
        ApplicationStatus::Rejected,
    ];

    /// Stored and transported value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Interview => "interview",
            Self::Offer => "offer",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                SharedError::validation("status", format!("\"{}\" is not a valid choice.", s))
            })
    }
}

impl TryFrom<String> for ApplicationStatus {
    type Error = SharedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Client-writable application values
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::FromRow)]
pub struct ApplicationFields {
    /// Job title, e.g. "Backend Engineer"
    pub title: String,
    /// Hiring company
    pub company: String,
    /// Job location, empty when unknown
    pub location: String,
    /// Free-form stage name, e.g. "take-home"
    pub stage: String,
    #[sqlx(try_from = "String")]
    pub status: ApplicationStatus,
    /// Where the posting was found, e.g. "referral"
    pub source: String,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    /// 0 = low, 5 = high
    pub priority: i64,
}

/// A persisted job application
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Application {
    pub id: ApplicationId,
    /// Owning user
    pub user_id: UserId,
    #[sqlx(flatten)]
    pub fields: ApplicationFields,
    /// Day the application was recorded
    pub created_at: NaiveDate,
    /// Refreshed on every mutation
    pub updated_at: DateTime<Utc>,
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.fields.title, self.fields.company)
    }
}

/// An application ready for insertion, server-owned values already applied
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub user_id: UserId,
    pub fields: ApplicationFields,
    pub created_at: NaiveDate,
    pub updated_at: DateTime<Utc>,
}

impl NewApplication {
    /// Stamp validated fields with their owner and creation time.
    pub fn new(user_id: UserId, fields: ApplicationFields, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            fields,
            created_at: now.date_naive(),
            updated_at: now,
        }
    }
}
