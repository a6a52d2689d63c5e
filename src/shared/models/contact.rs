/**
 * Contact Model
 *
 * A person attached to one application: a recruiter, an HR manager, a
 * referral. Ownership follows the parent application's user.
 */

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shared::models::ApplicationId;

/// Maximum length of `name` and `role`
pub const NAME_MAX_LEN: u64 = 120;

/// Maximum length of `email`
pub const EMAIL_MAX_LEN: u64 = 254;

/// Maximum length of `phone`
pub const PHONE_MAX_LEN: u64 = 50;

/// Insertion order; columns are qualified with the `c` alias.
pub const CONTACT_ORDERING: &str = "c.id ASC";

/// Client-writable contact values
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContactFields {
    pub name: String,
    /// Empty, or a well-formed address
    pub email: String,
    /// Job title, e.g. "Recruiter"
    pub role: String,
    pub phone: String,
    pub notes: String,
}

/// A persisted contact
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Contact {
    pub id: i64,
    /// Parent application
    pub application_id: ApplicationId,
    #[sqlx(flatten)]
    pub fields: ContactFields,
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.fields.name, self.fields.role)
    }
}

/// A contact ready for insertion under a resolved parent
#[derive(Debug, Clone)]
pub struct NewContact {
    pub application_id: ApplicationId,
    pub fields: ContactFields,
}
