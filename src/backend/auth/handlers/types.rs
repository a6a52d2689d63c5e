/**
 * Authentication Handler Types
 *
 * Request and response bodies for the register, login, refresh, and me
 * handlers.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::backend::auth::users::User;
use crate::shared::models::UserId;

/// Register request
#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct RegisterRequest {
    /// 3-150 characters of letters, digits and `@.+-_`
    #[validate(length(min = 3, max = 150, message = "Ensure this field has 3 to 150 characters."))]
    pub username: String,
    /// Optional contact email
    #[serde(default)]
    pub email: String,
    /// Plain password, hashed before storage
    #[validate(length(min = 8, message = "Ensure this field has at least 8 characters."))]
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Refresh request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Refresh response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AccessResponse {
    pub access: String,
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub date_joined: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            date_joined: user.created_at,
        }
    }
}
