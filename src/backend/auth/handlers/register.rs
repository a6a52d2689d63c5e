/**
 * Register Handler
 *
 * This module implements the user registration handler for
 * POST /api/auth/register/.
 *
 * # Validation
 *
 * - Username: 3-150 characters, letters, digits and `@.+-_` only
 * - Email: optional, must be well-formed when given
 * - Password: at least 8 characters
 * - Username must be unique (409 Conflict otherwise)
 *
 * Registration does not log the user in; the client calls login next.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::hash;
use validator::{Validate, ValidateEmail};

use crate::backend::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::backend::auth::users::{create_user, get_user_by_username};
use crate::backend::error::BackendError;
use crate::backend::middleware::ValidatedJson;
use crate::backend::server::state::AppState;
use crate::shared::error::FieldErrors;
use crate::shared::SharedError;

const USERNAME_TAKEN: &str = "A user with that username already exists.";

/// Usernames may hold letters, digits and `@.+-_`
fn is_valid_username(username: &str) -> bool {
    username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
}

fn validate_request(request: &RegisterRequest) -> Result<(), SharedError> {
    let mut errors = match request.validate() {
        Ok(()) => FieldErrors::new(),
        Err(invalid) => SharedError::from(invalid).field_errors(),
    };

    if !is_valid_username(&request.username) {
        errors.entry("username".to_string()).or_default().push(
            "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters."
                .to_string(),
        );
    }
    if !request.email.is_empty() && !request.email.validate_email() {
        errors
            .entry("email".to_string())
            .or_default()
            .push("Enter a valid email address.".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SharedError::invalid_fields(errors))
    }
}

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - If any field fails validation
/// * `409 Conflict` - If the username is taken
/// * `500 Internal Server Error` - If hashing or the insert fails
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register/ HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "email": "alice@example.com",
///   "password": "correct horse"
/// }
/// ```
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), BackendError> {
    tracing::info!("Register request for username: {}", request.username);

    if let Err(err) = validate_request(&request) {
        tracing::warn!("Rejected registration for {}: {}", request.username, err);
        return Err(err.into());
    }

    let mut conn = state.pool.acquire().await?;

    if get_user_by_username(&mut conn, &request.username).await?.is_some() {
        tracing::warn!("Username already exists: {}", request.username);
        return Err(BackendError::handler(StatusCode::CONFLICT, USERNAME_TAKEN));
    }

    let password_hash = hash(&request.password, state.config.password_hash_cost)?;

    let user = create_user(&mut conn, &request.username, &request.email, &password_hash)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                tracing::warn!("Username already exists: {}", request.username);
                BackendError::handler(StatusCode::CONFLICT, USERNAME_TAKEN)
            }
            other => other.into(),
        })?;

    tracing::info!("User created successfully: {} ({})", user.username, user.id);

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
