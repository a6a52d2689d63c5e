/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/auth/login/.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Issue an access and a refresh token
 *
 * An unknown username and a wrong password produce the same 401 body.
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::backend::auth::handlers::types::LoginRequest;
use crate::backend::auth::sessions::TokenPair;
use crate::backend::auth::users::get_user_by_username;
use crate::backend::error::BackendError;
use crate::backend::middleware::ValidatedJson;
use crate::backend::server::state::AppState;

const BAD_CREDENTIALS: &str = "No active account found with the given credentials";

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - If the body is not a login request
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `500 Internal Server Error` - If the query or token signing fails
///
/// # Example Response
///
/// ```json
/// {
///   "access": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "refresh": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenPair>, BackendError> {
    tracing::info!("Login request for: {}", request.username);

    let mut conn = state.pool.acquire().await?;

    let user = get_user_by_username(&mut conn, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.username);
            BackendError::unauthorized(BAD_CREDENTIALS)
        })?;

    if !verify(&request.password, &user.password_hash)? {
        tracing::warn!("Invalid password for user: {}", request.username);
        return Err(BackendError::unauthorized(BAD_CREDENTIALS));
    }

    let tokens = state.tokens.issue_pair(user.id, &user.username)?;

    tracing::info!("User logged in successfully: {} ({})", user.username, user.id);

    Ok(Json(tokens))
}
