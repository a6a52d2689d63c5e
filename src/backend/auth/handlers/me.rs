/**
 * Get Current User Handler
 *
 * GET /api/auth/me/ returns the authenticated user. The route sits behind the
 * bearer middleware, so the token has already been verified here.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

/// Get current user handler
///
/// # Example Response
///
/// ```json
/// {
///   "id": 1,
///   "username": "alice",
///   "email": "alice@example.com",
///   "date_joined": "2026-10-18T09:30:00Z"
/// }
/// ```
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let mut conn = state.pool.acquire().await?;

    let user = get_user_by_id(&mut conn, user.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", user.user_id);
            BackendError::unauthorized("User not found")
        })?;

    Ok(Json(UserResponse::from(user)))
}
