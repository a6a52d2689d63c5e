/**
 * Refresh Handler
 *
 * POST /api/auth/refresh/ trades a valid refresh token for a new access
 * token. The refresh token itself is not rotated.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{AccessResponse, RefreshRequest};
use crate::backend::auth::sessions::TokenKind;
use crate::backend::auth::users::verify_user_exists;
use crate::backend::error::BackendError;
use crate::backend::middleware::ValidatedJson;
use crate::backend::server::state::AppState;

const INVALID_REFRESH: &str = "Token is invalid or expired";

/// Refresh handler
///
/// # Errors
///
/// * `401 Unauthorized` - If the token is malformed, expired, an access
///   token, or belongs to a user that no longer exists
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RefreshRequest>,
) -> Result<Json<AccessResponse>, BackendError> {
    let claims = state
        .tokens
        .verify(&request.refresh, TokenKind::Refresh)
        .map_err(|e| {
            tracing::warn!("Invalid refresh token: {:?}", e);
            BackendError::unauthorized(INVALID_REFRESH)
        })?;

    let user_id = claims.user_id().map_err(|e| {
        tracing::warn!("Invalid user ID in refresh token: {:?}", e);
        BackendError::unauthorized(INVALID_REFRESH)
    })?;

    let mut conn = state.pool.acquire().await?;
    if !verify_user_exists(&mut conn, user_id).await? {
        tracing::warn!("Refresh token for deleted user: {}", user_id);
        return Err(BackendError::unauthorized(INVALID_REFRESH));
    }

    let access = state.tokens.issue_access(user_id, &claims.username)?;

    Ok(Json(AccessResponse { access }))
}
