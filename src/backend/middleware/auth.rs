/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies access tokens from the
 * Authorization header and provides the user to handlers.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::TokenKind;
use crate::backend::auth::users::verify_user_exists;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::models::UserId;

const NOT_AUTHENTICATED: &str = "Authentication credentials were not provided.";
const INVALID_TOKEN: &str = "Given token not valid for any token type";

/// Authenticated user data extracted from the access token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies it is an unexpired access token
/// 3. Checks that its user still exists
/// 4. Attaches the user to request extensions for use in handlers
///
/// Returns 401 Unauthorized if any step fails. No handler code runs for an
/// unauthenticated request.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::unauthorized(NOT_AUTHENTICATED)
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        BackendError::unauthorized(NOT_AUTHENTICATED)
    })?;

    let claims = app_state
        .tokens
        .verify(token.trim(), TokenKind::Access)
        .map_err(|e| {
            tracing::warn!("Invalid token: {:?}", e);
            BackendError::unauthorized(INVALID_TOKEN)
        })?;

    let user_id = claims.user_id().map_err(|e| {
        tracing::warn!("Invalid user ID in token: {:?}", e);
        BackendError::unauthorized(INVALID_TOKEN)
    })?;

    let mut conn = app_state.pool.acquire().await?;
    if !verify_user_exists(&mut conn, user_id).await? {
        tracing::warn!("User not found in database: {}", user_id);
        return Err(BackendError::unauthorized(INVALID_TOKEN));
    }
    drop(conn);

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        username: claims.username,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for authenticated user
///
/// This can be used as a parameter in handlers to automatically extract
/// the authenticated user from request extensions.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized(NOT_AUTHENTICATED)
            })?;

        Ok(AuthUser(user))
    }
}
