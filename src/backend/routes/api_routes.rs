/**
 * API Routes
 *
 * This module declares every API endpoint.
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /api/auth/register/` - User registration
 * - `POST /api/auth/login/` - Access and refresh token
 * - `POST /api/auth/refresh/` - New access token
 *
 * ## Authenticated
 * - `GET /api/auth/me/` - Current user
 * - `GET|POST /api/applications/`
 * - `GET|PUT|PATCH|DELETE /api/applications/{id}/`
 * - `GET|POST /api/applications/{application_id}/contacts/`
 * - `GET|PUT|PATCH|DELETE /api/applications/{application_id}/contacts/{id}/`
 * - `GET|POST /api/applications/{application_id}/tasks/`
 * - `GET|PUT|PATCH|DELETE /api/applications/{application_id}/tasks/{id}/`
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, refresh, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;
use crate::backend::tracker::handlers::{applications, contacts, tasks};

/// Configure API routes
///
/// Public authentication routes are added as they are. Everything else goes
/// behind the bearer middleware as a `route_layer`, so it only runs for
/// requests that matched one of those routes.
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State handed to the bearer middleware
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    router
        .merge(auth_routes())
        .merge(protected_routes().route_layer(middleware::from_fn_with_state(
            app_state,
            auth_middleware,
        )))
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register/", post(register))
        .route("/api/auth/login/", post(login))
        .route("/api/auth/refresh/", post(refresh))
}

fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/me/", get(get_me))
        .route(
            "/api/applications/",
            get(applications::list).post(applications::create),
        )
        .route(
            "/api/applications/{id}/",
            get(applications::retrieve)
                .put(applications::update)
                .patch(applications::partial_update)
                .delete(applications::destroy),
        )
        .route(
            "/api/applications/{application_id}/contacts/",
            get(contacts::list).post(contacts::create),
        )
        .route(
            "/api/applications/{application_id}/contacts/{id}/",
            get(contacts::retrieve)
                .put(contacts::update)
                .patch(contacts::partial_update)
                .delete(contacts::destroy),
        )
        .route(
            "/api/applications/{application_id}/tasks/",
            get(tasks::list).post(tasks::create),
        )
        .route(
            "/api/applications/{application_id}/tasks/{id}/",
            get(tasks::retrieve)
                .put(tasks::update)
                .patch(tasks::partial_update)
                .delete(tasks::destroy),
        )
}
