/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * The route table is assembled here once, at startup, and is not modified
 * afterwards.
 */

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// 1. **API Routes**: authentication and the tracker resources
/// 2. **Fallback Handler**: JSON 404 for unknown paths
/// 3. **Trace Layer**: one span per request
///
/// # Arguments
///
/// * `app_state` - Pool, token issuer and configuration
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new(), app_state.clone());

    let router = router.fallback(|| async { BackendError::not_found() });

    router
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
