/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, state creation, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Open the database and run migrations
 * 2. Build the application state (pool, token issuer, configuration)
 * 3. Build the route table
 *
 * The route table is built once here and never changes while serving.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns the database error when the pool cannot be opened or the
/// migrations fail; the server does not start without its database.
pub async fn create_app(config: AppConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing jobtrack backend server");

    let pool = load_database(&config).await?;
    let app_state = AppState::new(pool, config);

    let app = create_router(app_state);

    tracing::info!("Router configured");

    Ok(app)
}
