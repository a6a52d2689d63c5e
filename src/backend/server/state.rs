/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The SQLite connection pool
 * - The token issuer shared by login, refresh, and the bearer middleware
 * - The configuration the server was started with
 *
 * Everything is cheap to clone: the pool is reference counted internally and
 * the rest sits behind `Arc`.
 *
 * # Example
 *
 * ```rust
 * use jobtrack::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let _conn = state.pool.acquire().await;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenIssuer;
use crate::shared::AppConfig;

/// Application state
///
/// # Fields
///
/// * `pool` - SQLite connection pool
/// * `tokens` - JWT issuer and verifier
/// * `config` - Startup configuration
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tokens: Arc<TokenIssuer>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build the state from an open pool and the configuration
    pub fn new(pool: SqlitePool, config: AppConfig) -> Self {
        Self {
            pool,
            tokens: Arc::new(TokenIssuer::from_config(&config)),
            config: Arc::new(config),
        }
    }
}

/// Implement FromRef for SqlitePool
///
/// This allows Axum handlers to extract `SqlitePool` directly
/// from `AppState` using `State(SqlitePool)`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

/// Implement FromRef for the token issuer
impl FromRef<AppState> for Arc<TokenIssuer> {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}
