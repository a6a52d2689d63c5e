//! Database test fixtures and utilities
//!
//! Every test gets its own in-memory SQLite database with the migrations
//! applied, wrapped in the full router.

use axum_test::TestServer;
use sqlx::SqlitePool;

use jobtrack::backend::routes::create_router;
use jobtrack::backend::server::{load_database, AppState};
use jobtrack::shared::AppConfig;

/// Signing secret for test tokens
pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Configuration for an isolated in-memory database
///
/// bcrypt runs at its minimum cost so hashing stays fast.
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .database_url("sqlite::memory:")
        .jwt_secret(TEST_SECRET)
        .password_hash_cost(4)
        .build()
        .expect("Failed to build test configuration")
}

/// Test application fixture
///
/// Holds the server under test and a handle on its database for direct
/// inspection.
pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
    pub state: AppState,
}

impl TestApp {
    /// Create a new application over a fresh database
    pub async fn new() -> Self {
        let config = test_config();
        let pool = load_database(&config)
            .await
            .expect("Failed to open test database");
        let state = AppState::new(pool.clone(), config);
        let server =
            TestServer::new(create_router(state.clone())).expect("Failed to start test server");

        Self {
            server,
            pool,
            state,
        }
    }

    /// Number of rows in a table
    pub async fn count(&self, table: &str) -> i64 {
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        sqlx::query_scalar(&sql)
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows")
    }
}
