/**
 * Server Configuration
 *
 * Opens the SQLite database named by the configuration and brings its schema
 * up to date.
 *
 * # Error Handling
 *
 * Unlike optional services, the database is required: a connection or
 * migration failure is returned to the caller and aborts startup.
 */

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::shared::AppConfig;

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Parses `config.database_url`, creating the file if missing
/// 2. Enables foreign keys on every connection (cascading deletes rely on it)
/// 3. Creates the pool
/// 4. Runs database migrations
///
/// # Example
///
/// ```rust,no_run
/// use jobtrack::backend::server::config::load_database;
/// use jobtrack::shared::AppConfig;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = AppConfig::builder()
///     .database_url("sqlite::memory:")
///     .jwt_secret("a-secret-of-at-least-thirty-two-bytes")
///     .build()?;
/// let pool = load_database(&config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn load_database(config: &AppConfig) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections);
    if is_in_memory(&config.database_url) {
        // Each in-memory connection is its own database; keep the one we migrate.
        pool_options = pool_options
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>);
    }

    let pool = pool_options.connect_with(options).await?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
