//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router assembly, fallback, tracing
//! └── api_routes.rs   - Authentication and tracker endpoints
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use jobtrack::backend::routes::create_router;
//! use jobtrack::backend::server::{load_database, AppState};
//! use jobtrack::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let pool = load_database(&config).await?;
//! let router = create_router(AppState::new(pool, config));
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// API endpoint declarations
pub mod api_routes;

pub use router::create_router;
