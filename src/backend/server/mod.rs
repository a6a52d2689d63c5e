//! Server Module
//!
//! This module contains all server-side code for initializing and configuring
//! the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Database pool and migrations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Database**: opens the SQLite pool and applies migrations
//! 2. **State Creation**: wraps the pool, token issuer and configuration
//! 3. **Router Creation**: builds the route table and middleware stack
//!
//! # Example
//!
//! ```rust,no_run
//! use jobtrack::backend::server::create_app;
//! use jobtrack::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::from_env()?).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Database loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::load_database;
pub use init::create_app;
pub use state::AppState;
