//! Jobtrack - Main Library
//!
//! Jobtrack is a job-application tracker backend. Authenticated users keep a
//! list of the jobs they applied for, the people they are talking to about
//! each one, and the follow-up tasks that remain.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that do not depend on the server
//!   - Entity definitions and canonical orderings
//!   - Transport representations and input validation
//!   - Shared error type and application configuration
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server and route table
//!   - Registration, login, and JWT access/refresh tokens
//!   - Ownership policy and owner-scoped data access (SQLite via sqlx)
//!
//! # Usage
//!
//! ```rust,no_run
//! use jobtrack::backend::server::create_app;
//! use jobtrack::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::from_env()?).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Access Model
//!
//! Every application belongs to exactly one user, and every contact and task
//! to exactly one application. A user can only see or change what they own,
//! directly or through the parent application; anything else looks like it
//! does not exist.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
