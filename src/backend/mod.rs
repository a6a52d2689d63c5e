//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP server exposing
//! owner-scoped CRUD for job applications and their contacts and tasks,
//! backed by SQLite through sqlx.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, database
//! - **`routes`** - HTTP route table and router assembly
//! - **`auth`** - Users, password hashing, access and refresh tokens
//! - **`middleware`** - Bearer authentication and request extractors
//! - **`tracker`** - Ownership policy, data access, resource controllers
//! - **`error`** - Backend error type and its HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── tracker/        - Applications, contacts, tasks
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! 1. The bearer middleware verifies the access token and loads the user
//! 2. The route table dispatches to a controller action
//! 3. The controller scopes its query to the requester and, for a single
//!    object, checks the ownership policy
//! 4. Writes validate the client fields, add the server-owned values, and
//!    persist in one transaction
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`; the error renders itself as a
//! JSON body with the matching status code.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Job application tracker
pub mod tracker;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState};
