//! Authentication Module
//!
//! This module handles user registration, credential checks, and the access
//! and refresh tokens that authenticate every tracker request.
//!
//! # Architecture
//!
//! - **`users`** - User data model and database operations
//! - **`sessions`** - JWT issuance and verification
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username and password → user created (no token)
//! 2. **Login**: credentials verified → access and refresh token returned
//! 3. **Refresh**: refresh token verified → new access token returned
//! 4. **Requests**: access token sent as `Authorization: Bearer <token>`
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Access tokens expire after five minutes and refresh tokens after a day
//!   by default
//! - Invalid credentials return 401 without saying which part was wrong

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, refresh, register};
pub use sessions::{Claims, TokenIssuer, TokenKind, TokenPair};
