//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - User registration handler
//! ├── login.rs     - Token pair issuance
//! ├── refresh.rs   - Access token renewal
//! └── me.rs        - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register/ - User registration
//! - **`login`** - POST /api/auth/login/ - Access and refresh token
//! - **`refresh`** - POST /api/auth/refresh/ - New access token
//! - **`get_me`** - GET /api/auth/me/ - Current user info

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Refresh handler
pub mod refresh;

/// Get current user handler
pub mod me;

pub use types::{AccessResponse, LoginRequest, RefreshRequest, RegisterRequest, UserResponse};

pub use login::login;
pub use me::get_me;
pub use refresh::refresh;
pub use register::register;
