//! Tracker Module
//!
//! The job-application tracker: applications owned by a user, and the
//! contacts and tasks attached to each application.
//!
//! # Module Structure
//!
//! ```text
//! tracker/
//! ├── mod.rs       - Module exports and documentation
//! ├── policy.rs    - Object-level ownership checks
//! ├── db/          - Owner-scoped SQL per entity
//! └── handlers/    - One controller per entity
//! ```
//!
//! # Access Control
//!
//! Two layers apply to every request that names an object:
//!
//! 1. The query is scoped to the requester, so another user's object is a 404
//! 2. The loaded object passes through [`policy::check_object_permission`],
//!    which fails closed for any type without declared ownership

/// Object-level ownership checks
pub mod policy;

/// Data access
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use policy::{check_object_permission, resolve_parent, OwnedResource, OwnerPath};
