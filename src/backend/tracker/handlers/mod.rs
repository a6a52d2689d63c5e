//! Tracker Handlers
//!
//! One controller per entity, each with the same six actions:
//!
//! | Action | Method | Success |
//! |---|---|---|
//! | `list` | GET collection | 200 |
//! | `create` | POST collection | 201 |
//! | `retrieve` | GET item | 200 |
//! | `update` | PUT item | 200 |
//! | `partial_update` | PATCH item | 200 |
//! | `destroy` | DELETE item | 204 |
//!
//! Every action runs behind the bearer middleware and reads the requester
//! from [`AuthUser`](crate::backend::middleware::AuthUser).
//!
//! # Writes
//!
//! A write goes through two phases. The serializer validates the client
//! fields and produces the entity's `*Fields`; only then does the controller
//! add the server-owned values (owner, parent application, timestamps) and
//! persist. Each write runs in one `BEGIN IMMEDIATE` transaction, so the write
//! lock is held from the first read, and item writes re-check the ownership
//! policy on the row they loaded.
//!
//! # Nested routes
//!
//! Contacts and tasks live under `/api/applications/{application_id}/`. The
//! parent identifier always comes from the route; a parent link in the body
//! is ignored.

/// Application controller
pub mod applications;

/// Contact controller
pub mod contacts;

/// Task controller
pub mod tasks;

use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::backend::error::BackendError;
use crate::backend::middleware::RouteContext;
use crate::shared::models::ApplicationId;

/// Begin a transaction that takes the database write lock immediately
async fn begin_write(pool: &SqlitePool) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
    pool.begin_with("BEGIN IMMEDIATE").await
}

/// Parent application named by a nested item or list route
///
/// A malformed identifier cannot name an owned application, so it is reported
/// as not found.
fn route_parent(ctx: &RouteContext) -> Result<ApplicationId, BackendError> {
    let raw = ctx.application_id().ok_or_else(|| {
        BackendError::validation("application", "missing application context")
    })?;
    raw.parse().map_err(|_| BackendError::not_found())
}

/// Treat blank query values as absent
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
