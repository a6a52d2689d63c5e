//! Data Model
//!
//! Entity definitions for the tracker: a user's job [`Application`]s and the
//! [`Contact`]s and [`Task`]s attached to each one.
//!
//! Every entity is split the same way:
//!
//! - a `*Fields` struct holding the client-writable values, and
//! - the persisted entity, which adds the server-owned values (identifier,
//!   owner or parent link, timestamps) around a flattened `*Fields`.
//!
//! Writes never build an entity directly from client input. The serializers
//! produce `*Fields`, and the controllers wrap them in a `New*` record with the
//! server-owned values before anything reaches the database.
//!
//! # Ordering
//!
//! Canonical list orderings are kept here as SQL fragments so every query that
//! lists an entity agrees on them:
//!
//! - applications: newest `created_at` first
//! - tasks: open before done, then earliest `due_date` (no due date last),
//!   then newest `created_at`
//!
//! Ties are broken by descending id so equal timestamps still list in a
//! stable order.

/// Job applications and their status
pub mod application;

/// Contacts attached to an application
pub mod contact;

/// Follow-up tasks attached to an application
pub mod task;

pub use application::{
    Application, ApplicationFields, ApplicationStatus, NewApplication, APPLICATION_ORDERING,
};
pub use contact::{Contact, ContactFields, NewContact, CONTACT_ORDERING};
pub use task::{NewTask, Task, TaskFields, TASK_ORDERING};

/// Identifier of a registered user
pub type UserId = i64;

/// Identifier of an application
pub type ApplicationId = i64;
