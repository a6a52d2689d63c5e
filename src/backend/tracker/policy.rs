/**
 * Ownership Policy
 *
 * Object-level authorization for tracker entities. Each entity type declares
 * how it reaches its owner by implementing [`OwnedResource`]:
 *
 * - directly, through its own user reference (applications)
 * - one hop through its parent application (contacts, tasks)
 *
 * A type that does not override [`OwnedResource::owner_path`] is denied.
 * Controllers run this check on every retrieve, update and delete in addition
 * to scoping their queries by owner.
 */

use sqlx::SqliteConnection;

use crate::backend::error::BackendError;
use crate::backend::tracker::db::applications::{application_owner, get_application};
use crate::shared::models::{Application, ApplicationId, Contact, Task, UserId};

/// How an entity reaches the user that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerPath {
    /// The entity names its owner
    Direct(UserId),
    /// The entity belongs to an application, which names the owner
    ThroughApplication(ApplicationId),
    /// No ownership declared
    Undeclared,
}

/// An entity the ownership policy can reason about
pub trait OwnedResource {
    fn owner_path(&self) -> OwnerPath {
        OwnerPath::Undeclared
    }
}

impl OwnedResource for Application {
    fn owner_path(&self) -> OwnerPath {
        OwnerPath::Direct(self.user_id)
    }
}

impl OwnedResource for Contact {
    fn owner_path(&self) -> OwnerPath {
        OwnerPath::ThroughApplication(self.application_id)
    }
}

impl OwnedResource for Task {
    fn owner_path(&self) -> OwnerPath {
        OwnerPath::ThroughApplication(self.application_id)
    }
}

/// Whether `requester` owns `target`
pub async fn has_object_permission<R: OwnedResource + ?Sized>(
    conn: &mut SqliteConnection,
    requester: UserId,
    target: &R,
) -> Result<bool, sqlx::Error> {
    match target.owner_path() {
        OwnerPath::Direct(owner) => Ok(owner == requester),
        OwnerPath::ThroughApplication(application_id) => {
            let owner = application_owner(conn, application_id).await?;
            Ok(owner == Some(requester))
        }
        OwnerPath::Undeclared => Ok(false),
    }
}

/// Fail with 403 unless `requester` owns `target`
pub async fn check_object_permission<R: OwnedResource + ?Sized>(
    conn: &mut SqliteConnection,
    requester: UserId,
    target: &R,
) -> Result<(), BackendError> {
    if has_object_permission(conn, requester, target).await? {
        Ok(())
    } else {
        tracing::warn!(
            "Permission denied for user {} on {:?}",
            requester,
            target.owner_path()
        );
        Err(BackendError::forbidden())
    }
}

/// Resolve the application a nested create attaches to
///
/// `raw` is the `application_id` route parameter, if the route has one.
///
/// # Errors
///
/// * `400 Bad Request` - The route carries no application identifier
/// * `403 Forbidden` - The identifier is malformed, unknown, or names another
///   user's application; the three cases look the same to the client
pub async fn resolve_parent(
    conn: &mut SqliteConnection,
    requester: UserId,
    raw: Option<&str>,
) -> Result<Application, BackendError> {
    let raw = raw.ok_or_else(|| {
        tracing::warn!("Nested create without an application in the route");
        BackendError::validation("application", "missing application context")
    })?;

    let Ok(application_id) = raw.parse::<ApplicationId>() else {
        tracing::warn!("Malformed application id {:?} from user {}", raw, requester);
        return Err(BackendError::forbidden());
    };

    get_application(conn, requester, application_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!(
                "User {} may not attach to application {}",
                requester,
                application_id
            );
            BackendError::forbidden()
        })
}
