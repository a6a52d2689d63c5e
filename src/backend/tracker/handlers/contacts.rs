/**
 * Contact Controller
 *
 * Routes, all under `/api/applications/{application_id}/`:
 *
 * - `GET contacts/` - contacts of the application, if the requester owns it
 * - `POST contacts/` - create, linked to the application in the route
 * - `GET|PUT|PATCH|DELETE contacts/{id}/`
 */

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, RouteContext, ValidatedJson};
use crate::backend::server::state::AppState;
use crate::backend::tracker::db::contacts::{
    delete_contact, get_contact, insert_contact, list_contacts, update_contact, ContactFilter,
};
use crate::backend::tracker::handlers::{begin_write, non_blank, route_parent};
use crate::backend::tracker::policy::{check_object_permission, resolve_parent};
use crate::shared::models::NewContact;
use crate::shared::serializers::{
    apply_update, build_fields, ContactInput, ContactResponse, WriteMode,
};

/// Query parameters accepted by the list action
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactQuery {
    pub search: Option<String>,
}

/// List the contacts of one of the requester's applications
pub async fn list(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ctx: RouteContext,
    Query(query): Query<ContactQuery>,
) -> Result<Json<Vec<ContactResponse>>, BackendError> {
    let application_id = route_parent(&ctx)?;
    let filter = ContactFilter {
        search: non_blank(query.search),
    };

    let mut conn = state.pool.acquire().await?;
    let contacts = list_contacts(&mut conn, user.user_id, application_id, &filter).await?;

    Ok(Json(contacts.into_iter().map(ContactResponse::from).collect()))
}

/// Get one contact
pub async fn retrieve(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ctx: RouteContext,
) -> Result<Json<ContactResponse>, BackendError> {
    let application_id = route_parent(&ctx)?;
    let id = ctx.object_id()?;
    let mut conn = state.pool.acquire().await?;

    let contact = get_contact(&mut conn, user.user_id, application_id, id)
        .await?
        .ok_or_else(BackendError::not_found)?;
    check_object_permission(&mut conn, user.user_id, &contact).await?;

    Ok(Json(ContactResponse::from(contact)))
}

/// Create a contact under the application named in the route
///
/// The parent is resolved before the body is validated, so a request against
/// someone else's application is refused without revealing anything about
/// its payload.
pub async fn create(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ctx: RouteContext,
    ValidatedJson(input): ValidatedJson<ContactInput>,
) -> Result<(StatusCode, Json<ContactResponse>), BackendError> {
    let mut tx = begin_write(&state.pool).await?;

    let parent = resolve_parent(&mut tx, user.user_id, ctx.application_id()).await?;
    let fields = build_fields(input)?;
    let new = NewContact {
        application_id: parent.id,
        fields,
    };

    let contact = insert_contact(&mut tx, &new).await?;
    tx.commit().await?;

    tracing::info!(
        "User {} added contact {} to application {}",
        user.user_id,
        contact.id,
        parent.id
    );

    Ok((StatusCode::CREATED, Json(ContactResponse::from(contact))))
}

/// Replace a contact's client fields (PUT)
pub async fn update(
    state: State<AppState>,
    user: AuthUser,
    ctx: RouteContext,
    ValidatedJson(input): ValidatedJson<ContactInput>,
) -> Result<Json<ContactResponse>, BackendError> {
    write(state, user, ctx, input, WriteMode::Replace).await
}

/// Change some of a contact's client fields (PATCH)
pub async fn partial_update(
    state: State<AppState>,
    user: AuthUser,
    ctx: RouteContext,
    ValidatedJson(input): ValidatedJson<ContactInput>,
) -> Result<Json<ContactResponse>, BackendError> {
    write(state, user, ctx, input, WriteMode::Partial).await
}

async fn write(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ctx: RouteContext,
    input: ContactInput,
    mode: WriteMode,
) -> Result<Json<ContactResponse>, BackendError> {
    let application_id = route_parent(&ctx)?;
    let id = ctx.object_id()?;
    let mut tx = begin_write(&state.pool).await?;

    let contact = get_contact(&mut tx, user.user_id, application_id, id)
        .await?
        .ok_or_else(BackendError::not_found)?;
    check_object_permission(&mut tx, user.user_id, &contact).await?;

    let mut fields = contact.fields;
    apply_update(input, mode, &mut fields)?;

    let contact = update_contact(&mut tx, id, &fields).await?;
    tx.commit().await?;

    tracing::info!("User {} updated contact {}", user.user_id, id);

    Ok(Json(ContactResponse::from(contact)))
}

/// Delete a contact
pub async fn destroy(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ctx: RouteContext,
) -> Result<StatusCode, BackendError> {
    let application_id = route_parent(&ctx)?;
    let id = ctx.object_id()?;
    let mut tx = begin_write(&state.pool).await?;

    let contact = get_contact(&mut tx, user.user_id, application_id, id)
        .await?
        .ok_or_else(BackendError::not_found)?;
    check_object_permission(&mut tx, user.user_id, &contact).await?;

    delete_contact(&mut tx, id).await?;
    tx.commit().await?;

    tracing::info!("User {} deleted contact {}", user.user_id, id);

    Ok(StatusCode::NO_CONTENT)
}
