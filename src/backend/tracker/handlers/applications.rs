/**
 * Application Controller
 *
 * Routes:
 *
 * - `GET /api/applications/` - the requester's applications, newest first
 * - `POST /api/applications/` - create, owned by the requester
 * - `GET|PUT|PATCH|DELETE /api/applications/{id}/`
 *
 * Responses embed the application's contact and task summaries, loaded with
 * one query per child table for the whole page.
 */

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use serde::Deserialize;
use sqlx::SqliteConnection;

use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, RouteContext, ValidatedJson};
use crate::backend::server::state::AppState;
use crate::backend::tracker::db::applications::{
    delete_application, get_application, insert_application, list_applications,
    update_application, ApplicationFilter,
};
use crate::backend::tracker::db::contacts::contact_summaries;
use crate::backend::tracker::db::tasks::task_summaries;
use crate::backend::tracker::handlers::{begin_write, non_blank};
use crate::backend::tracker::policy::check_object_permission;
use crate::shared::models::{Application, ApplicationStatus, NewApplication};
use crate::shared::serializers::{
    apply_update, build_fields, ApplicationInput, ApplicationResponse, WriteMode,
};
use crate::shared::SharedError;

/// Query parameters accepted by the list action
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationQuery {
    pub status: Option<String>,
    pub company: Option<String>,
    pub search: Option<String>,
}

impl ApplicationQuery {
    fn into_filter(self) -> Result<ApplicationFilter, SharedError> {
        let status = non_blank(self.status)
            .map(|raw| raw.parse::<ApplicationStatus>())
            .transpose()?;

        Ok(ApplicationFilter {
            status,
            company: non_blank(self.company),
            search: non_blank(self.search),
        })
    }
}

/// Attach prefetched contacts and tasks to each application
async fn render(
    conn: &mut SqliteConnection,
    applications: Vec<Application>,
) -> Result<Vec<ApplicationResponse>, sqlx::Error> {
    let ids: Vec<_> = applications.iter().map(|app| app.id).collect();
    let mut contacts = contact_summaries(&mut *conn, &ids).await?;
    let mut tasks = task_summaries(&mut *conn, &ids).await?;

    Ok(applications
        .into_iter()
        .map(|app| {
            let app_contacts = contacts.remove(&app.id).unwrap_or_default();
            let app_tasks = tasks.remove(&app.id).unwrap_or_default();
            ApplicationResponse::new(app, app_contacts, app_tasks)
        })
        .collect())
}

async fn render_one(
    conn: &mut SqliteConnection,
    application: Application,
) -> Result<ApplicationResponse, BackendError> {
    render(conn, vec![application])
        .await?
        .pop()
        .ok_or_else(BackendError::not_found)
}

/// List the requester's applications
pub async fn list(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(query): Query<ApplicationQuery>,
) -> Result<Json<Vec<ApplicationResponse>>, BackendError> {
    let filter = query.into_filter()?;
    let mut conn = state.pool.acquire().await?;

    let applications = list_applications(&mut conn, user.user_id, &filter).await?;
    let body = render(&mut conn, applications).await?;

    Ok(Json(body))
}

/// Get one of the requester's applications
pub async fn retrieve(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ctx: RouteContext,
) -> Result<Json<ApplicationResponse>, BackendError> {
    let id = ctx.object_id()?;
    let mut conn = state.pool.acquire().await?;

    let application = get_application(&mut conn, user.user_id, id)
        .await?
        .ok_or_else(BackendError::not_found)?;
    check_object_permission(&mut conn, user.user_id, &application).await?;

    Ok(Json(render_one(&mut conn, application).await?))
}

/// Create an application owned by the requester
///
/// Any `user`, `id`, or timestamp in the body is ignored.
pub async fn create(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(input): ValidatedJson<ApplicationInput>,
) -> Result<(StatusCode, Json<ApplicationResponse>), BackendError> {
    let fields = build_fields(input)?;
    let new = NewApplication::new(user.user_id, fields, Utc::now());

    let mut tx = begin_write(&state.pool).await?;
    let application = insert_application(&mut tx, &new).await?;
    tx.commit().await?;

    tracing::info!(
        "User {} created application {} ({})",
        user.user_id,
        application.id,
        application
    );

    Ok((
        StatusCode::CREATED,
        Json(ApplicationResponse::new(application, Vec::new(), Vec::new())),
    ))
}

/// Replace an application's client fields (PUT)
pub async fn update(
    state: State<AppState>,
    user: AuthUser,
    ctx: RouteContext,
    ValidatedJson(input): ValidatedJson<ApplicationInput>,
) -> Result<Json<ApplicationResponse>, BackendError> {
    write(state, user, ctx, input, WriteMode::Replace).await
}

/// Change some of an application's client fields (PATCH)
pub async fn partial_update(
    state: State<AppState>,
    user: AuthUser,
    ctx: RouteContext,
    ValidatedJson(input): ValidatedJson<ApplicationInput>,
) -> Result<Json<ApplicationResponse>, BackendError> {
    write(state, user, ctx, input, WriteMode::Partial).await
}

async fn write(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ctx: RouteContext,
    input: ApplicationInput,
    mode: WriteMode,
) -> Result<Json<ApplicationResponse>, BackendError> {
    let id = ctx.object_id()?;
    let mut tx = begin_write(&state.pool).await?;

    let application = get_application(&mut tx, user.user_id, id)
        .await?
        .ok_or_else(BackendError::not_found)?;
    check_object_permission(&mut tx, user.user_id, &application).await?;

    let mut fields = application.fields;
    apply_update(input, mode, &mut fields)?;

    let application = update_application(&mut tx, id, &fields, Utc::now()).await?;
    let body = render_one(&mut tx, application).await?;
    tx.commit().await?;

    tracing::info!("User {} updated application {}", user.user_id, id);

    Ok(Json(body))
}

/// Delete an application with its contacts and tasks
pub async fn destroy(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ctx: RouteContext,
) -> Result<StatusCode, BackendError> {
    let id = ctx.object_id()?;
    let mut tx = begin_write(&state.pool).await?;

    let application = get_application(&mut tx, user.user_id, id)
        .await?
        .ok_or_else(BackendError::not_found)?;
    check_object_permission(&mut tx, user.user_id, &application).await?;

    delete_application(&mut tx, id).await?;
    tx.commit().await?;

    tracing::info!("User {} deleted application {}", user.user_id, id);

    Ok(StatusCode::NO_CONTENT)
}
