/**
 * Task Controller
 *
 * Routes, all under `/api/applications/{application_id}/`:
 *
 * - `GET tasks/` - open tasks first, then by due date (undated last)
 * - `POST tasks/` - create, linked to the application in the route
 * - `GET|PUT|PATCH|DELETE tasks/{id}/`
 *
 * `?done=true` or `?done=false` narrows the list.
 */

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, RouteContext, ValidatedJson};
use crate::backend::server::state::AppState;
use crate::backend::tracker::db::tasks::{
    delete_task, get_task, insert_task, list_tasks, update_task, TaskFilter,
};
use crate::backend::tracker::handlers::{begin_write, non_blank, route_parent};
use crate::backend::tracker::policy::{check_object_permission, resolve_parent};
use crate::shared::models::NewTask;
use crate::shared::serializers::{apply_update, build_fields, TaskInput, TaskResponse, WriteMode};
use crate::shared::SharedError;

/// Query parameters accepted by the list action
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskQuery {
    pub done: Option<String>,
}

impl TaskQuery {
    fn into_filter(self) -> Result<TaskFilter, SharedError> {
        let done = match non_blank(self.done).as_deref() {
            None => None,
            Some("true" | "True" | "1") => Some(true),
            Some("false" | "False" | "0") => Some(false),
            Some(other) => {
                return Err(SharedError::validation(
                    "done",
                    format!("\"{}\" is not a valid boolean.", other),
                ))
            }
        };
        Ok(TaskFilter { done })
    }
}

/// List the tasks of one of the requester's applications
pub async fn list(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ctx: RouteContext,
    Query(query): Query<TaskQuery>,
) -> Result<Json<Vec<TaskResponse>>, BackendError> {
    let application_id = route_parent(&ctx)?;
    let filter = query.into_filter()?;

    let mut conn = state.pool.acquire().await?;
    let tasks = list_tasks(&mut conn, user.user_id, application_id, &filter).await?;

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// Get one task
pub async fn retrieve(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ctx: RouteContext,
) -> Result<Json<TaskResponse>, BackendError> {
    let application_id = route_parent(&ctx)?;
    let id = ctx.object_id()?;
    let mut conn = state.pool.acquire().await?;

    let task = get_task(&mut conn, user.user_id, application_id, id)
        .await?
        .ok_or_else(BackendError::not_found)?;
    check_object_permission(&mut conn, user.user_id, &task).await?;

    Ok(Json(TaskResponse::from(task)))
}

/// Create a task under the application named in the route
pub async fn create(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ctx: RouteContext,
    ValidatedJson(input): ValidatedJson<TaskInput>,
) -> Result<(StatusCode, Json<TaskResponse>), BackendError> {
    let mut tx = begin_write(&state.pool).await?;

    let parent = resolve_parent(&mut tx, user.user_id, ctx.application_id()).await?;
    let fields = build_fields(input)?;
    let new = NewTask {
        application_id: parent.id,
        fields,
        created_at: Utc::now(),
    };

    let task = insert_task(&mut tx, &new).await?;
    tx.commit().await?;

    tracing::info!(
        "User {} added task {} to application {}",
        user.user_id,
        task.id,
        parent.id
    );

    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

/// Replace a task's client fields (PUT)
pub async fn update(
    state: State<AppState>,
    user: AuthUser,
    ctx: RouteContext,
    ValidatedJson(input): ValidatedJson<TaskInput>,
) -> Result<Json<TaskResponse>, BackendError> {
    write(state, user, ctx, input, WriteMode::Replace).await
}

/// Change some of a task's client fields (PATCH)
pub async fn partial_update(
    state: State<AppState>,
    user: AuthUser,
    ctx: RouteContext,
    ValidatedJson(input): ValidatedJson<TaskInput>,
) -> Result<Json<TaskResponse>, BackendError> {
    write(state, user, ctx, input, WriteMode::Partial).await
}

async fn write(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ctx: RouteContext,
    input: TaskInput,
    mode: WriteMode,
) -> Result<Json<TaskResponse>, BackendError> {
    let application_id = route_parent(&ctx)?;
    let id = ctx.object_id()?;
    let mut tx = begin_write(&state.pool).await?;

    let task = get_task(&mut tx, user.user_id, application_id, id)
        .await?
        .ok_or_else(BackendError::not_found)?;
    check_object_permission(&mut tx, user.user_id, &task).await?;

    let mut fields = task.fields;
    apply_update(input, mode, &mut fields)?;

    let task = update_task(&mut tx, id, &fields).await?;
    tx.commit().await?;

    tracing::info!("User {} updated task {}", user.user_id, id);

    Ok(Json(TaskResponse::from(task)))
}

/// Delete a task
pub async fn destroy(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ctx: RouteContext,
) -> Result<StatusCode, BackendError> {
    let application_id = route_parent(&ctx)?;
    let id = ctx.object_id()?;
    let mut tx = begin_write(&state.pool).await?;

    let task = get_task(&mut tx, user.user_id, application_id, id)
        .await?
        .ok_or_else(BackendError::not_found)?;
    check_object_permission(&mut tx, user.user_id, &task).await?;

    delete_task(&mut tx, id).await?;
    tx.commit().await?;

    tracing::info!("User {} deleted task {}", user.user_id, id);

    Ok(StatusCode::NO_CONTENT)
}
