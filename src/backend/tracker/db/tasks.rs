/**
 * Task Queries
 *
 * Same shape as the contact queries. `created_at` is written once by the
 * insert.
 */

use std::collections::HashMap;

use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use crate::shared::models::{ApplicationId, NewTask, Task, TaskFields, UserId, TASK_ORDERING};
use crate::shared::serializers::TaskSummary;

const TASK_COLUMNS: &str = "t.id, t.application_id, t.title, t.due_date, t.done, t.created_at";

/// Optional narrowing of a task list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub done: Option<bool>,
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    application_id: ApplicationId,
    #[sqlx(flatten)]
    summary: TaskSummary,
}

/// List the tasks of one of the owner's applications, open tasks first
pub async fn list_tasks(
    conn: &mut SqliteConnection,
    owner: UserId,
    application_id: ApplicationId,
    filter: &TaskFilter,
) -> Result<Vec<Task>, sqlx::Error> {
    let mut query = QueryBuilder::<Sqlite>::new(format!(
        "SELECT {} FROM tasks t JOIN applications a ON a.id = t.application_id WHERE a.user_id = ",
        TASK_COLUMNS
    ));
    query.push_bind(owner);
    query.push(" AND t.application_id = ").push_bind(application_id);

    if let Some(done) = filter.done {
        query.push(" AND t.done = ").push_bind(done);
    }

    query.push(" ORDER BY ").push(TASK_ORDERING);

    query.build_query_as::<Task>().fetch_all(conn).await
}

/// Get one task of one of the owner's applications
pub async fn get_task(
    conn: &mut SqliteConnection,
    owner: UserId,
    application_id: ApplicationId,
    id: i64,
) -> Result<Option<Task>, sqlx::Error> {
    let sql = format!(
        "SELECT {} FROM tasks t JOIN applications a ON a.id = t.application_id \
         WHERE t.id = ? AND t.application_id = ? AND a.user_id = ?",
        TASK_COLUMNS
    );

    sqlx::query_as::<_, Task>(&sql)
        .bind(id)
        .bind(application_id)
        .bind(owner)
        .fetch_optional(conn)
        .await
}

/// Insert a new task
pub async fn insert_task(conn: &mut SqliteConnection, new: &NewTask) -> Result<Task, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        INSERT INTO tasks (application_id, title, due_date, done, created_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, application_id, title, due_date, done, created_at
        "#,
    )
    .bind(new.application_id)
    .bind(&new.fields.title)
    .bind(new.fields.due_date)
    .bind(new.fields.done)
    .bind(new.created_at)
    .fetch_one(conn)
    .await
}

/// Write the client-owned values of a task
pub async fn update_task(
    conn: &mut SqliteConnection,
    id: i64,
    fields: &TaskFields,
) -> Result<Task, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        UPDATE tasks
        SET title = ?, due_date = ?, done = ?
        WHERE id = ?
        RETURNING id, application_id, title, due_date, done, created_at
        "#,
    )
    .bind(&fields.title)
    .bind(fields.due_date)
    .bind(fields.done)
    .bind(id)
    .fetch_one(conn)
    .await
}

/// Delete a task
pub async fn delete_task(conn: &mut SqliteConnection, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(id)
        .execute(conn)
        .await?;

    Ok(())
}

/// Task summaries for a set of applications, in one query
pub async fn task_summaries(
    conn: &mut SqliteConnection,
    application_ids: &[ApplicationId],
) -> Result<HashMap<ApplicationId, Vec<TaskSummary>>, sqlx::Error> {
    let mut summaries: HashMap<ApplicationId, Vec<TaskSummary>> = HashMap::new();
    if application_ids.is_empty() {
        return Ok(summaries);
    }

    let mut query = QueryBuilder::<Sqlite>::new(
        "SELECT t.application_id, t.id, t.title, t.due_date, t.done, t.created_at \
         FROM tasks t WHERE t.application_id IN (",
    );
    let mut ids = query.separated(", ");
    for id in application_ids {
        ids.push_bind(*id);
    }
    query.push(") ORDER BY ").push(TASK_ORDERING);

    let rows = query.build_query_as::<SummaryRow>().fetch_all(conn).await?;
    for row in rows {
        summaries
            .entry(row.application_id)
            .or_default()
            .push(row.summary);
    }

    Ok(summaries)
}
