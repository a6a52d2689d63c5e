/**
 * Application Queries
 *
 * `user_id` and `created_at` are written by the insert only; the update
 * statement lists the client-writable columns and `updated_at`.
 */

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use crate::backend::tracker::db::like_pattern;
use crate::shared::models::{
    Application, ApplicationFields, ApplicationId, ApplicationStatus, NewApplication, UserId,
    APPLICATION_ORDERING,
};

const APPLICATION_COLUMNS: &str = "a.id, a.user_id, a.title, a.company, a.location, a.stage, \
     a.status, a.source, a.salary_min, a.salary_max, a.priority, a.created_at, a.updated_at";

/// Optional narrowing of an application list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationFilter {
    pub status: Option<ApplicationStatus>,
    /// Exact company name
    pub company: Option<String>,
    /// Case-insensitive match on title, company, location, stage or source
    pub search: Option<String>,
}

/// List the owner's applications, newest first
pub async fn list_applications(
    conn: &mut SqliteConnection,
    owner: UserId,
    filter: &ApplicationFilter,
) -> Result<Vec<Application>, sqlx::Error> {
    let mut query = QueryBuilder::<Sqlite>::new(format!(
        "SELECT {} FROM applications a WHERE a.user_id = ",
        APPLICATION_COLUMNS
    ));
    query.push_bind(owner);

    if let Some(status) = filter.status {
        query.push(" AND a.status = ").push_bind(status.as_str());
    }
    if let Some(company) = &filter.company {
        query.push(" AND a.company = ").push_bind(company.clone());
    }
    if let Some(search) = &filter.search {
        let pattern = like_pattern(search);
        query.push(" AND (");
        for (i, column) in ["a.title", "a.company", "a.location", "a.stage", "a.source"]
            .into_iter()
            .enumerate()
        {
            if i > 0 {
                query.push(" OR ");
            }
            query
                .push(column)
                .push(" LIKE ")
                .push_bind(pattern.clone())
                .push(" ESCAPE '\\'");
        }
        query.push(")");
    }

    query.push(" ORDER BY ").push(APPLICATION_ORDERING);

    query.build_query_as::<Application>().fetch_all(conn).await
}

/// Get one of the owner's applications
///
/// # Returns
/// The application, or None if it does not exist or belongs to someone else
pub async fn get_application(
    conn: &mut SqliteConnection,
    owner: UserId,
    id: ApplicationId,
) -> Result<Option<Application>, sqlx::Error> {
    let sql = format!(
        "SELECT {} FROM applications a WHERE a.id = ? AND a.user_id = ?",
        APPLICATION_COLUMNS
    );

    sqlx::query_as::<_, Application>(&sql)
        .bind(id)
        .bind(owner)
        .fetch_optional(conn)
        .await
}

/// Owner of an application, if it exists
pub async fn application_owner(
    conn: &mut SqliteConnection,
    id: ApplicationId,
) -> Result<Option<UserId>, sqlx::Error> {
    sqlx::query_scalar("SELECT user_id FROM applications WHERE id = ?")
        .bind(id)
        .fetch_optional(conn)
        .await
}

/// Insert a new application
pub async fn insert_application(
    conn: &mut SqliteConnection,
    new: &NewApplication,
) -> Result<Application, sqlx::Error> {
    let fields = &new.fields;

    sqlx::query_as::<_, Application>(
        r#"
        INSERT INTO applications (
            user_id, title, company, location, stage, status, source,
            salary_min, salary_max, priority, created_at, updated_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id, user_id, title, company, location, stage, status, source,
                  salary_min, salary_max, priority, created_at, updated_at
        "#,
    )
    .bind(new.user_id)
    .bind(&fields.title)
    .bind(&fields.company)
    .bind(&fields.location)
    .bind(&fields.stage)
    .bind(fields.status.as_str())
    .bind(&fields.source)
    .bind(fields.salary_min)
    .bind(fields.salary_max)
    .bind(fields.priority)
    .bind(new.created_at)
    .bind(new.updated_at)
    .fetch_one(conn)
    .await
}

/// Write the client-owned values of an application and refresh `updated_at`
pub async fn update_application(
    conn: &mut SqliteConnection,
    id: ApplicationId,
    fields: &ApplicationFields,
    updated_at: DateTime<Utc>,
) -> Result<Application, sqlx::Error> {
    sqlx::query_as::<_, Application>(
        r#"
        UPDATE applications
        SET title = ?, company = ?, location = ?, stage = ?, status = ?, source = ?,
            salary_min = ?, salary_max = ?, priority = ?, updated_at = ?
        WHERE id = ?
        RETURNING id, user_id, title, company, location, stage, status, source,
                  salary_min, salary_max, priority, created_at, updated_at
        "#,
    )
    .bind(&fields.title)
    .bind(&fields.company)
    .bind(&fields.location)
    .bind(&fields.stage)
    .bind(fields.status.as_str())
    .bind(&fields.source)
    .bind(fields.salary_min)
    .bind(fields.salary_max)
    .bind(fields.priority)
    .bind(updated_at)
    .bind(id)
    .fetch_one(conn)
    .await
}

/// Delete an application; its contacts and tasks go with it
pub async fn delete_application(
    conn: &mut SqliteConnection,
    id: ApplicationId,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM applications WHERE id = ?")
        .bind(id)
        .execute(conn)
        .await?;

    Ok(())
}
