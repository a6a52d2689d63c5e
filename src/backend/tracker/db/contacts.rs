/**
 * Contact Queries
 *
 * Contacts carry no owner column; reads join the parent application and
 * filter on its `user_id`.
 */

use std::collections::HashMap;

use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use crate::backend::tracker::db::like_pattern;
use crate::shared::models::{
    ApplicationId, Contact, ContactFields, NewContact, UserId, CONTACT_ORDERING,
};
use crate::shared::serializers::ContactSummary;

const CONTACT_COLUMNS: &str =
    "c.id, c.application_id, c.name, c.email, c.role, c.phone, c.notes";

/// Optional narrowing of a contact list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    /// Case-insensitive match on name, email or role
    pub search: Option<String>,
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    application_id: ApplicationId,
    #[sqlx(flatten)]
    summary: ContactSummary,
}

/// List the contacts of one of the owner's applications
///
/// An application the owner does not have yields an empty list.
pub async fn list_contacts(
    conn: &mut SqliteConnection,
    owner: UserId,
    application_id: ApplicationId,
    filter: &ContactFilter,
) -> Result<Vec<Contact>, sqlx::Error> {
    let mut query = QueryBuilder::<Sqlite>::new(format!(
        "SELECT {} FROM contacts c JOIN applications a ON a.id = c.application_id WHERE a.user_id = ",
        CONTACT_COLUMNS
    ));
    query.push_bind(owner);
    query.push(" AND c.application_id = ").push_bind(application_id);

    if let Some(search) = &filter.search {
        let pattern = like_pattern(search);
        query.push(" AND (");
        for (i, column) in ["c.name", "c.email", "c.role"].into_iter().enumerate() {
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

    query.push(" ORDER BY ").push(CONTACT_ORDERING);

    query.build_query_as::<Contact>().fetch_all(conn).await
}

/// Get one contact of one of the owner's applications
pub async fn get_contact(
    conn: &mut SqliteConnection,
    owner: UserId,
    application_id: ApplicationId,
    id: i64,
) -> Result<Option<Contact>, sqlx::Error> {
    let sql = format!(
        "SELECT {} FROM contacts c JOIN applications a ON a.id = c.application_id \
         WHERE c.id = ? AND c.application_id = ? AND a.user_id = ?",
        CONTACT_COLUMNS
    );

    sqlx::query_as::<_, Contact>(&sql)
        .bind(id)
        .bind(application_id)
        .bind(owner)
        .fetch_optional(conn)
        .await
}

/// Insert a new contact
pub async fn insert_contact(
    conn: &mut SqliteConnection,
    new: &NewContact,
) -> Result<Contact, sqlx::Error> {
    let fields = &new.fields;

    sqlx::query_as::<_, Contact>(
        r#"
        INSERT INTO contacts (application_id, name, email, role, phone, notes)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, application_id, name, email, role, phone, notes
        "#,
    )
    .bind(new.application_id)
    .bind(&fields.name)
    .bind(&fields.email)
    .bind(&fields.role)
    .bind(&fields.phone)
    .bind(&fields.notes)
    .fetch_one(conn)
    .await
}

/// Write the client-owned values of a contact
pub async fn update_contact(
    conn: &mut SqliteConnection,
    id: i64,
    fields: &ContactFields,
) -> Result<Contact, sqlx::Error> {
    sqlx::query_as::<_, Contact>(
        r#"
        UPDATE contacts
        SET name = ?, email = ?, role = ?, phone = ?, notes = ?
        WHERE id = ?
        RETURNING id, application_id, name, email, role, phone, notes
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.email)
    .bind(&fields.role)
    .bind(&fields.phone)
    .bind(&fields.notes)
    .bind(id)
    .fetch_one(conn)
    .await
}

/// Delete a contact
pub async fn delete_contact(conn: &mut SqliteConnection, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM contacts WHERE id = ?")
        .bind(id)
        .execute(conn)
        .await?;

    Ok(())
}

/// Contact summaries for a set of applications, in one query
///
/// Applications without contacts are absent from the map.
pub async fn contact_summaries(
    conn: &mut SqliteConnection,
    application_ids: &[ApplicationId],
) -> Result<HashMap<ApplicationId, Vec<ContactSummary>>, sqlx::Error> {
    let mut summaries: HashMap<ApplicationId, Vec<ContactSummary>> = HashMap::new();
    if application_ids.is_empty() {
        return Ok(summaries);
    }

    let mut query = QueryBuilder::<Sqlite>::new(
        "SELECT c.application_id, c.id, c.name, c.email, c.role, c.phone \
         FROM contacts c WHERE c.application_id IN (",
    );
    let mut ids = query.separated(", ");
    for id in application_ids {
        ids.push_bind(*id);
    }
    query.push(") ORDER BY ").push(CONTACT_ORDERING);

    let rows = query.build_query_as::<SummaryRow>().fetch_all(conn).await?;
    for row in rows {
        summaries
            .entry(row.application_id)
            .or_default()
            .push(row.summary);
    }

    Ok(summaries)
}
