//! Generic access to collection tables: `(id, rev, doc, created_at)` rows
//! holding one JSONB document each.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::PgExecutor;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::errors::RepositoryError;

/// SQLSTATE raised by Postgres when a table or view does not exist.
const UNDEFINED_TABLE: &str = "42P01";
/// SQLSTATE raised by Postgres on a primary key clash.
const UNIQUE_VIOLATION: &str = "23505";

pub struct StoredDocument<T> {
    pub id: Uuid,
    pub rev: i32,
    pub doc: T,
}

type Row<T> = (Uuid, i32, Json<T>);

fn into_stored<T>((id, rev, Json(doc)): Row<T>) -> StoredDocument<T> {
    StoredDocument { id, rev, doc }
}

/// True only when the error says the queried relation is absent. Any other
/// failure must surface as a real error.
pub fn is_missing_relation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db) if db.code().as_deref() == Some(UNDEFINED_TABLE))
}

/// Result of reading through an index view.
pub enum ViewLookup<T> {
    Found(Vec<StoredDocument<T>>),
    /// The view does not exist; the caller scans the collection instead.
    Missing,
}

/// Only an undefined relation turns into [`ViewLookup::Missing`]. Every
/// other query failure propagates.
pub fn view_lookup<T>(
    result: Result<Vec<StoredDocument<T>>, sqlx::Error>,
) -> Result<ViewLookup<T>, RepositoryError> {
    match result {
        Ok(rows) => Ok(ViewLookup::Found(rows)),
        Err(e) if is_missing_relation(&e) => Ok(ViewLookup::Missing),
        Err(e) => Err(repository_error(e)),
    }
}

pub fn repository_error(error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            RepositoryError::Duplicated
        }
        _ => {
            tracing::error!("Database query failed: {}", error);
            RepositoryError::DatabaseError
        }
    }
}

pub async fn fetch_one<'e, T, E>(
    executor: E,
    table: &str,
    id: Uuid,
) -> Result<Option<StoredDocument<T>>, sqlx::Error>
where
    T: DeserializeOwned + Send + Unpin + 'static,
    E: PgExecutor<'e>,
{
    let row = sqlx::query_as::<_, Row<T>>(&format!(
        "SELECT id, rev, doc FROM {table} WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(row.map(into_stored))
}

/// Rows of a table or view, oldest first.
pub async fn fetch_all<'e, T, E>(
    executor: E,
    relation: &str,
) -> Result<Vec<StoredDocument<T>>, sqlx::Error>
where
    T: DeserializeOwned + Send + Unpin + 'static,
    E: PgExecutor<'e>,
{
    let rows = sqlx::query_as::<_, Row<T>>(&format!(
        "SELECT id, rev, doc FROM {relation} ORDER BY created_at, id"
    ))
    .fetch_all(executor)
    .await?;

    Ok(rows.into_iter().map(into_stored).collect())
}

/// Documents whose top-level fields equal the given values, oldest first.
/// `None` values are ignored; `doc_type` is always matched.
pub async fn find_by_fields<'e, T, E>(
    executor: E,
    table: &str,
    doc_type: &str,
    fields: &[(&str, Option<&str>)],
) -> Result<Vec<StoredDocument<T>>, sqlx::Error>
where
    T: DeserializeOwned + Send + Unpin + 'static,
    E: PgExecutor<'e>,
{
    let mut sql = format!("SELECT id, rev, doc FROM {table} WHERE doc->>'type' = $1");
    let mut values = vec![doc_type];
    for &(field, value) in fields {
        if let Some(value) = value {
            values.push(value);
            sql.push_str(&format!(" AND doc->>'{}' = ${}", field, values.len()));
        }
    }
    sql.push_str(" ORDER BY created_at, id");

    let mut query = sqlx::query_as::<_, Row<T>>(&sql);
    for value in values {
        query = query.bind(value);
    }

    Ok(query
        .fetch_all(executor)
        .await?
        .into_iter()
        .map(into_stored)
        .collect())
}

/// Rows of a view whose `column` equals `value`.
pub async fn fetch_from_view_by<'e, T, E>(
    executor: E,
    view: &str,
    column: &str,
    value: &str,
) -> Result<Vec<StoredDocument<T>>, sqlx::Error>
where
    T: DeserializeOwned + Send + Unpin + 'static,
    E: PgExecutor<'e>,
{
    let rows = sqlx::query_as::<_, Row<T>>(&format!(
        "SELECT id, rev, doc FROM {view} WHERE {column} = $1 ORDER BY created_at, id"
    ))
    .bind(value)
    .fetch_all(executor)
    .await?;

    Ok(rows.into_iter().map(into_stored).collect())
}

/// Stores a new document at revision 1.
pub async fn insert<'e, T, E>(
    executor: E,
    table: &str,
    id: Uuid,
    created_at: DateTime<Utc>,
    doc: &T,
) -> Result<i32, sqlx::Error>
where
    T: Serialize + Sync,
    E: PgExecutor<'e>,
{
    sqlx::query_scalar::<_, i32>(&format!(
        "INSERT INTO {table} (id, rev, doc, created_at) VALUES ($1, 1, $2, $3) RETURNING rev"
    ))
    .bind(id)
    .bind(Json(doc))
    .bind(created_at)
    .fetch_one(executor)
    .await
}

/// Overwrites a document if it is still at `expected_rev`.
///
/// Returns the new revision, or `None` when the document is gone or was
/// changed in the meantime.
pub async fn update<'e, T, E>(
    executor: E,
    table: &str,
    id: Uuid,
    expected_rev: i32,
    doc: &T,
) -> Result<Option<i32>, sqlx::Error>
where
    T: Serialize + Sync,
    E: PgExecutor<'e>,
{
    sqlx::query_scalar::<_, i32>(&format!(
        "UPDATE {table} SET doc = $3, rev = rev + 1 WHERE id = $1 AND rev = $2 RETURNING rev"
    ))
    .bind(id)
    .bind(expected_rev)
    .bind(Json(doc))
    .fetch_optional(executor)
    .await
}

/// Deletes a document if it is still at `expected_rev`.
pub async fn delete<'e, E>(
    executor: E,
    table: &str,
    id: Uuid,
    expected_rev: i32,
) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(&format!("DELETE FROM {table} WHERE id = $1 AND rev = $2"))
        .bind(id)
        .bind(expected_rev)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    #[derive(Debug)]
    struct PgFailure {
        code: &'static str,
    }

    impl fmt::Display for PgFailure {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "postgres error {}", self.code)
        }
    }

    impl StdError for PgFailure {}

    impl sqlx::error::DatabaseError for PgFailure {
        fn message(&self) -> &str {
            "postgres error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            sqlx::error::ErrorKind::Other
        }
    }

    fn failure(code: &'static str) -> Result<Vec<StoredDocument<String>>, sqlx::Error> {
        Err(sqlx::Error::Database(Box::new(PgFailure { code })))
    }

    #[test]
    fn should_fall_back_when_view_is_undefined() {
        assert!(matches!(view_lookup(failure("42P01")), Ok(ViewLookup::Missing)));
    }

    #[test]
    fn should_propagate_other_query_errors() {
        assert!(matches!(
            view_lookup(failure("57014")),
            Err(RepositoryError::DatabaseError)
        ));
        assert!(matches!(
            view_lookup::<String>(Err(sqlx::Error::PoolTimedOut)),
            Err(RepositoryError::DatabaseError)
        ));
    }

    #[test]
    fn should_return_rows_read_through_view() {
        let rows = vec![StoredDocument {
            id: Uuid::new_v4(),
            rev: 1,
            doc: "product".to_string(),
        }];

        match view_lookup(Ok(rows)) {
            Ok(ViewLookup::Found(found)) => assert_eq!(found[0].doc, "product"),
            _ => panic!("expected rows"),
        }
    }

    #[test]
    fn should_map_unique_violation_to_duplicated() {
        let error = sqlx::Error::Database(Box::new(PgFailure { code: "23505" }));

        assert!(matches!(repository_error(error), RepositoryError::Duplicated));
    }
}
