use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use sqlx::{PgPool, postgres::PgPoolOptions};
use thiserror::Error;

static PREFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("valid prefix pattern"));

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.schema_error")]
    SchemaError,
    #[error("database.invalid_prefix")]
    InvalidPrefix,
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|e| {
            tracing::error!("Failed to connect to database: {}", e);
            DatabaseError::ConnectionError
        })?;

    Ok(pool)
}

/// Table and view names of the three document collections.
///
/// Names are interpolated into SQL, so the prefix is restricted to
/// lowercase identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collections {
    pub users: String,
    pub products: String,
    pub sales: String,
    /// Every product document, oldest first.
    pub products_all: String,
    /// User documents keyed by an `email` column.
    pub users_by_email: String,
}

impl Collections {
    pub fn new(prefix: &str) -> Result<Self, DatabaseError> {
        if !PREFIX_PATTERN.is_match(prefix) {
            return Err(DatabaseError::InvalidPrefix);
        }

        Ok(Self {
            users: format!("{prefix}_users"),
            products: format!("{prefix}_products"),
            sales: format!("{prefix}_sales"),
            products_all: format!("{prefix}_products_all"),
            users_by_email: format!("{prefix}_users_by_email"),
        })
    }

    fn schema_statements(&self) -> Vec<String> {
        let mut statements: Vec<String> = [&self.users, &self.products, &self.sales]
            .into_iter()
            .map(|table| {
                format!(
                    "CREATE TABLE IF NOT EXISTS {table} (
                        id UUID PRIMARY KEY,
                        rev INTEGER NOT NULL,
                        doc JSONB NOT NULL,
                        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
                    )"
                )
            })
            .collect();

        statements.push(format!(
            "CREATE OR REPLACE VIEW {} AS
                SELECT id, rev, doc, created_at FROM {} WHERE doc->>'type' = 'product'",
            self.products_all, self.products
        ));
        statements.push(format!(
            "CREATE OR REPLACE VIEW {} AS
                SELECT doc->>'email' AS email, id, rev, doc, created_at FROM {} WHERE doc->>'type' = 'user'",
            self.users_by_email, self.users
        ));
        statements
    }
}

/// Creates the collection tables and their views when missing.
pub async fn ensure_collections(pool: &PgPool, collections: &Collections) -> Result<(), DatabaseError> {
    for statement in collections.schema_statements() {
        sqlx::query(&statement).execute(pool).await.map_err(|e| {
            tracing::error!("Failed to prepare collections: {}", e);
            DatabaseError::SchemaError
        })?;
    }

    tracing::info!(
        "Collections ready: {}, {}, {}",
        collections.users,
        collections.products,
        collections.sales
    );
    Ok(())
}
