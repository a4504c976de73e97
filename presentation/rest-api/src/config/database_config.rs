use persistence::db::{Collections, DatabaseConfig, create_postgres_pool, ensure_collections};
use sqlx::PgPool;

use super::{ConfigError, ConfigSource};

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    /// Prefix of the collection tables, `store` gives `store_products` etc.
    pub prefix: String,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - DATABASE_PREFIX: collection name prefix (default: "store")
    pub fn from_source(source: &impl ConfigSource) -> Result<Self, ConfigError> {
        Ok(Self {
            url: source.required("DATABASE_URL")?,
            prefix: source
                .var("DATABASE_PREFIX")
                .unwrap_or_else(|| "store".to_string()),
        })
    }
}

/// Connects the pool and creates any missing collection tables and views.
///
/// # Errors
/// Returns error if the prefix is invalid, the connection fails or the schema
/// cannot be created
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<(PgPool, Collections)> {
    let collections = Collections::new(&settings.prefix)?;
    let pool = create_postgres_pool(&DatabaseConfig::new(settings.url.clone())).await?;
    ensure_collections(&pool, &collections).await?;
    tracing::info!("Document collections ready under prefix '{}'", settings.prefix);
    Ok((pool, collections))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn should_require_database_url() {
        let result = DatabaseSettings::from_source(&HashMap::<&str, &str>::new());

        assert!(matches!(result, Err(ConfigError::Missing("DATABASE_URL"))));
    }

    #[test]
    fn should_default_prefix_to_store() {
        let source = HashMap::from([("DATABASE_URL", "postgres://localhost/app")]);

        let settings = DatabaseSettings::from_source(&source).unwrap();

        assert_eq!(settings.prefix, "store");
    }
}
