use super::{
    ConfigError, ConfigSource, Environment, database_config::DatabaseSettings,
    mail_config::MailConfig, server_config::ServerConfig, session_config::SessionConfig,
    storage_config::StorageConfig,
};

pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub mail: MailConfig,
    pub session: SessionConfig,
    pub storage: StorageConfig,
    /// Public address used in password reset links. Taken from the request
    /// `Host` header when unset.
    pub base_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&Environment)
    }

    pub fn from_source(source: &impl ConfigSource) -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_source(source)?,
            database: DatabaseSettings::from_source(source)?,
            mail: MailConfig::from_source(source)?,
            session: SessionConfig::from_source(source)?,
            storage: StorageConfig::from_source(source),
            base_url: source
                .var("APP_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string()),
        })
    }
}
