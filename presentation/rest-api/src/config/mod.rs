pub mod app_config;
pub mod database_config;
pub mod mail_config;
pub mod server_config;
pub mod session_config;
pub mod storage_config;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{0} has an invalid value")]
    Invalid(&'static str),
}

/// Where configuration values come from. Blank values count as unset.
pub trait ConfigSource {
    fn var(&self, key: &str) -> Option<String>;

    fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.var(key).ok_or(ConfigError::Missing(key))
    }
}

/// Process environment, after `.env` has been loaded by dotenvy.
pub struct Environment;

impl ConfigSource for Environment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.trim().is_empty())
    }
}

#[cfg(test)]
impl ConfigSource for std::collections::HashMap<&str, &str> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key)
            .map(|v| v.to_string())
            .filter(|v| !v.trim().is_empty())
    }
}
