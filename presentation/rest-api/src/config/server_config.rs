use super::{ConfigError, ConfigSource};

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "0.0.0.0")
    /// - PORT, then SERVICE_PORT: Port to bind (default: 3000)
    pub fn from_source(source: &impl ConfigSource) -> Result<Self, ConfigError> {
        let ip = source
            .var("SERVICE_IP")
            .unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match source.var("PORT").or_else(|| source.var("SERVICE_PORT")) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };

        Ok(Self { ip, port })
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
