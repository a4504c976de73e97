use mailer::SmtpSettings;

use super::{ConfigError, ConfigSource};

/// SMTP account used to send password recovery mails.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
}

impl MailConfig {
    /// Environment variables:
    /// - EMAIL_USER, EMAIL_PASS: SMTP credentials (required)
    /// - SMTP_HOST (default: "smtp.gmail.com")
    /// - SMTP_PORT (default: 465, implicit TLS; any other port uses STARTTLS)
    pub fn from_source(source: &impl ConfigSource) -> Result<Self, ConfigError> {
        let port = match source.var("SMTP_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid("SMTP_PORT"))?,
            None => 465,
        };

        Ok(Self {
            host: source
                .var("SMTP_HOST")
                .unwrap_or_else(|| "smtp.gmail.com".to_string()),
            port,
            user: source.required("EMAIL_USER")?,
            password: source.required("EMAIL_PASS")?,
        })
    }

    pub fn smtp_settings(&self) -> SmtpSettings {
        SmtpSettings {
            host: self.host.clone(),
            port: self.port,
            username: self.user.clone(),
            password: self.password.clone(),
        }
    }
}
