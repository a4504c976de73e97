use poem::web::cookie::CookieKey;
use sha2::{Digest, Sha512};

use super::{ConfigError, ConfigSource};

pub struct SessionConfig {
    secret: String,
}

impl SessionConfig {
    /// Environment variables:
    /// - SESSION_SECRET: signs and encrypts the session cookie (required)
    pub fn from_source(source: &impl ConfigSource) -> Result<Self, ConfigError> {
        Ok(Self {
            secret: source.required("SESSION_SECRET")?,
        })
    }

    /// 64-byte cookie key: the SHA-512 digest of the secret.
    pub fn cookie_key(&self) -> CookieKey {
        let digest = Sha512::digest(self.secret.as_bytes());
        CookieKey::from(digest.as_slice())
    }
}
