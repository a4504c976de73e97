use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::errors::UserError;

/// How long a password-reset link stays usable.
pub const RESET_TOKEN_TTL_HOURS: i64 = 24;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    /// Unique, compared exactly as stored.
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub reset_token: Option<String>,
    pub reset_token_expires: Option<DateTime<Utc>>,
    pub revision: i32,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: &str, name: &str, password_hash: String) -> Result<Self, UserError> {
        let email = email.trim();
        let name = name.trim();
        if email.is_empty() || name.is_empty() || password_hash.is_empty() {
            return Err(UserError::FieldsRequired);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash,
            name: name.to_string(),
            reset_token: None,
            reset_token_expires: None,
            revision: 0,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        email: String,
        password_hash: String,
        name: String,
        reset_token: Option<String>,
        reset_token_expires: Option<DateTime<Utc>>,
        revision: i32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            name,
            reset_token,
            reset_token_expires,
            revision,
            created_at,
        }
    }

    /// Stores a fresh reset token, replacing any previous one, and returns
    /// its expiry.
    pub fn issue_reset_token(&mut self, token: String, now: DateTime<Utc>) -> DateTime<Utc> {
        let expires = now + Duration::hours(RESET_TOKEN_TTL_HOURS);
        self.reset_token = Some(token);
        self.reset_token_expires = Some(expires);
        expires
    }

    /// True while `token` is the current one and `now` is before its expiry.
    pub fn accepts_reset_token(&self, token: &str, now: DateTime<Utc>) -> bool {
        match (&self.reset_token, self.reset_token_expires) {
            (Some(current), Some(expires)) => current == token && now < expires,
            _ => false,
        }
    }

    /// Replaces the password hash. Any pending reset token stops working.
    pub fn change_password(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.reset_token = None;
        self.reset_token_expires = None;
    }
}
