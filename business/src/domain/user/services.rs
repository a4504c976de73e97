use async_trait::async_trait;

use super::errors::UserError;

/// Service port for one-way password hashing. Implementations keep the
/// key-stretching work off the async executor.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, UserError>;
    /// Constant-time check of `password` against a stored hash. Malformed
    /// hashes never verify.
    async fn verify(&self, password: &str, password_hash: &str) -> bool;
}

/// Service port for unguessable password-reset tokens.
pub trait TokenGenerator: Send + Sync {
    fn reset_token(&self) -> String;
}

/// Content of the password-reset message sent to a user.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordResetMail {
    pub to: String,
    pub name: String,
    pub reset_url: String,
    pub valid_for_hours: i64,
}

#[async_trait]
pub trait MailService: Send + Sync {
    async fn send_password_reset(&self, mail: &PasswordResetMail) -> Result<(), UserError>;
}
