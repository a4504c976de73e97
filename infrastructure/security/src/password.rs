use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHash, PasswordHasher as _, PasswordVerifier};
use async_trait::async_trait;
use tokio::task;

use business::domain::user::errors::UserError;
use business::domain::user::services::PasswordHasher;

/// Argon2id with the crate's default parameters, stored as PHC strings.
/// Hashing and verification run on the blocking thread pool.
#[derive(Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

fn hash_with(argon2: &Argon2<'_>, password: &str) -> Result<String, UserError> {
    let salt = SaltString::generate(&mut OsRng);
    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!("Failed to hash password: {}", e);
            UserError::Hashing
        })
}

fn verify_with(argon2: &Argon2<'_>, password: &str, password_hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(password_hash) {
        Ok(h) => h,
        Err(_) => return false,
    };

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, UserError> {
        let argon2 = self.argon2.clone();
        let password = password.to_owned();
        task::spawn_blocking(move || hash_with(&argon2, &password))
            .await
            .map_err(|e| {
                tracing::error!("Password hashing task failed: {}", e);
                UserError::Hashing
            })?
    }

    async fn verify(&self, password: &str, password_hash: &str) -> bool {
        let argon2 = self.argon2.clone();
        let password = password.to_owned();
        let password_hash = password_hash.to_owned();
        task::spawn_blocking(move || verify_with(&argon2, &password, &password_hash))
            .await
            .unwrap_or_else(|e| {
                tracing::error!("Password verification task failed: {}", e);
                false
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_verify_password_against_its_hash() {
        let hasher = Argon2PasswordHasher::new();

        let hash = hasher.hash("s3cret").await.unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(hasher.verify("s3cret", &hash).await);
        assert!(!hasher.verify("S3cret", &hash).await);
    }

    #[tokio::test]
    async fn should_salt_every_hash() {
        let hasher = Argon2PasswordHasher::new();

        let first = hasher.hash("same").await.unwrap();
        let second = hasher.hash("same").await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn should_not_verify_against_malformed_hash() {
        let hasher = Argon2PasswordHasher::new();

        assert!(!hasher.verify("s3cret", "not-a-phc-string").await);
        assert!(!hasher.verify("s3cret", "").await);
    }

    #[tokio::test]
    async fn should_hash_with_default_argon2id_cost() {
        let hasher = Argon2PasswordHasher::new();

        let hash = hasher.hash("s3cret").await.unwrap();

        assert!(hash.starts_with("$argon2id$v=19$m=19456,t=2,p=1$"));
    }
}
