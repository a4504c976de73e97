use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    async fn find_by_reset_token(&self, token: &str) -> Result<Option<User>, RepositoryError>;
    async fn insert(&self, user: &User) -> Result<User, RepositoryError>;
    /// Overwrites a user if its revision is still current.
    async fn update(&self, user: &User) -> Result<User, RepositoryError>;
}
