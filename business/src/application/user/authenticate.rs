use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;
use crate::domain::user::use_cases::authenticate::{AuthenticateParams, AuthenticateUseCase};

/// Well-formed Argon2id hash with the adapter's default cost. Unknown emails
/// are checked against it so both rejections take the same time.
const UNKNOWN_USER_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$GAvdXXIgQ2tWPJvFhpDz0Q$qnTU0S0/WsBXZyk+uJnWAOUMGNJs99A+8paur5HBepU";

pub struct AuthenticateUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AuthenticateUseCase for AuthenticateUseCaseImpl {
    async fn execute(&self, params: AuthenticateParams) -> Result<Option<User>, UserError> {
        let email = params.email.trim();
        if email.is_empty() || params.password.is_empty() {
            return Err(UserError::FieldsRequired);
        }

        let user = match self.repository.find_by_email(email).await? {
            Some(user) => self
                .password_hasher
                .verify(&params.password, &user.password_hash)
                .await
                .then_some(user),
            None => {
                self.password_hasher
                    .verify(&params.password, UNKNOWN_USER_HASH)
                    .await;
                None
            }
        };

        match &user {
            Some(user) => self.logger.info(&format!("User logged in: {}", user.id)),
            None => self.logger.debug("Rejected login attempt"),
        }

        Ok(user)
    }
}
