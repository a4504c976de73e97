use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;
use crate::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};

pub struct RegisterUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUserUseCase for RegisterUserUseCaseImpl {
    async fn execute(&self, params: RegisterUserParams) -> Result<User, UserError> {
        if params.name.trim().is_empty()
            || params.email.trim().is_empty()
            || params.password.is_empty()
            || params.password_confirmation.is_empty()
        {
            return Err(UserError::FieldsRequired);
        }
        if params.password != params.password_confirmation {
            return Err(UserError::PasswordMismatch);
        }

        let email = params.email.trim();
        if self.repository.find_by_email(email).await?.is_some() {
            return Err(UserError::EmailTaken);
        }

        let password_hash = self.password_hasher.hash(&params.password).await?;
        let user = User::new(email, &params.name, password_hash)?;
        let saved = self.repository.insert(&user).await?;

        self.logger
            .info(&format!("User registered with id: {}", saved.id));
        Ok(saved)
    }
}
