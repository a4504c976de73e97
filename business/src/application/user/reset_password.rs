use std::sync::Arc;

use async_trait::async_trait;

use crate::application::user::verify_reset_token::user_for_token;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;
use crate::domain::user::use_cases::reset_password::{ResetPasswordParams, ResetPasswordUseCase};

pub struct ResetPasswordUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResetPasswordUseCase for ResetPasswordUseCaseImpl {
    async fn execute(&self, params: ResetPasswordParams) -> Result<(), UserError> {
        if params.password.is_empty() || params.password_confirmation.is_empty() {
            return Err(UserError::FieldsRequired);
        }
        if params.password != params.password_confirmation {
            return Err(UserError::PasswordMismatch);
        }

        let mut user = user_for_token(self.repository.as_ref(), &params.token).await?;
        user.change_password(self.password_hasher.hash(&params.password).await?);
        let user = self.repository.update(&user).await?;

        self.logger
            .info(&format!("Password reset completed for user {}", user.id));
        Ok(())
    }
}
