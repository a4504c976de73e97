use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::RESET_TOKEN_TTL_HOURS;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::{MailService, PasswordResetMail, TokenGenerator};
use crate::domain::user::use_cases::request_password_reset::{
    RequestPasswordResetParams, RequestPasswordResetUseCase,
};

pub struct RequestPasswordResetUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub token_generator: Arc<dyn TokenGenerator>,
    pub mail_service: Arc<dyn MailService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RequestPasswordResetUseCase for RequestPasswordResetUseCaseImpl {
    async fn execute(&self, params: RequestPasswordResetParams) -> Result<(), UserError> {
        let email = params.email.trim();
        if email.is_empty() {
            return Err(UserError::FieldsRequired);
        }

        let mut user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::NotFound)?;

        let token = self.token_generator.reset_token();
        user.issue_reset_token(token.clone(), Utc::now());
        let user = self.repository.update(&user).await?;

        let mail = PasswordResetMail {
            to: user.email.clone(),
            name: user.name.clone(),
            reset_url: format!(
                "{}/reset-password/{}",
                params.base_url.trim_end_matches('/'),
                token
            ),
            valid_for_hours: RESET_TOKEN_TTL_HOURS,
        };

        if let Err(e) = self.mail_service.send_password_reset(&mail).await {
            self.logger.error(&format!(
                "Failed to send password reset mail to user {}: {}",
                user.id, e
            ));
            return Err(e);
        }

        self.logger
            .info(&format!("Password reset requested for user {}", user.id));
        Ok(())
    }
}
