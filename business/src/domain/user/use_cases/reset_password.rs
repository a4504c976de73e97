use async_trait::async_trait;

use crate::domain::user::errors::UserError;

pub struct ResetPasswordParams {
    pub token: String,
    pub password: String,
    pub password_confirmation: String,
}

#[async_trait]
pub trait ResetPasswordUseCase: Send + Sync {
    async fn execute(&self, params: ResetPasswordParams) -> Result<(), UserError>;
}
