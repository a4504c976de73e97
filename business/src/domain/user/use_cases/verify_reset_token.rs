use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct VerifyResetTokenParams {
    pub token: String,
}

#[async_trait]
pub trait VerifyResetTokenUseCase: Send + Sync {
    async fn execute(&self, params: VerifyResetTokenParams) -> Result<User, UserError>;
}
