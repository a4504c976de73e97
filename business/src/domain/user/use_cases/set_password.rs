use async_trait::async_trait;

use crate::domain::user::errors::UserError;

/// Administrative password change, no token involved.
pub struct SetPasswordParams {
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait SetPasswordUseCase: Send + Sync {
    async fn execute(&self, params: SetPasswordParams) -> Result<(), UserError>;
}
