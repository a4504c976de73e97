use async_trait::async_trait;

use crate::domain::user::errors::UserError;

pub struct RequestPasswordResetParams {
    pub email: String,
    /// Scheme and host the reset link points to, without a trailing slash.
    pub base_url: String,
}

#[async_trait]
pub trait RequestPasswordResetUseCase: Send + Sync {
    async fn execute(&self, params: RequestPasswordResetParams) -> Result<(), UserError>;
}
