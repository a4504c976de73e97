use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct AuthenticateParams {
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait AuthenticateUseCase: Send + Sync {
    /// `None` for an unknown email and for a wrong password alike.
    async fn execute(&self, params: AuthenticateParams) -> Result<Option<User>, UserError>;
}
