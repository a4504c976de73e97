#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.fields_required")]
    FieldsRequired,
    #[error("user.password_mismatch")]
    PasswordMismatch,
    #[error("user.email_taken")]
    EmailTaken,
    #[error("user.not_found")]
    NotFound,
    #[error("user.invalid_reset_token")]
    InvalidResetToken,
    #[error("user.password_hashing_failed")]
    Hashing,
    #[error("user.mail_delivery_failed")]
    MailDelivery,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
