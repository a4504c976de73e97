use business::domain::user::errors::UserError;

use crate::api::error::{ErrorKind, FlashError, IntoFlash};

impl IntoFlash for UserError {
    fn into_flash(self) -> FlashError {
        let (kind, message) = match &self {
            UserError::FieldsRequired => (ErrorKind::Validation, "Please fill in all fields"),
            UserError::PasswordMismatch => (ErrorKind::Validation, "Passwords do not match"),
            UserError::EmailTaken => (
                ErrorKind::Validation,
                "That email address is already registered",
            ),
            UserError::NotFound => (ErrorKind::NotFound, "No account found for that email"),
            UserError::InvalidResetToken => (
                ErrorKind::NotFound,
                "The password reset link is invalid or has expired",
            ),
            UserError::Hashing => (ErrorKind::Storage, "Could not process the password"),
            UserError::MailDelivery => (
                ErrorKind::ExternalService,
                "Could not send the recovery email, please try again later",
            ),
            UserError::Repository(_) => (
                ErrorKind::Storage,
                "Something went wrong, please try again",
            ),
        };
        FlashError::new(kind, message)
    }
}
