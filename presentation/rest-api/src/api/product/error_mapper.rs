use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorKind, FlashError, IntoFlash};

impl IntoFlash for ProductError {
    fn into_flash(self) -> FlashError {
        let (kind, message) = match &self {
            ProductError::FieldsRequired => (ErrorKind::Validation, "Please fill in all fields"),
            ProductError::InvalidPrice => (
                ErrorKind::Validation,
                "The price must be a number greater than or equal to zero",
            ),
            ProductError::InvalidStock => (
                ErrorKind::Validation,
                "The stock must be a whole number greater than or equal to zero",
            ),
            ProductError::DuplicatedCode => (
                ErrorKind::Validation,
                "Another product already uses that ID",
            ),
            ProductError::NotFound => (ErrorKind::NotFound, "Product not found"),
            ProductError::PhotoInvalidType => (
                ErrorKind::Validation,
                "Only jpeg, jpg, png and gif images are allowed",
            ),
            ProductError::PhotoTooLarge => (
                ErrorKind::Validation,
                "The photo must not exceed 5 MB",
            ),
            ProductError::PhotoStorageFailed => {
                (ErrorKind::Storage, "The photo could not be saved")
            }
            ProductError::Repository(_) => (
                ErrorKind::Storage,
                "Something went wrong, please try again",
            ),
        };
        FlashError::new(kind, message)
    }
}
