use business::domain::sale::errors::SaleError;

use crate::api::error::{ErrorKind, FlashError, IntoFlash};

impl IntoFlash for SaleError {
    fn into_flash(self) -> FlashError {
        match self {
            SaleError::EmptyItems => {
                FlashError::new(ErrorKind::Validation, "Select at least one product")
            }
            SaleError::ProductNotFound(_) => FlashError::new(
                ErrorKind::NotFound,
                "One of the selected products no longer exists",
            ),
            SaleError::InsufficientStock { name, .. } => FlashError::new(
                ErrorKind::BusinessRule,
                format!("Insufficient stock for {}", name),
            ),
            SaleError::StorageConflict => FlashError::new(
                ErrorKind::Storage,
                "The stock changed while the sale was being recorded, please try again",
            ),
            SaleError::Repository(_) => {
                FlashError::new(ErrorKind::Storage, "The sale could not be recorded")
            }
        }
    }
}
