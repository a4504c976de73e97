use business::domain::report::errors::ReportError;

use crate::api::error::{ErrorKind, FlashError, IntoFlash};

impl IntoFlash for ReportError {
    fn into_flash(self) -> FlashError {
        match self {
            ReportError::Rendering(_) | ReportError::PhotoUnavailable(_) => FlashError::new(
                ErrorKind::ExternalService,
                "The report could not be generated",
            ),
            ReportError::Repository(_) => FlashError::new(
                ErrorKind::Storage,
                "Something went wrong, please try again",
            ),
        }
    }
}
