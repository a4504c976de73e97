use std::fmt::Display;

use poem::session::Session;

use crate::api::context::flash_error;

/// How a failed request is classified before it becomes a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    BusinessRule,
    Storage,
    ExternalService,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlashError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FlashError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

pub trait IntoFlash {
    fn into_flash(self) -> FlashError;
}

/// Logs the error with its code, queues its message and returns its kind so
/// the caller can pick where to redirect.
pub fn report_error<E>(session: &Session, error: E) -> ErrorKind
where
    E: IntoFlash + Display,
{
    let code = error.to_string();
    let flash = error.into_flash();
    match flash.kind {
        ErrorKind::Storage | ErrorKind::ExternalService => {
            tracing::error!(code = %code, "request failed")
        }
        _ => tracing::info!(code = %code, "request rejected"),
    }
    flash_error(session, flash.message);
    flash.kind
}
