//! Per-request view of the session: who is logged in and which one-shot
//! messages are waiting to be shown.

use poem::session::Session;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::user::model::User;

pub const LOGIN_PATH: &str = "/login";

const USER_KEY: &str = "user";
const FLASH_KEY: &str = "flash";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub text: String,
}

pub struct RequestContext {
    pub user: Option<SessionUser>,
    pub flash: Vec<FlashMessage>,
}

impl RequestContext {
    /// Reads the session. Pending flash messages are taken, so they are
    /// shown exactly once.
    pub fn from_session(session: &Session) -> Self {
        let flash = session
            .get::<Vec<FlashMessage>>(FLASH_KEY)
            .unwrap_or_default();
        if !flash.is_empty() {
            session.remove(FLASH_KEY);
        }

        Self {
            user: session.get::<SessionUser>(USER_KEY),
            flash,
        }
    }
}

pub fn push_flash(session: &Session, kind: FlashKind, text: impl Into<String>) {
    let mut messages = session
        .get::<Vec<FlashMessage>>(FLASH_KEY)
        .unwrap_or_default();
    messages.push(FlashMessage {
        kind,
        text: text.into(),
    });
    session.set(FLASH_KEY, messages);
}

pub fn flash_success(session: &Session, text: impl Into<String>) {
    push_flash(session, FlashKind::Success, text);
}

pub fn flash_error(session: &Session, text: impl Into<String>) {
    push_flash(session, FlashKind::Error, text);
}

/// Starts an authenticated session under a fresh session id.
pub fn sign_in(session: &Session, user: &User) {
    session.renew();
    session.set(USER_KEY, SessionUser::from(user));
}

pub fn sign_out(session: &Session) {
    session.remove(USER_KEY);
}

/// The logged in user, or `None` after queueing the "please log in" message.
pub fn require_user(session: &Session) -> Option<SessionUser> {
    let user = session.get::<SessionUser>(USER_KEY);
    if user.is_none() {
        flash_error(session, "Please log in to continue");
    }
    user
}
