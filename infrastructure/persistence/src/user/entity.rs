use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::user::model::User;

use crate::document::StoredDocument;

pub const USER_TYPE: &str = "user";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub reset_token: Option<String>,
    #[serde(default)]
    pub reset_token_expires: Option<DateTime<Utc>>,
}

impl UserDocument {
    pub fn from_domain(user: &User) -> Self {
        Self {
            doc_type: USER_TYPE.to_string(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            name: user.name.clone(),
            created_at: user.created_at,
            reset_token: user.reset_token.clone(),
            reset_token_expires: user.reset_token_expires,
        }
    }
}

impl StoredDocument<UserDocument> {
    pub fn into_user(self) -> User {
        let doc = self.doc;
        User::from_repository(
            self.id,
            doc.email,
            doc.password_hash,
            doc.name,
            doc.reset_token,
            doc.reset_token_expires,
            self.rev,
            doc.created_at,
        )
    }
}
