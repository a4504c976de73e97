use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::user::model::User;
use business::domain::user::repository::UserRepository;

use super::entity::{USER_TYPE, UserDocument};
use crate::db::Collections;
use crate::document::{self, StoredDocument, ViewLookup, repository_error, view_lookup};

pub struct UserRepositoryPostgres {
    pool: PgPool,
    collections: Collections,
}

impl UserRepositoryPostgres {
    pub fn new(pool: PgPool, collections: Collections) -> Self {
        Self { pool, collections }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let viewed = document::fetch_from_view_by(
            &self.pool,
            &self.collections.users_by_email,
            "email",
            email,
        )
        .await;
        let rows: Vec<StoredDocument<UserDocument>> = match view_lookup(viewed)? {
            ViewLookup::Found(rows) => rows,
            ViewLookup::Missing => {
                tracing::warn!(
                    "View {} is missing, scanning {}",
                    self.collections.users_by_email,
                    self.collections.users
                );
                document::find_by_fields(
                    &self.pool,
                    &self.collections.users,
                    USER_TYPE,
                    &[("email", Some(email))],
                )
                .await
                .map_err(repository_error)?
            }
        };

        Ok(rows.into_iter().next().map(StoredDocument::into_user))
    }

    async fn find_by_reset_token(&self, token: &str) -> Result<Option<User>, RepositoryError> {
        let rows: Vec<StoredDocument<UserDocument>> = document::find_by_fields(
            &self.pool,
            &self.collections.users,
            USER_TYPE,
            &[("resetToken", Some(token))],
        )
        .await
        .map_err(repository_error)?;

        Ok(rows.into_iter().next().map(StoredDocument::into_user))
    }

    async fn insert(&self, user: &User) -> Result<User, RepositoryError> {
        let rev = document::insert(
            &self.pool,
            &self.collections.users,
            user.id,
            user.created_at,
            &UserDocument::from_domain(user),
        )
        .await
        .map_err(repository_error)?;

        Ok(User {
            revision: rev,
            ..user.clone()
        })
    }

    async fn update(&self, user: &User) -> Result<User, RepositoryError> {
        let rev = document::update(
            &self.pool,
            &self.collections.users,
            user.id,
            user.revision,
            &UserDocument::from_domain(user),
        )
        .await
        .map_err(repository_error)?
        .ok_or(RepositoryError::Conflict)?;

        Ok(User {
            revision: rev,
            ..user.clone()
        })
    }
}
