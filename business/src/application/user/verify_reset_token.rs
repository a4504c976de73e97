use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::verify_reset_token::{
    VerifyResetTokenParams, VerifyResetTokenUseCase,
};

pub struct VerifyResetTokenUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

/// Loads the user holding `token` if it has not expired yet.
pub(crate) async fn user_for_token(
    repository: &dyn UserRepository,
    token: &str,
) -> Result<User, UserError> {
    if token.trim().is_empty() {
        return Err(UserError::InvalidResetToken);
    }

    repository
        .find_by_reset_token(token)
        .await?
        .filter(|user| user.accepts_reset_token(token, Utc::now()))
        .ok_or(UserError::InvalidResetToken)
}

#[async_trait]
impl VerifyResetTokenUseCase for VerifyResetTokenUseCaseImpl {
    async fn execute(&self, params: VerifyResetTokenParams) -> Result<User, UserError> {
        let result = user_for_token(self.repository.as_ref(), &params.token).await;
        if let Err(UserError::InvalidResetToken) = &result {
            self.logger.debug("Rejected invalid or expired reset token");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use chrono::Duration;
    use mockall::mock;

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
            async fn find_by_reset_token(&self, token: &str) -> Result<Option<User>, RepositoryError>;
            async fn insert(&self, user: &User) -> Result<User, RepositoryError>;
            async fn update(&self, user: &User) -> Result<User, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn user_with_token(issued_hours_ago: i64) -> User {
        let mut user = User::new("ana@example.com", "Ana", "hash".to_string()).unwrap();
        user.issue_reset_token(
            "f00d".to_string(),
            Utc::now() - Duration::hours(issued_hours_ago),
        );
        user
    }

    #[tokio::test]
    async fn should_accept_fresh_token() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_reset_token()
            .returning(|_| Ok(Some(user_with_token(1))));

        let use_case = VerifyResetTokenUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let user = use_case
            .execute(VerifyResetTokenParams {
                token: "f00d".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.email, "ana@example.com");
    }

    #[tokio::test]
    async fn should_reject_expired_token() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_reset_token()
            .returning(|_| Ok(Some(user_with_token(25))));

        let use_case = VerifyResetTokenUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(VerifyResetTokenParams {
                token: "f00d".to_string(),
            })
            .await;

        assert!(matches!(result, Err(UserError::InvalidResetToken)));
    }

    #[tokio::test]
    async fn should_reject_unknown_token() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_reset_token().returning(|_| Ok(None));

        let use_case = VerifyResetTokenUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(VerifyResetTokenParams {
                token: "beef".to_string(),
            })
            .await;

        assert!(matches!(result, Err(UserError::InvalidResetToken)));
    }
}
