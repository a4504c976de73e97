use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;
use crate::domain::user::use_cases::set_password::{SetPasswordParams, SetPasswordUseCase};

pub struct SetPasswordUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetPasswordUseCase for SetPasswordUseCaseImpl {
    async fn execute(&self, params: SetPasswordParams) -> Result<(), UserError> {
        let email = params.email.trim();
        if email.is_empty() || params.password.is_empty() {
            return Err(UserError::FieldsRequired);
        }

        let mut user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::NotFound)?;

        user.change_password(self.password_hasher.hash(&params.password).await?);
        let user = self.repository.update(&user).await?;

        self.logger
            .info(&format!("Password set for user {}", user.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::user::model::User;
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
        pub Hasher {}

        #[async_trait]
        impl PasswordHasher for Hasher {
            async fn hash(&self, password: &str) -> Result<String, UserError>;
            async fn verify(&self, password: &str, password_hash: &str) -> bool;
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

    fn hasher() -> MockHasher {
        let mut hasher = MockHasher::new();
        hasher
            .expect_hash()
            .returning(|password| Ok(format!("hash:{}", password)));
        hasher
    }

    #[tokio::test]
    async fn should_set_new_password_hash() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_email().returning(|email| {
            Ok(Some(User::new(email, "Ana", "hash:old".to_string()).unwrap()))
        });
        repo.expect_update()
            .withf(|user| user.password_hash == "hash:fresh")
            .times(1)
            .returning(|user| Ok(user.clone()));

        let use_case = SetPasswordUseCaseImpl {
            repository: Arc::new(repo),
            password_hasher: Arc::new(hasher()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SetPasswordParams {
                email: "ana@example.com".to_string(),
                password: "fresh".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_email() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let use_case = SetPasswordUseCaseImpl {
            repository: Arc::new(repo),
            password_hasher: Arc::new(hasher()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SetPasswordParams {
                email: "nobody@example.com".to_string(),
                password: "fresh".to_string(),
            })
            .await;

        assert!(matches!(result, Err(UserError::NotFound)));
    }
}
