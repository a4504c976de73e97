//! Maintenance commands for user accounts.
//!
//! ```text
//! user-admin create <email> <password> <name>
//! user-admin reset-password <email> <new-password>
//! ```
//!
//! Exit codes: 0 success, 1 usage, 2 user not found or already registered,
//! 3 any other failure.

use std::process::ExitCode;
use std::sync::Arc;

use dotenvy::dotenv;

use business::application::user::register::RegisterUserUseCaseImpl;
use business::application::user::set_password::SetPasswordUseCaseImpl;
use business::domain::user::errors::UserError;
use business::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};
use business::domain::user::use_cases::set_password::{SetPasswordParams, SetPasswordUseCase};
use logger::TracingLogger;
use persistence::user::repository::UserRepositoryPostgres;
use rest_api::config::Environment;
use rest_api::config::database_config::{DatabaseSettings, init_database};
use security::Argon2PasswordHasher;

const USAGE: &str = "usage:\n  user-admin create <email> <password> <name>\n  \
                     user-admin reset-password <email> <new-password>";

enum Command {
    Create {
        email: String,
        password: String,
        name: String,
    },
    ResetPassword {
        email: String,
        password: String,
    },
}

fn parse(args: &[String]) -> Option<Command> {
    match args {
        [command, email, password, name @ ..] if command == "create" && !name.is_empty() => {
            Some(Command::Create {
                email: email.clone(),
                password: password.clone(),
                name: name.join(" "),
            })
        }
        [command, email, password] if command == "reset-password" => {
            Some(Command::ResetPassword {
                email: email.clone(),
                password: password.clone(),
            })
        }
        _ => None,
    }
}

fn exit_code(error: &UserError) -> u8 {
    match error {
        UserError::NotFound | UserError::EmailTaken => 2,
        _ => 3,
    }
}

async fn run(command: Command) -> anyhow::Result<Result<String, UserError>> {
    let settings = DatabaseSettings::from_source(&Environment)?;
    let (pool, collections) = init_database(&settings).await?;

    let repository = Arc::new(UserRepositoryPostgres::new(pool, collections));
    let password_hasher = Arc::new(Argon2PasswordHasher::new());
    let logger = Arc::new(TracingLogger);

    let outcome = match command {
        Command::Create {
            email,
            password,
            name,
        } => {
            let use_case = RegisterUserUseCaseImpl {
                repository,
                password_hasher,
                logger,
            };
            use_case
                .execute(RegisterUserParams {
                    name,
                    email,
                    password: password.clone(),
                    password_confirmation: password,
                })
                .await
                .map(|user| format!("User {} created", user.email))
        }
        Command::ResetPassword { email, password } => {
            let use_case = SetPasswordUseCaseImpl {
                repository,
                password_hasher,
                logger,
            };
            use_case
                .execute(SetPasswordParams {
                    email: email.clone(),
                    password,
                })
                .await
                .map(|()| format!("Password updated for {}", email))
        }
    };
    Ok(outcome)
}

#[tokio::main]
async fn main() -> ExitCode {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = parse(&args) else {
        eprintln!("{}", USAGE);
        return ExitCode::from(1);
    };

    match run(command).await {
        Ok(Ok(message)) => {
            println!("{}", message);
            ExitCode::SUCCESS
        }
        Ok(Err(err)) => {
            eprintln!("error: {}", err);
            ExitCode::from(exit_code(&err))
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(3)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn should_join_remaining_words_into_the_name() {
        let command = parse(&args(&["create", "ana@example.com", "pw", "Ana", "Lopez"]));

        match command {
            Some(Command::Create { name, .. }) => assert_eq!(name, "Ana Lopez"),
            _ => panic!("expected create"),
        }
    }

    #[test]
    fn should_reject_incomplete_commands() {
        assert!(parse(&args(&["create", "ana@example.com", "pw"])).is_none());
        assert!(parse(&args(&["reset-password", "ana@example.com"])).is_none());
        assert!(parse(&args(&["delete", "ana@example.com"])).is_none());
    }

    #[test]
    fn should_map_missing_users_to_exit_code_two() {
        assert_eq!(exit_code(&UserError::NotFound), 2);
        assert_eq!(exit_code(&UserError::EmailTaken), 2);
        assert_eq!(exit_code(&UserError::Hashing), 3);
    }
}
