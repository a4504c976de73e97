use std::sync::Arc;

use poem::Request;
use poem::session::Session;
use poem_openapi::{OpenApi, param::Path, payload::Form};

use business::domain::user::errors::UserError;
use business::domain::user::use_cases::authenticate::{AuthenticateParams, AuthenticateUseCase};
use business::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};
use business::domain::user::use_cases::request_password_reset::{
    RequestPasswordResetParams, RequestPasswordResetUseCase,
};
use business::domain::user::use_cases::reset_password::{
    ResetPasswordParams, ResetPasswordUseCase,
};
use business::domain::user::use_cases::verify_reset_token::{
    VerifyResetTokenParams, VerifyResetTokenUseCase,
};

use crate::api::auth::dto::{ForgotPasswordForm, LoginForm, RegisterForm, ResetPasswordForm};
use crate::api::auth::pages::{
    forgot_password_page, login_page, register_page, reset_password_page,
};
use crate::api::context::{
    LOGIN_PATH, RequestContext, flash_error, flash_success, sign_in, sign_out,
};
use crate::api::error::report_error;
use crate::api::response::PageResponse;
use crate::api::tags::ApiTags;

const AFTER_LOGIN_PATH: &str = "/products";
const FORGOT_PASSWORD_PATH: &str = "/forgot-password";
const RESET_LINK_SENT: &str =
    "If an account exists for that email, we sent it a link to reset the password";

pub struct AuthApi {
    authenticate_use_case: Arc<dyn AuthenticateUseCase>,
    register_use_case: Arc<dyn RegisterUserUseCase>,
    request_reset_use_case: Arc<dyn RequestPasswordResetUseCase>,
    verify_token_use_case: Arc<dyn VerifyResetTokenUseCase>,
    reset_password_use_case: Arc<dyn ResetPasswordUseCase>,
    base_url: Option<String>,
}

impl AuthApi {
    pub fn new(
        authenticate_use_case: Arc<dyn AuthenticateUseCase>,
        register_use_case: Arc<dyn RegisterUserUseCase>,
        request_reset_use_case: Arc<dyn RequestPasswordResetUseCase>,
        verify_token_use_case: Arc<dyn VerifyResetTokenUseCase>,
        reset_password_use_case: Arc<dyn ResetPasswordUseCase>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            authenticate_use_case,
            register_use_case,
            request_reset_use_case,
            verify_token_use_case,
            reset_password_use_case,
            base_url,
        }
    }

    fn reset_base_url(&self, req: &Request) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None => request_base_url(req),
        }
    }
}

/// `scheme://host` as seen by the client, honouring a proxy's
/// `X-Forwarded-Proto`.
fn request_base_url(req: &Request) -> String {
    let scheme = req.header("x-forwarded-proto").unwrap_or("http");
    let host = req.header("host").unwrap_or("localhost");
    format!("{}://{}", scheme, host)
}

fn reset_path(token: &str) -> String {
    if !token.is_empty() && token.chars().all(|c| c.is_ascii_alphanumeric()) {
        format!("/reset-password/{}", token)
    } else {
        FORGOT_PASSWORD_PATH.to_string()
    }
}

/// Login, registration and password recovery pages.
#[OpenApi]
impl AuthApi {
    /// Login form
    #[oai(path = "/login", method = "get", tag = "ApiTags::Auth")]
    async fn login_form(&self, session: &Session) -> PageResponse {
        PageResponse::page(login_page(&RequestContext::from_session(session)))
    }

    /// Log in
    ///
    /// A wrong password and an unknown email get the same answer.
    #[oai(path = "/login", method = "post", tag = "ApiTags::Auth")]
    async fn login(&self, session: &Session, form: Form<LoginForm>) -> PageResponse {
        let params = AuthenticateParams {
            email: form.0.email.unwrap_or_default(),
            password: form.0.password.unwrap_or_default(),
        };

        match self.authenticate_use_case.execute(params).await {
            Ok(Some(user)) => {
                sign_in(session, &user);
                flash_success(session, "You are now logged in");
                PageResponse::redirect(AFTER_LOGIN_PATH)
            }
            Ok(None) => {
                flash_error(session, "Invalid email or password");
                PageResponse::redirect(LOGIN_PATH)
            }
            Err(err) => {
                report_error(session, err);
                PageResponse::redirect(LOGIN_PATH)
            }
        }
    }

    /// Registration form
    #[oai(path = "/register", method = "get", tag = "ApiTags::Auth")]
    async fn register_form(&self, session: &Session) -> PageResponse {
        PageResponse::page(register_page(&RequestContext::from_session(session)))
    }

    /// Register a new account
    #[oai(path = "/register", method = "post", tag = "ApiTags::Auth")]
    async fn register(&self, session: &Session, form: Form<RegisterForm>) -> PageResponse {
        let params = RegisterUserParams {
            name: form.0.name.unwrap_or_default(),
            email: form.0.email.unwrap_or_default(),
            password: form.0.password.unwrap_or_default(),
            password_confirmation: form.0.password2.unwrap_or_default(),
        };

        match self.register_use_case.execute(params).await {
            Ok(_) => {
                flash_success(session, "You are registered and can now log in");
                PageResponse::redirect(LOGIN_PATH)
            }
            Err(err) => {
                report_error(session, err);
                PageResponse::redirect("/register")
            }
        }
    }

    /// Log out
    #[oai(path = "/logout", method = "get", tag = "ApiTags::Auth")]
    async fn logout(&self, session: &Session) -> PageResponse {
        sign_out(session);
        flash_success(session, "You have been logged out");
        PageResponse::redirect(LOGIN_PATH)
    }

    /// Password recovery form
    #[oai(path = "/forgot-password", method = "get", tag = "ApiTags::Auth")]
    async fn forgot_password_form(&self, session: &Session) -> PageResponse {
        PageResponse::page(forgot_password_page(&RequestContext::from_session(session)))
    }

    /// Send a password reset link
    ///
    /// Known and unknown emails get the same message.
    #[oai(path = "/forgot-password", method = "post", tag = "ApiTags::Auth")]
    async fn forgot_password(
        &self,
        req: &Request,
        session: &Session,
        form: Form<ForgotPasswordForm>,
    ) -> PageResponse {
        let Some(email) = form.0.email.filter(|email| !email.trim().is_empty()) else {
            flash_error(session, "Please enter your email address");
            return PageResponse::redirect(FORGOT_PASSWORD_PATH);
        };

        let params = RequestPasswordResetParams {
            email: email.trim().to_string(),
            base_url: self.reset_base_url(req),
        };

        match self.request_reset_use_case.execute(params).await {
            Ok(()) | Err(UserError::NotFound) => {
                flash_success(session, RESET_LINK_SENT);
                PageResponse::redirect(LOGIN_PATH)
            }
            Err(err) => {
                report_error(session, err);
                PageResponse::redirect(FORGOT_PASSWORD_PATH)
            }
        }
    }

    /// New password form, reachable from the emailed link
    #[oai(path = "/reset-password/:token", method = "get", tag = "ApiTags::Auth")]
    async fn reset_password_form(&self, session: &Session, token: Path<String>) -> PageResponse {
        let params = VerifyResetTokenParams {
            token: token.0.clone(),
        };

        match self.verify_token_use_case.execute(params).await {
            Ok(_) => {
                let context = RequestContext::from_session(session);
                PageResponse::page(reset_password_page(&context, &token.0))
            }
            Err(err) => {
                report_error(session, err);
                PageResponse::redirect(FORGOT_PASSWORD_PATH)
            }
        }
    }

    /// Set a new password with a reset token
    #[oai(path = "/reset-password/:token", method = "post", tag = "ApiTags::Auth")]
    async fn reset_password(
        &self,
        session: &Session,
        token: Path<String>,
        form: Form<ResetPasswordForm>,
    ) -> PageResponse {
        let params = ResetPasswordParams {
            token: token.0.clone(),
            password: form.0.password.unwrap_or_default(),
            password_confirmation: form.0.password2.unwrap_or_default(),
        };

        match self.reset_password_use_case.execute(params).await {
            Ok(()) => {
                flash_success(session, "Your password has been reset, you can now log in");
                PageResponse::redirect(LOGIN_PATH)
            }
            Err(err @ (UserError::FieldsRequired | UserError::PasswordMismatch)) => {
                report_error(session, err);
                PageResponse::redirect(reset_path(&token.0))
            }
            Err(err) => {
                report_error(session, err);
                PageResponse::redirect(FORGOT_PASSWORD_PATH)
            }
        }
    }
}
