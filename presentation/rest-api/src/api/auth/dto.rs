use poem_openapi::Object;
use serde::Deserialize;

/// Blank inputs are treated the same as missing ones by the use cases.
#[derive(Debug, Clone, Object, Deserialize)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Object, Deserialize)]
pub struct RegisterForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// Confirmation of `password`.
    pub password2: Option<String>,
}

#[derive(Debug, Clone, Object, Deserialize)]
pub struct ForgotPasswordForm {
    pub email: Option<String>,
}

#[derive(Debug, Clone, Object, Deserialize)]
pub struct ResetPasswordForm {
    pub password: Option<String>,
    pub password2: Option<String>,
}
