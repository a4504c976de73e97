use crate::api::context::RequestContext;
use crate::api::views::{escape_attr, layout};

pub fn login_page(context: &RequestContext) -> String {
    layout(
        "Log in",
        context,
        "<h1>Log in</h1>\
         <form method=\"post\" action=\"/login\">\
         <label>Email <input type=\"email\" name=\"email\" required></label>\
         <label>Password <input type=\"password\" name=\"password\" required></label>\
         <button type=\"submit\">Log in</button></form>\
         <p><a href=\"/forgot-password\">Forgot your password?</a></p>\
         <p>No account yet? <a href=\"/register\">Register</a></p>",
    )
}

pub fn register_page(context: &RequestContext) -> String {
    layout(
        "Register",
        context,
        "<h1>Register</h1>\
         <form method=\"post\" action=\"/register\">\
         <label>Name <input type=\"text\" name=\"name\" required></label>\
         <label>Email <input type=\"email\" name=\"email\" required></label>\
         <label>Password <input type=\"password\" name=\"password\" required></label>\
         <label>Confirm password <input type=\"password\" name=\"password2\" required></label>\
         <button type=\"submit\">Register</button></form>",
    )
}

pub fn forgot_password_page(context: &RequestContext) -> String {
    layout(
        "Recover password",
        context,
        "<h1>Recover password</h1>\
         <p>We will send you a link to choose a new password.</p>\
         <form method=\"post\" action=\"/forgot-password\">\
         <label>Email <input type=\"email\" name=\"email\" required></label>\
         <button type=\"submit\">Send link</button></form>",
    )
}

pub fn reset_password_page(context: &RequestContext, token: &str) -> String {
    let body = format!(
        "<h1>Choose a new password</h1>\
         <form method=\"post\" action=\"/reset-password/{}\">\
         <label>New password <input type=\"password\" name=\"password\" required></label>\
         <label>Confirm password <input type=\"password\" name=\"password2\" required></label>\
         <button type=\"submit\">Reset password</button></form>",
        escape_attr(token)
    );
    layout("Reset password", context, &body)
}
