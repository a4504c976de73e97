//! Shared page chrome. Every value that comes from a user or the database
//! goes through [`escape`] or [`escape_attr`] before it reaches the markup.

use std::borrow::Cow;

use crate::api::context::{FlashKind, RequestContext};

const STYLE: &str = "body{font-family:sans-serif;margin:0;color:#222}\
nav{background:#2c3e50;padding:.75rem 1.5rem}nav a{color:#fff;margin-right:1rem;text-decoration:none}\
main{padding:1.5rem;max-width:960px;margin:auto}\
.flash{padding:.75rem;margin-bottom:1rem;border-radius:4px}\
.flash-success{background:#d4edda}.flash-error{background:#f8d7da}\
table{border-collapse:collapse;width:100%}td,th{border-bottom:1px solid #ddd;padding:.5rem;text-align:left}\
label{display:block;margin-top:.75rem}input,textarea{padding:.4rem;min-width:260px}\
img.thumb{max-height:60px}button{margin-top:1rem;padding:.5rem 1rem}";

pub fn escape(value: &str) -> Cow<'_, str> {
    html_escape::encode_text(value)
}

pub fn escape_attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

fn navigation(context: &RequestContext) -> String {
    match &context.user {
        Some(user) => format!(
            "<nav><a href=\"/\">Home</a><a href=\"/products\">Products</a>\
             <a href=\"/sales/new\">New sale</a><a href=\"/reports\">Reports</a>\
             <a href=\"/logout\">Log out ({})</a></nav>",
            escape(&user.name)
        ),
        None => "<nav><a href=\"/\">Home</a><a href=\"/login\">Log in</a>\
                 <a href=\"/register\">Register</a></nav>"
            .to_string(),
    }
}

fn flash_messages(context: &RequestContext) -> String {
    context
        .flash
        .iter()
        .map(|message| {
            let class = match message.kind {
                FlashKind::Success => "flash flash-success",
                FlashKind::Error => "flash flash-error",
            };
            format!("<div class=\"{}\">{}</div>", class, escape(&message.text))
        })
        .collect()
}

/// Wraps `body` (already escaped markup) into a complete document.
pub fn layout(title: &str, context: &RequestContext, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{title}</title><style>{STYLE}</style></head>\
         <body>{nav}<main>{flash}{body}</main></body></html>",
        title = escape(title),
        nav = navigation(context),
        flash = flash_messages(context),
    )
}

pub fn not_found_page() -> String {
    let context = RequestContext {
        user: None,
        flash: Vec::new(),
    };
    layout(
        "Page not found",
        &context,
        "<h1>Page not found</h1><p>The page you are looking for does not exist.</p>\
         <p><a href=\"/\">Back to the home page</a></p>",
    )
}
