use poem::session::Session;
use poem_openapi::OpenApi;

use crate::api::context::RequestContext;
use crate::api::response::PageResponse;
use crate::api::tags::ApiTags;
use crate::api::views::{escape, layout};

#[derive(Default)]
pub struct HomeApi;

impl HomeApi {
    pub fn new() -> Self {
        Self
    }
}

fn home_page(context: &RequestContext) -> String {
    let body = match &context.user {
        Some(user) => format!(
            "<h1>Welcome, {}</h1>\
             <p>Manage the <a href=\"/products\">product catalog</a>, \
             record a <a href=\"/sales/new\">new sale</a> or download \
             <a href=\"/reports\">reports</a>.</p>",
            escape(&user.name)
        ),
        None => "<h1>Product management</h1>\
                 <p><a href=\"/login\">Log in</a> or <a href=\"/register\">create an account</a> \
                 to manage products and sales.</p>"
            .to_string(),
    };
    layout("Home", context, &body)
}

#[OpenApi]
impl HomeApi {
    /// Home page
    #[oai(path = "/", method = "get", tag = "ApiTags::Home")]
    async fn home(&self, session: &Session) -> PageResponse {
        let context = RequestContext::from_session(session);
        PageResponse::page(home_page(&context))
    }
}
