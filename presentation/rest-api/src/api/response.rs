use poem_openapi::ApiResponse;
use poem_openapi::payload::{Binary, Html};

use business::domain::report::model::ReportFile;

#[derive(ApiResponse)]
pub enum PageResponse {
    #[oai(status = 200)]
    Page(Html<String>),
    #[oai(status = 303)]
    Redirect(#[oai(header = "location")] String),
}

impl PageResponse {
    pub fn page(html: String) -> Self {
        PageResponse::Page(Html(html))
    }

    pub fn redirect(to: impl Into<String>) -> Self {
        PageResponse::Redirect(to.into())
    }
}

/// A downloaded document, or a redirect when it could not be produced.
#[derive(ApiResponse)]
pub enum FileResponse {
    #[oai(status = 200)]
    File(
        Binary<Vec<u8>>,
        #[oai(header = "content-type")] String,
        #[oai(header = "content-disposition")] String,
    ),
    #[oai(status = 303)]
    Redirect(#[oai(header = "location")] String),
}

impl FileResponse {
    pub fn redirect(to: impl Into<String>) -> Self {
        FileResponse::Redirect(to.into())
    }
}

impl From<ReportFile> for FileResponse {
    fn from(file: ReportFile) -> Self {
        FileResponse::File(
            Binary(file.bytes),
            file.content_type.to_string(),
            content_disposition(&file.file_name),
        )
    }
}

fn content_disposition(file_name: &str) -> String {
    let safe: String = file_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    format!("attachment; filename=\"{}\"", safe)
}
