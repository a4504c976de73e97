use async_trait::async_trait;

use crate::domain::report::errors::ReportError;
use crate::domain::report::model::ReportFile;

pub struct CustomerTotalReportParams {
    /// Customer id or name to match exactly. Blank means every customer.
    pub query: Option<String>,
}

#[async_trait]
pub trait CustomerTotalReportUseCase: Send + Sync {
    async fn execute(&self, params: CustomerTotalReportParams) -> Result<ReportFile, ReportError>;
}
