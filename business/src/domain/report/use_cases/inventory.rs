use async_trait::async_trait;

use crate::domain::report::errors::ReportError;
use crate::domain::report::model::ReportFile;

pub struct InventoryReportParams {
    /// Display name of whoever asked for the report.
    pub generated_by: String,
}

#[async_trait]
pub trait InventoryReportUseCase: Send + Sync {
    async fn execute(&self, params: InventoryReportParams) -> Result<ReportFile, ReportError>;
}
