use async_trait::async_trait;

use crate::domain::report::errors::ReportError;
use crate::domain::report::model::ReportFile;

#[async_trait]
pub trait SalesTotalReportUseCase: Send + Sync {
    async fn execute(&self) -> Result<ReportFile, ReportError>;
}
