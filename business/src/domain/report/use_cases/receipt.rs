use async_trait::async_trait;

use crate::domain::report::errors::ReportError;
use crate::domain::report::model::ReportFile;
use crate::domain::sale::model::Sale;

pub struct SaleReceiptParams {
    pub sale: Sale,
}

#[async_trait]
pub trait SaleReceiptUseCase: Send + Sync {
    async fn execute(&self, params: SaleReceiptParams) -> Result<ReportFile, ReportError>;
}
