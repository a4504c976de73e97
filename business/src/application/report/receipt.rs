use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::report::errors::ReportError;
use crate::domain::report::model::ReportFile;
use crate::domain::report::services::PdfRenderer;
use crate::domain::report::use_cases::receipt::{SaleReceiptParams, SaleReceiptUseCase};

pub struct SaleReceiptUseCaseImpl {
    pub pdf_renderer: Arc<dyn PdfRenderer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaleReceiptUseCase for SaleReceiptUseCaseImpl {
    async fn execute(&self, params: SaleReceiptParams) -> Result<ReportFile, ReportError> {
        self.logger
            .debug(&format!("Rendering receipt for sale {}", params.sale.id));

        let bytes = self.pdf_renderer.receipt(&params.sale, Utc::now())?;
        Ok(ReportFile::pdf(
            format!("receipt_{}.pdf", params.sale.id),
            bytes,
        ))
    }
}
