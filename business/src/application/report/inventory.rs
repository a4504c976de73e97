use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::report::errors::ReportError;
use crate::domain::report::model::{InventoryEntry, InventoryPhoto, InventoryReport, ReportFile};
use crate::domain::report::services::{PdfRenderer, PhotoLoader};
use crate::domain::report::use_cases::inventory::{InventoryReportParams, InventoryReportUseCase};

pub const INVENTORY_FILE_NAME: &str = "inventory.pdf";

pub struct InventoryReportUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub photo_loader: Arc<dyn PhotoLoader>,
    pub pdf_renderer: Arc<dyn PdfRenderer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl InventoryReportUseCase for InventoryReportUseCaseImpl {
    async fn execute(&self, params: InventoryReportParams) -> Result<ReportFile, ReportError> {
        let products = self.product_repository.get_all().await?;
        self.logger.info(&format!(
            "Generating inventory report with {} product(s)",
            products.len()
        ));

        // One photo at a time, in catalog order
        let mut entries = Vec::with_capacity(products.len());
        for product in products {
            let photo = match &product.photo {
                None => InventoryPhoto::Missing,
                Some(photo_ref) => match self.photo_loader.load(photo_ref).await {
                    Ok(bytes) => InventoryPhoto::Loaded(bytes),
                    Err(e) => {
                        self.logger.warn(&format!(
                            "Could not load photo {} of product {}: {}",
                            photo_ref, product.id, e
                        ));
                        InventoryPhoto::Unavailable
                    }
                },
            };
            entries.push(InventoryEntry { product, photo });
        }

        let report = InventoryReport {
            generated_by: params.generated_by,
            generated_at: Utc::now(),
            entries,
        };
        let bytes = self.pdf_renderer.inventory(&report)?;

        Ok(ReportFile::pdf(INVENTORY_FILE_NAME, bytes))
    }
}
