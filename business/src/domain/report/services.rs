use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::sale::model::Sale;

use super::errors::ReportError;
use super::model::{CustomerTotalReport, InventoryReport, SalesTotalReport, StockTotalReport};

pub trait PdfRenderer: Send + Sync {
    fn inventory(&self, report: &InventoryReport) -> Result<Vec<u8>, ReportError>;
    fn receipt(&self, sale: &Sale, issued_at: DateTime<Utc>) -> Result<Vec<u8>, ReportError>;
}

pub trait SpreadsheetRenderer: Send + Sync {
    fn sales_total(&self, report: &SalesTotalReport) -> Result<Vec<u8>, ReportError>;
    fn stock_total(&self, report: &StockTotalReport) -> Result<Vec<u8>, ReportError>;
    fn customer_total(&self, report: &CustomerTotalReport) -> Result<Vec<u8>, ReportError>;
}

/// Reads the image behind a product photo reference, whether it is one of
/// our uploads or a remote URL.
#[async_trait]
pub trait PhotoLoader: Send + Sync {
    async fn load(&self, photo_ref: &str) -> Result<Vec<u8>, ReportError>;
}
