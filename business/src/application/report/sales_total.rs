use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::report::errors::ReportError;
use crate::domain::report::model::{ReportFile, SalesTotalReport};
use crate::domain::report::services::SpreadsheetRenderer;
use crate::domain::report::use_cases::sales_total::SalesTotalReportUseCase;
use crate::domain::sale::repository::SaleRepository;

pub const SALES_TOTAL_FILE_NAME: &str = "sales-total.xlsx";

pub struct SalesTotalReportUseCaseImpl {
    pub sale_repository: Arc<dyn SaleRepository>,
    pub spreadsheet_renderer: Arc<dyn SpreadsheetRenderer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SalesTotalReportUseCase for SalesTotalReportUseCaseImpl {
    async fn execute(&self) -> Result<ReportFile, ReportError> {
        let report = SalesTotalReport::new(self.sale_repository.get_all().await?);
        self.logger.info(&format!(
            "Generating sales total report over {} sale(s)",
            report.sales.len()
        ));

        let bytes = self.spreadsheet_renderer.sales_total(&report)?;
        Ok(ReportFile::xlsx(SALES_TOTAL_FILE_NAME, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::Product;
    use crate::domain::report::model::{CustomerTotalReport, StockTotalReport};
    use crate::domain::sale::model::{CustomerFilter, Sale};
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub SaleRepo {}

        #[async_trait]
        impl SaleRepository for SaleRepo {
            async fn get_all(&self) -> Result<Vec<Sale>, RepositoryError>;
            async fn find_by_customer(&self, filter: &CustomerFilter) -> Result<Vec<Sale>, RepositoryError>;
            async fn record(&self, sale: &Sale, products: &[Product]) -> Result<Sale, RepositoryError>;
        }
    }

    mock! {
        pub Sheets {}

        impl SpreadsheetRenderer for Sheets {
            fn sales_total(&self, report: &SalesTotalReport) -> Result<Vec<u8>, ReportError>;
            fn stock_total(&self, report: &StockTotalReport) -> Result<Vec<u8>, ReportError>;
            fn customer_total(&self, report: &CustomerTotalReport) -> Result<Vec<u8>, ReportError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn sale(total: i32) -> Sale {
        Sale::from_repository(
            Uuid::new_v4(),
            Some("Ana".to_string()),
            None,
            vec![],
            BigDecimal::from(total),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_render_every_sale_with_grand_total() {
        let mut repo = MockSaleRepo::new();
        repo.expect_get_all()
            .returning(|| Ok(vec![sale(10), sale(5)]));

        let mut sheets = MockSheets::new();
        sheets
            .expect_sales_total()
            .withf(|report| report.sales.len() == 2 && report.grand_total == BigDecimal::from(15))
            .times(1)
            .returning(|_| Ok(b"PK\x03\x04".to_vec()));

        let use_case = SalesTotalReportUseCaseImpl {
            sale_repository: Arc::new(repo),
            spreadsheet_renderer: Arc::new(sheets),
            logger: mock_logger(),
        };

        let file = use_case.execute().await.unwrap();

        assert_eq!(file.file_name, "sales-total.xlsx");
        assert!(file.content_type.contains("spreadsheetml"));
    }
}
