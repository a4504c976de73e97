use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::report::errors::ReportError;
use crate::domain::report::model::{ReportFile, StockTotalReport};
use crate::domain::report::services::SpreadsheetRenderer;
use crate::domain::report::use_cases::stock_total::StockTotalReportUseCase;

pub const STOCK_TOTAL_FILE_NAME: &str = "stock-total.xlsx";

pub struct StockTotalReportUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub spreadsheet_renderer: Arc<dyn SpreadsheetRenderer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl StockTotalReportUseCase for StockTotalReportUseCaseImpl {
    async fn execute(&self) -> Result<ReportFile, ReportError> {
        let report = StockTotalReport::new(self.product_repository.get_all().await?);
        self.logger.info(&format!(
            "Generating stock total report: {} unit(s) across {} product(s)",
            report.total_units,
            report.products.len()
        ));

        let bytes = self.spreadsheet_renderer.stock_total(&report)?;
        Ok(ReportFile::xlsx(STOCK_TOTAL_FILE_NAME, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::Product;
    use crate::domain::report::model::{CustomerTotalReport, SalesTotalReport};
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use mockall::mock;
    use std::str::FromStr;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn insert(&self, product: &Product) -> Result<Product, RepositoryError>;
            async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
            async fn delete(&self, product: &Product) -> Result<(), RepositoryError>;
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

    fn product(price: &str, stock: u32) -> Product {
        Product::from_repository(
            Uuid::new_v4(),
            "P".to_string(),
            "Rice".to_string(),
            BigDecimal::from_str(price).unwrap(),
            "Long grain".to_string(),
            stock,
            None,
            1,
            Utc::now(),
            None,
        )
    }

    #[tokio::test]
    async fn should_render_stock_value_totals() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_all()
            .returning(|| Ok(vec![product("1.50", 4), product("2.00", 1)]));

        let mut sheets = MockSheets::new();
        sheets
            .expect_stock_total()
            .withf(|report| report.total_units == 5 && report.total_value == BigDecimal::from(8))
            .times(1)
            .returning(|_| Ok(b"PK\x03\x04".to_vec()));

        let use_case = StockTotalReportUseCaseImpl {
            product_repository: Arc::new(repo),
            spreadsheet_renderer: Arc::new(sheets),
            logger: mock_logger(),
        };

        let file = use_case.execute().await.unwrap();

        assert_eq!(file.file_name, "stock-total.xlsx");
    }
}
