use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::report::errors::ReportError;
use crate::domain::report::model::{CustomerTotalReport, ReportFile};
use crate::domain::report::services::SpreadsheetRenderer;
use crate::domain::report::use_cases::customer_total::{
    CustomerTotalReportParams, CustomerTotalReportUseCase,
};
use crate::domain::sale::model::CustomerFilter;
use crate::domain::sale::repository::SaleRepository;
use crate::domain::shared::value_objects::non_blank;

pub const CUSTOMER_TOTAL_FILE_NAME: &str = "customer-total.xlsx";

pub struct CustomerTotalReportUseCaseImpl {
    pub sale_repository: Arc<dyn SaleRepository>,
    pub spreadsheet_renderer: Arc<dyn SpreadsheetRenderer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CustomerTotalReportUseCase for CustomerTotalReportUseCaseImpl {
    async fn execute(&self, params: CustomerTotalReportParams) -> Result<ReportFile, ReportError> {
        let report = match non_blank(params.query) {
            Some(query) => {
                self.logger
                    .info(&format!("Generating customer total report for {:?}", query));
                // The query may be either the customer id or the name
                let mut sales = self
                    .sale_repository
                    .find_by_customer(&CustomerFilter {
                        customer_id: Some(query.clone()),
                        customer_name: None,
                    })
                    .await?;
                sales.extend(
                    self.sale_repository
                        .find_by_customer(&CustomerFilter {
                            customer_id: None,
                            customer_name: Some(query.clone()),
                        })
                        .await?,
                );
                CustomerTotalReport::customer(query, sales)
            }
            None => {
                self.logger
                    .info("Generating customer total report for all customers");
                CustomerTotalReport::all_customers(&self.sale_repository.get_all().await?)
            }
        };

        let bytes = self.spreadsheet_renderer.customer_total(&report)?;
        Ok(ReportFile::xlsx(CUSTOMER_TOTAL_FILE_NAME, bytes))
    }
}
