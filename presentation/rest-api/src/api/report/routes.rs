use std::sync::Arc;

use poem::session::Session;
use poem_openapi::{OpenApi, param::Query};

use business::domain::report::errors::ReportError;
use business::domain::report::model::ReportFile;
use business::domain::report::use_cases::customer_total::{
    CustomerTotalReportParams, CustomerTotalReportUseCase,
};
use business::domain::report::use_cases::inventory::{
    InventoryReportParams, InventoryReportUseCase,
};
use business::domain::report::use_cases::sales_total::SalesTotalReportUseCase;
use business::domain::report::use_cases::stock_total::StockTotalReportUseCase;

use crate::api::context::{LOGIN_PATH, RequestContext, require_user};
use crate::api::error::report_error;
use crate::api::report::pages::reports_page;
use crate::api::response::{FileResponse, PageResponse};
use crate::api::tags::ApiTags;

const REPORTS_PATH: &str = "/reports";

pub struct ReportApi {
    inventory_use_case: Arc<dyn InventoryReportUseCase>,
    sales_total_use_case: Arc<dyn SalesTotalReportUseCase>,
    stock_total_use_case: Arc<dyn StockTotalReportUseCase>,
    customer_total_use_case: Arc<dyn CustomerTotalReportUseCase>,
}

impl ReportApi {
    pub fn new(
        inventory_use_case: Arc<dyn InventoryReportUseCase>,
        sales_total_use_case: Arc<dyn SalesTotalReportUseCase>,
        stock_total_use_case: Arc<dyn StockTotalReportUseCase>,
        customer_total_use_case: Arc<dyn CustomerTotalReportUseCase>,
    ) -> Self {
        Self {
            inventory_use_case,
            sales_total_use_case,
            stock_total_use_case,
            customer_total_use_case,
        }
    }
}

fn download(
    session: &Session,
    result: Result<ReportFile, ReportError>,
    on_error: &str,
) -> FileResponse {
    match result {
        Ok(file) => FileResponse::from(file),
        Err(err) => {
            report_error(session, err);
            FileResponse::redirect(on_error)
        }
    }
}

#[OpenApi]
impl ReportApi {
    /// Report index
    #[oai(path = "/reports", method = "get", tag = "ApiTags::Reports")]
    async fn index(&self, session: &Session) -> PageResponse {
        if require_user(session).is_none() {
            return PageResponse::redirect(LOGIN_PATH);
        }
        let context = RequestContext::from_session(session);
        PageResponse::page(reports_page(&context))
    }

    /// Inventory PDF with product photos
    #[oai(path = "/reports/inventory", method = "get", tag = "ApiTags::Reports")]
    async fn inventory(&self, session: &Session) -> FileResponse {
        let Some(user) = require_user(session) else {
            return FileResponse::redirect(LOGIN_PATH);
        };

        let result = self
            .inventory_use_case
            .execute(InventoryReportParams {
                generated_by: user.name,
            })
            .await;
        download(session, result, "/products")
    }

    /// Every sale with the grand total
    #[oai(path = "/reports/sales-total.xlsx", method = "get", tag = "ApiTags::Reports")]
    async fn sales_total(&self, session: &Session) -> FileResponse {
        if require_user(session).is_none() {
            return FileResponse::redirect(LOGIN_PATH);
        }
        let result = self.sales_total_use_case.execute().await;
        download(session, result, REPORTS_PATH)
    }

    /// Units and value on hand per product
    #[oai(path = "/reports/stock-total.xlsx", method = "get", tag = "ApiTags::Reports")]
    async fn stock_total(&self, session: &Session) -> FileResponse {
        if require_user(session).is_none() {
            return FileResponse::redirect(LOGIN_PATH);
        }
        let result = self.stock_total_use_case.execute().await;
        download(session, result, REPORTS_PATH)
    }

    /// Totals per customer
    ///
    /// With `query`, lists the sales whose customer id or name equals it.
    /// Without it, groups every sale by customer.
    #[oai(path = "/reports/customer-total.xlsx", method = "get", tag = "ApiTags::Reports")]
    async fn customer_total(
        &self,
        session: &Session,
        query: Query<Option<String>>,
    ) -> FileResponse {
        if require_user(session).is_none() {
            return FileResponse::redirect(LOGIN_PATH);
        }
        let result = self
            .customer_total_use_case
            .execute(CustomerTotalReportParams { query: query.0 })
            .await;
        download(session, result, REPORTS_PATH)
    }
}
