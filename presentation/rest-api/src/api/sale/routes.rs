use std::collections::HashMap;
use std::sync::Arc;

use poem::session::Session;
use poem::web::Form as RawForm;
use poem_openapi::{OpenApi, param::Query};
use uuid::Uuid;

use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::report::use_cases::receipt::{SaleReceiptParams, SaleReceiptUseCase};
use business::domain::sale::errors::SaleError;
use business::domain::sale::model::SaleItemRequest;
use business::domain::sale::use_cases::create::{CreateSaleParams, CreateSaleUseCase};

use crate::api::context::{LOGIN_PATH, RequestContext, flash_error, require_user};
use crate::api::error::report_error;
use crate::api::response::{FileResponse, PageResponse};
use crate::api::sale::dto::SaleForm;
use crate::api::sale::pages::new_sale_page;
use crate::api::tags::ApiTags;

const NEW_SALE_PATH: &str = "/sales/new";

pub struct SaleApi {
    create_sale_use_case: Arc<dyn CreateSaleUseCase>,
    get_all_products_use_case: Arc<dyn GetAllProductsUseCase>,
    receipt_use_case: Arc<dyn SaleReceiptUseCase>,
}

impl SaleApi {
    pub fn new(
        create_sale_use_case: Arc<dyn CreateSaleUseCase>,
        get_all_products_use_case: Arc<dyn GetAllProductsUseCase>,
        receipt_use_case: Arc<dyn SaleReceiptUseCase>,
    ) -> Self {
        Self {
            create_sale_use_case,
            get_all_products_use_case,
            receipt_use_case,
        }
    }

    /// Hidden JSON list first, per-product inputs as fallback.
    async fn requested_items(
        &self,
        form: &SaleForm,
    ) -> Result<Vec<SaleItemRequest>, SaleError> {
        let items = form.structured_items();
        if !items.is_empty() {
            return Ok(items);
        }

        let product_ids: Vec<Uuid> = self
            .get_all_products_use_case
            .execute()
            .await
            .map_err(|err| {
                tracing::error!("Could not list products for a sale: {:?}", err);
                SaleError::EmptyItems
            })?
            .iter()
            .map(|product| product.id)
            .collect();
        Ok(form.field_items(&product_ids))
    }
}

/// Point of sale. Recording a sale answers with its PDF receipt.
#[OpenApi]
impl SaleApi {
    /// New sale form
    #[oai(path = "/sales/new", method = "get", tag = "ApiTags::Sales")]
    async fn new_sale(&self, session: &Session, product: Query<Option<String>>) -> PageResponse {
        if require_user(session).is_none() {
            return PageResponse::redirect(LOGIN_PATH);
        }

        match self.get_all_products_use_case.execute().await {
            Ok(products) => {
                let selected = product.0.and_then(|id| Uuid::parse_str(id.trim()).ok());
                let context = RequestContext::from_session(session);
                PageResponse::page(new_sale_page(&context, &products, selected))
            }
            Err(err) => {
                report_error(session, err);
                PageResponse::redirect("/products")
            }
        }
    }

    /// Record a sale and download its receipt
    #[oai(path = "/sales", method = "post", tag = "ApiTags::Sales")]
    async fn create(
        &self,
        session: &Session,
        fields: RawForm<HashMap<String, String>>,
    ) -> FileResponse {
        if require_user(session).is_none() {
            return FileResponse::redirect(LOGIN_PATH);
        }

        let form = SaleForm::new(fields.0);
        let items = match self.requested_items(&form).await {
            Ok(items) if !items.is_empty() => items,
            Ok(_) => {
                report_error(session, SaleError::EmptyItems);
                return FileResponse::redirect(NEW_SALE_PATH);
            }
            Err(err) => {
                report_error(session, err);
                return FileResponse::redirect(NEW_SALE_PATH);
            }
        };

        let params = CreateSaleParams {
            customer_name: form.customer_name(),
            customer_id: form.customer_id(),
            items,
        };
        let sale = match self.create_sale_use_case.execute(params).await {
            Ok(sale) => sale,
            Err(err) => {
                report_error(session, err);
                return FileResponse::redirect(NEW_SALE_PATH);
            }
        };
        tracing::info!("Sale {} recorded for {}", sale.id, sale.total);

        let sale_id = sale.id;
        match self.receipt_use_case.execute(SaleReceiptParams { sale }).await {
            Ok(file) => FileResponse::from(file),
            Err(err) => {
                tracing::error!("Receipt for sale {} failed: {:?}", sale_id, err);
                flash_error(
                    session,
                    "The sale was recorded but its receipt could not be generated",
                );
                FileResponse::redirect(NEW_SALE_PATH)
            }
        }
    }
}
