use std::sync::Arc;

use poem::session::Session;
use poem_openapi::{OpenApi, param::Path};
use uuid::Uuid;

use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::UpdateProductUseCase;

use crate::api::context::{LOGIN_PATH, RequestContext, flash_success, require_user};
use crate::api::error::{ErrorKind, report_error};
use crate::api::product::dto::ProductForm;
use crate::api::product::pages::{product_form_page, product_list_page};
use crate::api::response::PageResponse;
use crate::api::tags::ApiTags;

const PRODUCTS_PATH: &str = "/products";
const ADD_PRODUCT_PATH: &str = "/products/add";

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn edit_path(id: &str) -> String {
    format!("/products/edit/{}", id)
}

/// Storage ids come from our own links; anything else cannot name a product.
fn parse_id(session: &Session, raw: &str) -> Option<Uuid> {
    let id = Uuid::parse_str(raw).ok();
    if id.is_none() {
        report_error(session, ProductError::NotFound);
    }
    id
}

/// Product catalog pages. All of them require a logged in user.
#[OpenApi]
impl ProductApi {
    /// Product list
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn list(&self, session: &Session) -> PageResponse {
        if require_user(session).is_none() {
            return PageResponse::redirect(LOGIN_PATH);
        }

        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let context = RequestContext::from_session(session);
                PageResponse::page(product_list_page(&context, &products))
            }
            Err(err) => {
                report_error(session, err);
                PageResponse::redirect("/")
            }
        }
    }

    /// Product registration form
    #[oai(path = "/products/add", method = "get", tag = "ApiTags::Products")]
    async fn add_form(&self, session: &Session) -> PageResponse {
        if require_user(session).is_none() {
            return PageResponse::redirect(LOGIN_PATH);
        }
        let context = RequestContext::from_session(session);
        PageResponse::page(product_form_page(&context, None))
    }

    /// Register a product
    #[oai(path = "/products/add", method = "post", tag = "ApiTags::Products")]
    async fn add(&self, session: &Session, form: ProductForm) -> PageResponse {
        if require_user(session).is_none() {
            return PageResponse::redirect(LOGIN_PATH);
        }

        let result = match form.into_create_params().await {
            Ok(params) => self.create_use_case.execute(params).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(product) => {
                tracing::info!("Product {} registered", product.code);
                flash_success(session, "Product registered");
                PageResponse::redirect(PRODUCTS_PATH)
            }
            Err(err) => {
                report_error(session, err);
                PageResponse::redirect(ADD_PRODUCT_PATH)
            }
        }
    }

    /// Product edit form
    #[oai(path = "/products/edit/:id", method = "get", tag = "ApiTags::Products")]
    async fn edit_form(&self, session: &Session, id: Path<String>) -> PageResponse {
        if require_user(session).is_none() {
            return PageResponse::redirect(LOGIN_PATH);
        }
        let Some(id) = parse_id(session, &id.0) else {
            return PageResponse::redirect(PRODUCTS_PATH);
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => {
                let context = RequestContext::from_session(session);
                PageResponse::page(product_form_page(&context, Some(&product)))
            }
            Err(err) => {
                report_error(session, err);
                PageResponse::redirect(PRODUCTS_PATH)
            }
        }
    }

    /// Update a product
    ///
    /// Blank fields keep their stored value; the photo is replaced only when
    /// a new one is uploaded.
    #[oai(path = "/products/edit/:id", method = "post", tag = "ApiTags::Products")]
    async fn edit(&self, session: &Session, id: Path<String>, form: ProductForm) -> PageResponse {
        if require_user(session).is_none() {
            return PageResponse::redirect(LOGIN_PATH);
        }
        let Some(product_id) = parse_id(session, &id.0) else {
            return PageResponse::redirect(PRODUCTS_PATH);
        };

        let result = match form.into_update_params(product_id).await {
            Ok(params) => self.update_use_case.execute(params).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(product) => {
                tracing::info!("Product {} updated", product.code);
                flash_success(session, "Product updated");
                PageResponse::redirect(PRODUCTS_PATH)
            }
            Err(err) => match report_error(session, err) {
                ErrorKind::NotFound => PageResponse::redirect(PRODUCTS_PATH),
                _ => PageResponse::redirect(edit_path(&id.0)),
            },
        }
    }

    /// Delete a product and its photo
    #[oai(path = "/products/delete/:id", method = "get", tag = "ApiTags::Products")]
    async fn delete(&self, session: &Session, id: Path<String>) -> PageResponse {
        if require_user(session).is_none() {
            return PageResponse::redirect(LOGIN_PATH);
        }
        let Some(id) = parse_id(session, &id.0) else {
            return PageResponse::redirect(PRODUCTS_PATH);
        };

        match self.delete_use_case.execute(DeleteProductParams { id }).await {
            Ok(()) => flash_success(session, "Product deleted"),
            Err(err) => {
                report_error(session, err);
            }
        }
        PageResponse::redirect(PRODUCTS_PATH)
    }
}
