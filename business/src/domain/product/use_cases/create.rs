use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::photo::PhotoUpload;

pub struct CreateProductParams {
    pub code: String,
    pub name: String,
    pub price: BigDecimal,
    pub description: String,
    pub stock: u32,
    pub photo: Option<PhotoUpload>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
