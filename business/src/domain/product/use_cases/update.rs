use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::photo::PhotoUpload;

/// Fields left as `None` keep their stored value.
pub struct UpdateProductParams {
    pub id: Uuid,
    pub code: Option<String>,
    pub name: Option<String>,
    pub price: Option<BigDecimal>,
    pub description: Option<String>,
    pub stock: Option<u32>,
    pub photo: Option<PhotoUpload>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
