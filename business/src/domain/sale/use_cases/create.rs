use async_trait::async_trait;

use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::{Sale, SaleItemRequest};

pub struct CreateSaleParams {
    pub customer_name: Option<String>,
    pub customer_id: Option<String>,
    pub items: Vec<SaleItemRequest>,
}

#[async_trait]
pub trait CreateSaleUseCase: Send + Sync {
    async fn execute(&self, params: CreateSaleParams) -> Result<Sale, SaleError>;
}
