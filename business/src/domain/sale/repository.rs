use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::product::model::Product;

use super::model::{CustomerFilter, Sale};

#[async_trait]
pub trait SaleRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Sale>, RepositoryError>;
    async fn find_by_customer(&self, filter: &CustomerFilter) -> Result<Vec<Sale>, RepositoryError>;
    /// Writes the sale and the stock of every touched product atomically.
    ///
    /// Each product is written only if its revision is still the one it was
    /// read with; otherwise nothing is written and `Conflict` is returned.
    async fn record(&self, sale: &Sale, products: &[Product]) -> Result<Sale, RepositoryError>;
}
