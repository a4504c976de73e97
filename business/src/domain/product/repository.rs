use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    /// Stores a new product and returns it with its first revision.
    async fn insert(&self, product: &Product) -> Result<Product, RepositoryError>;
    /// Overwrites a product if its revision is still current.
    async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn delete(&self, product: &Product) -> Result<(), RepositoryError>;
}
