use uuid::Uuid;

use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum SaleError {
    #[error("sale.items_required")]
    EmptyItems,
    #[error("sale.product_not_found")]
    ProductNotFound(Uuid),
    #[error("sale.insufficient_stock")]
    InsufficientStock { product_id: Uuid, name: String },
    /// A touched product was modified by someone else while the sale was
    /// being recorded. Nothing was written.
    #[error("sale.storage_conflict")]
    StorageConflict,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
