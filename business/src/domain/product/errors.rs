#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.fields_required")]
    FieldsRequired,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.invalid_stock")]
    InvalidStock,
    #[error("product.code_duplicated")]
    DuplicatedCode,
    #[error("product.not_found")]
    NotFound,
    #[error("product.photo_invalid_type")]
    PhotoInvalidType,
    #[error("product.photo_too_large")]
    PhotoTooLarge,
    #[error("product.photo_storage_failed")]
    PhotoStorageFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
