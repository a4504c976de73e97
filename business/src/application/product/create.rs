use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::PhotoStorage;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub photo_storage: Arc<dyn PhotoStorage>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.code));

        let mut product = Product::new(NewProductProps {
            code: params.code,
            name: params.name,
            price: params.price,
            description: params.description,
            stock: params.stock,
            photo: None,
        })?;

        // Business codes are unique, checked against the whole catalog
        let existing = self.repository.get_all().await?;
        if existing.iter().any(|p| p.code == product.code) {
            return Err(ProductError::DuplicatedCode);
        }

        if let Some(upload) = params.photo {
            let file_name = upload.stored_file_name(Utc::now());
            product.photo = Some(self.photo_storage.store(&upload, &file_name).await?);
        }

        match self.repository.insert(&product).await {
            Ok(saved) => {
                self.logger
                    .info(&format!("Product created with id: {}", saved.id));
                Ok(saved)
            }
            Err(err) => {
                if let Some(photo) = &product.photo
                    && let Err(e) = self.photo_storage.remove(photo).await
                {
                    self.logger
                        .warn(&format!("Failed to remove orphan photo {}: {}", photo, e));
                }
                Err(err.into())
            }
        }
    }
}
