use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use num_traits::Signed;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::PhotoStorage;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::shared::value_objects::non_blank;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub photo_storage: Arc<dyn PhotoStorage>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateProductUseCaseImpl {
    async fn discard_photo(&self, photo: &str, reason: &str) {
        if let Err(e) = self.photo_storage.remove(photo).await {
            self.logger
                .warn(&format!("Failed to remove {} photo {}: {}", reason, photo, e));
        }
    }
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let mut product = existing.clone();

        if let Some(code) = non_blank(params.code)
            && code != existing.code
        {
            let catalog = self.repository.get_all().await?;
            if catalog
                .iter()
                .any(|p| p.id != existing.id && p.code == code)
            {
                return Err(ProductError::DuplicatedCode);
            }
            product.code = code;
        }
        if let Some(name) = non_blank(params.name) {
            product.name = name;
        }
        if let Some(description) = non_blank(params.description) {
            product.description = description;
        }
        if let Some(price) = params.price {
            if price.is_negative() {
                return Err(ProductError::InvalidPrice);
            }
            product.price = price;
        }
        if let Some(stock) = params.stock {
            product.stock = stock;
        }

        let mut new_photo = None;
        if let Some(upload) = params.photo {
            let file_name = upload.stored_file_name(Utc::now());
            let photo_ref = self.photo_storage.store(&upload, &file_name).await?;
            product.photo = Some(photo_ref.clone());
            new_photo = Some(photo_ref);
        }
        product.updated_at = Some(Utc::now());

        match self.repository.update(&product).await {
            Ok(saved) => {
                if new_photo.is_some()
                    && let Some(previous) = &existing.photo
                {
                    self.discard_photo(previous, "replaced").await;
                }
                self.logger
                    .info(&format!("Product updated: {}", saved.id));
                Ok(saved)
            }
            Err(err) => {
                if let Some(photo) = &new_photo {
                    self.discard_photo(photo, "orphan").await;
                }
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::photo::PhotoUpload;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use std::str::FromStr;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn insert(&self, product: &Product) -> Result<Product, RepositoryError>;
            async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
            async fn delete(&self, product: &Product) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Storage {}

        #[async_trait]
        impl PhotoStorage for Storage {
            async fn store(&self, photo: &PhotoUpload, file_name: &str) -> Result<String, ProductError>;
            async fn remove(&self, photo_ref: &str) -> Result<(), ProductError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn stored_product(id: Uuid, code: &str, photo: Option<&str>) -> Product {
        Product::from_repository(
            id,
            code.to_string(),
            "Olive oil".to_string(),
            BigDecimal::from_str("7.50").unwrap(),
            "Extra virgin, 750ml".to_string(),
            12,
            photo.map(|p| p.to_string()),
            3,
            Utc::now(),
            None,
        )
    }

    fn params(id: Uuid) -> UpdateProductParams {
        UpdateProductParams {
            id,
            code: None,
            name: None,
            price: None,
            description: None,
            stock: None,
            photo: None,
        }
    }

    fn upload() -> PhotoUpload {
        PhotoUpload::new("bottle.jpg".to_string(), "image/jpeg".to_string(), vec![1, 2, 3]).unwrap()
    }

    #[tokio::test]
    async fn should_merge_supplied_fields_and_keep_photo() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored_product(id, "OIL-1", Some("/uploads/1-oil.jpg"))));
        mock_repo
            .expect_update()
            .withf(|p| {
                p.stock == 20
                    && p.name == "Olive oil"
                    && p.photo.as_deref() == Some("/uploads/1-oil.jpg")
                    && p.updated_at.is_some()
            })
            .returning(|p| Ok(p.clone()));

        let mut storage = MockStorage::new();
        storage.expect_store().never();
        storage.expect_remove().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            photo_storage: Arc::new(storage),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                stock: Some(20),
                name: Some("   ".to_string()),
                ..params(product_id)
            })
            .await
            .unwrap();

        assert_eq!(result.stock, 20);
        assert_eq!(result.revision, 3);
    }

    #[tokio::test]
    async fn should_replace_photo_and_remove_previous_one() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored_product(id, "OIL-1", Some("/uploads/1-oil.jpg"))));
        mock_repo.expect_update().returning(|p| Ok(p.clone()));

        let mut storage = MockStorage::new();
        storage
            .expect_store()
            .returning(|_, file_name| Ok(format!("/uploads/{}", file_name)));
        storage
            .expect_remove()
            .withf(|photo_ref| photo_ref.ends_with("/uploads/1-oil.jpg"))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            photo_storage: Arc::new(storage),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                photo: Some(upload()),
                ..params(Uuid::new_v4())
            })
            .await
            .unwrap();

        assert!(result.photo.unwrap().ends_with("-bottle.jpg"));
    }

    #[tokio::test]
    async fn should_remove_new_photo_when_update_conflicts() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored_product(id, "OIL-1", Some("/uploads/1-oil.jpg"))));
        mock_repo
            .expect_update()
            .returning(|_| Err(RepositoryError::Conflict));

        let mut storage = MockStorage::new();
        storage
            .expect_store()
            .returning(|_, file_name| Ok(format!("/uploads/{}", file_name)));
        storage
            .expect_remove()
            .withf(|photo_ref| photo_ref.ends_with("-bottle.jpg"))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            photo_storage: Arc::new(storage),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                photo: Some(upload()),
                ..params(Uuid::new_v4())
            })
            .await;

        assert!(matches!(
            result,
            Err(ProductError::Repository(RepositoryError::Conflict))
        ));
    }

    #[tokio::test]
    async fn should_reject_code_used_by_another_product() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored_product(id, "OIL-1", None)));
        mock_repo.expect_get_all().returning(move || {
            Ok(vec![
                stored_product(product_id, "OIL-1", None),
                stored_product(Uuid::new_v4(), "OIL-2", None),
            ])
        });
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            photo_storage: Arc::new(MockStorage::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                code: Some("OIL-2".to_string()),
                ..params(product_id)
            })
            .await;

        assert!(matches!(result, Err(ProductError::DuplicatedCode)));
    }

    #[tokio::test]
    async fn should_reject_negative_price() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored_product(id, "OIL-1", None)));
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            photo_storage: Arc::new(MockStorage::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                price: Some(BigDecimal::from(-1)),
                ..params(Uuid::new_v4())
            })
            .await;

        assert!(matches!(result, Err(ProductError::InvalidPrice)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            photo_storage: Arc::new(MockStorage::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(Uuid::new_v4())).await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }
}
