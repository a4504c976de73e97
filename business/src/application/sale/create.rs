use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::{Sale, SaleLineItem};
use crate::domain::sale::repository::SaleRepository;
use crate::domain::sale::use_cases::create::{CreateSaleParams, CreateSaleUseCase};
use crate::domain::shared::value_objects::format_money;

pub struct CreateSaleUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub sale_repository: Arc<dyn SaleRepository>,
    pub logger: Arc<dyn Logger>,
}

impl CreateSaleUseCaseImpl {
    /// Index of the product in the working set, loading it on first use so
    /// later lines see the stock already taken by earlier ones.
    async fn touch(
        &self,
        working_set: &mut Vec<Product>,
        product_id: uuid::Uuid,
    ) -> Result<usize, SaleError> {
        if let Some(index) = working_set.iter().position(|p| p.id == product_id) {
            return Ok(index);
        }

        let product = self
            .product_repository
            .get_by_id(product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => SaleError::ProductNotFound(product_id),
                other => SaleError::Repository(other),
            })?;
        working_set.push(product);
        Ok(working_set.len() - 1)
    }
}

#[async_trait]
impl CreateSaleUseCase for CreateSaleUseCaseImpl {
    async fn execute(&self, params: CreateSaleParams) -> Result<Sale, SaleError> {
        if params.items.is_empty() || params.items.iter().any(|item| item.quantity == 0) {
            return Err(SaleError::EmptyItems);
        }

        self.logger.info(&format!(
            "Creating sale with {} item(s) for customer {:?}",
            params.items.len(),
            params.customer_name.as_deref().or(params.customer_id.as_deref())
        ));

        let mut working_set: Vec<Product> = Vec::new();
        let mut lines = Vec::with_capacity(params.items.len());

        for request in &params.items {
            let index = self.touch(&mut working_set, request.product_id).await?;
            let product = &mut working_set[index];

            let line = SaleLineItem::from_product(product, request.quantity);
            if product.take_stock(request.quantity).is_none() {
                self.logger.warn(&format!(
                    "Insufficient stock for product {}: requested {}, available {}",
                    product.id, request.quantity, product.stock
                ));
                return Err(SaleError::InsufficientStock {
                    product_id: product.id,
                    name: product.name.clone(),
                });
            }
            lines.push(line);
        }

        let sale = Sale::new(params.customer_name, params.customer_id, lines)?;

        match self.sale_repository.record(&sale, &working_set).await {
            Ok(saved) => {
                self.logger.info(&format!(
                    "Sale recorded with id: {} (total {})",
                    saved.id,
                    format_money(&saved.total)
                ));
                Ok(saved)
            }
            Err(RepositoryError::Conflict) => {
                self.logger
                    .warn("Sale aborted: a product changed while it was being sold");
                Err(SaleError::StorageConflict)
            }
            Err(e) => {
                self.logger.error(&format!("Failed to record sale: {}", e));
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sale::model::{CustomerFilter, SaleItemRequest};
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use mockall::mock;
    use proptest::prelude::*;
    use std::collections::HashMap;
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
        pub SaleRepo {}

        #[async_trait]
        impl SaleRepository for SaleRepo {
            async fn get_all(&self) -> Result<Vec<Sale>, RepositoryError>;
            async fn find_by_customer(&self, filter: &CustomerFilter) -> Result<Vec<Sale>, RepositoryError>;
            async fn record(&self, sale: &Sale, products: &[Product]) -> Result<Sale, RepositoryError>;
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

    fn product(id: Uuid, code: &str, price: &str, stock: u32) -> Product {
        Product::from_repository(
            id,
            code.to_string(),
            format!("Product {}", code),
            BigDecimal::from_str(price).unwrap(),
            "Description".to_string(),
            stock,
            None,
            4,
            Utc::now(),
            None,
        )
    }

    fn catalog_repo(catalog: Vec<Product>) -> MockProductRepo {
        let by_id: HashMap<Uuid, Product> = catalog.into_iter().map(|p| (p.id, p)).collect();
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().returning(move |id| {
            by_id.get(&id).cloned().ok_or(RepositoryError::NotFound)
        });
        repo
    }

    fn recording_sale_repo() -> MockSaleRepo {
        let mut repo = MockSaleRepo::new();
        repo.expect_record().returning(|sale, _| Ok(sale.clone()));
        repo
    }

    fn params(items: Vec<SaleItemRequest>) -> CreateSaleParams {
        CreateSaleParams {
            customer_name: Some("Ana".to_string()),
            customer_id: Some("C-1".to_string()),
            items,
        }
    }

    #[tokio::test]
    async fn should_price_line_and_decrement_stock() {
        let p1 = Uuid::new_v4();
        let mut sale_repo = MockSaleRepo::new();
        sale_repo
            .expect_record()
            .withf(move |_, products| {
                products.len() == 1 && products[0].id == p1 && products[0].stock == 7
            })
            .times(1)
            .returning(|sale, _| Ok(sale.clone()));

        let use_case = CreateSaleUseCaseImpl {
            product_repository: Arc::new(catalog_repo(vec![product(p1, "P1", "5.00", 10)])),
            sale_repository: Arc::new(sale_repo),
            logger: mock_logger(),
        };

        let sale = use_case
            .execute(params(vec![SaleItemRequest {
                product_id: p1,
                quantity: 3,
            }]))
            .await
            .unwrap();

        assert_eq!(sale.items.len(), 1);
        assert_eq!(sale.items[0].unit_price, BigDecimal::from_str("5.00").unwrap());
        assert_eq!(sale.items[0].quantity, 3);
        assert_eq!(sale.items[0].subtotal, BigDecimal::from_str("15.00").unwrap());
        assert_eq!(sale.total, BigDecimal::from_str("15.00").unwrap());
        assert_eq!(format_money(&sale.total), "15.00");
    }

    #[tokio::test]
    async fn should_reject_insufficient_stock_without_writing() {
        let p1 = Uuid::new_v4();
        let p2 = Uuid::new_v4();
        let mut sale_repo = MockSaleRepo::new();
        sale_repo.expect_record().never();

        let use_case = CreateSaleUseCaseImpl {
            product_repository: Arc::new(catalog_repo(vec![
                product(p1, "P1", "5.00", 10),
                product(p2, "P2", "2.00", 1),
            ])),
            sale_repository: Arc::new(sale_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(vec![
                SaleItemRequest {
                    product_id: p1,
                    quantity: 2,
                },
                SaleItemRequest {
                    product_id: p2,
                    quantity: 5,
                },
            ]))
            .await;

        match result {
            Err(SaleError::InsufficientStock { product_id, name }) => {
                assert_eq!(product_id, p2);
                assert_eq!(name, "Product P2");
            }
            other => panic!("expected insufficient stock, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_see_earlier_decrements_of_repeated_product() {
        let p1 = Uuid::new_v4();
        let mut sale_repo = MockSaleRepo::new();
        sale_repo.expect_record().never();

        let use_case = CreateSaleUseCaseImpl {
            product_repository: Arc::new(catalog_repo(vec![product(p1, "P1", "1.00", 5)])),
            sale_repository: Arc::new(sale_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(vec![
                SaleItemRequest {
                    product_id: p1,
                    quantity: 3,
                },
                SaleItemRequest {
                    product_id: p1,
                    quantity: 3,
                },
            ]))
            .await;

        assert!(matches!(result, Err(SaleError::InsufficientStock { .. })));
    }

    #[tokio::test]
    async fn should_write_repeated_product_once_with_combined_decrement() {
        let p1 = Uuid::new_v4();
        let mut sale_repo = MockSaleRepo::new();
        sale_repo
            .expect_record()
            .withf(|sale, products| {
                sale.items.len() == 2 && products.len() == 1 && products[0].stock == 1
            })
            .returning(|sale, _| Ok(sale.clone()));

        let use_case = CreateSaleUseCaseImpl {
            product_repository: Arc::new(catalog_repo(vec![product(p1, "P1", "1.00", 5)])),
            sale_repository: Arc::new(sale_repo),
            logger: mock_logger(),
        };

        let sale = use_case
            .execute(params(vec![
                SaleItemRequest {
                    product_id: p1,
                    quantity: 3,
                },
                SaleItemRequest {
                    product_id: p1,
                    quantity: 1,
                },
            ]))
            .await
            .unwrap();

        assert_eq!(sale.total, BigDecimal::from(4));
    }

    #[tokio::test]
    async fn should_return_product_not_found() {
        let missing = Uuid::new_v4();
        let use_case = CreateSaleUseCaseImpl {
            product_repository: Arc::new(catalog_repo(vec![])),
            sale_repository: Arc::new(MockSaleRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(vec![SaleItemRequest {
                product_id: missing,
                quantity: 1,
            }]))
            .await;

        assert!(matches!(result, Err(SaleError::ProductNotFound(id)) if id == missing));
    }

    #[tokio::test]
    async fn should_reject_empty_items() {
        let use_case = CreateSaleUseCaseImpl {
            product_repository: Arc::new(MockProductRepo::new()),
            sale_repository: Arc::new(MockSaleRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(vec![])).await;

        assert!(matches!(result, Err(SaleError::EmptyItems)));
    }

    #[tokio::test]
    async fn should_surface_revision_conflict() {
        let p1 = Uuid::new_v4();
        let mut sale_repo = MockSaleRepo::new();
        sale_repo
            .expect_record()
            .returning(|_, _| Err(RepositoryError::Conflict));

        let use_case = CreateSaleUseCaseImpl {
            product_repository: Arc::new(catalog_repo(vec![product(p1, "P1", "5.00", 10)])),
            sale_repository: Arc::new(sale_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(vec![SaleItemRequest {
                product_id: p1,
                quantity: 1,
            }]))
            .await;

        assert!(matches!(result, Err(SaleError::StorageConflict)));
    }

    proptest! {
        #[test]
        fn should_total_every_line_at_current_prices(
            lines in prop::collection::vec((0u32..100_000, 1u32..20), 1..8)
        ) {
            let catalog: Vec<Product> = lines
                .iter()
                .enumerate()
                .map(|(i, (cents, _))| {
                    let price = BigDecimal::new((*cents).into(), 2);
                    let mut p = product(Uuid::new_v4(), &format!("P{}", i), "0", 1_000);
                    p.price = price;
                    p
                })
                .collect();
            let items: Vec<SaleItemRequest> = catalog
                .iter()
                .zip(&lines)
                .map(|(p, (_, quantity))| SaleItemRequest { product_id: p.id, quantity: *quantity })
                .collect();
            let expected: BigDecimal = catalog
                .iter()
                .zip(&lines)
                .map(|(p, (_, quantity))| &p.price * BigDecimal::from(*quantity))
                .fold(BigDecimal::from(0), |acc, subtotal| acc + subtotal);

            let use_case = CreateSaleUseCaseImpl {
                product_repository: Arc::new(catalog_repo(catalog.clone())),
                sale_repository: Arc::new(recording_sale_repo()),
                logger: mock_logger(),
            };

            let rt = tokio::runtime::Runtime::new().unwrap();
            let sale = rt.block_on(use_case.execute(params(items))).unwrap();

            prop_assert_eq!(&sale.total, &expected);
            for (line, (_, quantity)) in sale.items.iter().zip(&lines) {
                prop_assert_eq!(&line.subtotal, &(&line.unit_price * BigDecimal::from(*quantity)));
            }
        }
    }
}
