use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::sale::model::{CustomerFilter, Sale};
use business::domain::sale::repository::SaleRepository;

use super::entity::{SALE_TYPE, SaleDocument};
use crate::db::Collections;
use crate::document::{self, StoredDocument, repository_error};
use crate::product::entity::ProductDocument;

pub struct SaleRepositoryPostgres {
    pool: PgPool,
    collections: Collections,
}

impl SaleRepositoryPostgres {
    pub fn new(pool: PgPool, collections: Collections) -> Self {
        Self { pool, collections }
    }
}

#[async_trait]
impl SaleRepository for SaleRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Sale>, RepositoryError> {
        self.find_by_customer(&CustomerFilter::default()).await
    }

    async fn find_by_customer(&self, filter: &CustomerFilter) -> Result<Vec<Sale>, RepositoryError> {
        let rows: Vec<StoredDocument<SaleDocument>> = document::find_by_fields(
            &self.pool,
            &self.collections.sales,
            SALE_TYPE,
            &[
                ("customerId", filter.customer_id.as_deref()),
                ("customerName", filter.customer_name.as_deref()),
            ],
        )
        .await
        .map_err(repository_error)?;

        Ok(rows.into_iter().map(StoredDocument::into_sale).collect())
    }

    async fn record(&self, sale: &Sale, products: &[Product]) -> Result<Sale, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(repository_error)?;

        for product in products {
            let written = document::update(
                &mut *tx,
                &self.collections.products,
                product.id,
                product.revision,
                &ProductDocument::from_domain(product),
            )
            .await
            .map_err(repository_error)?;

            if written.is_none() {
                // Dropping the transaction rolls back the products already written
                tracing::warn!(
                    "Product {} changed while sale {} was being recorded",
                    product.id,
                    sale.id
                );
                return Err(RepositoryError::Conflict);
            }
        }

        document::insert(
            &mut *tx,
            &self.collections.sales,
            sale.id,
            sale.created_at,
            &SaleDocument::from_domain(sale),
        )
        .await
        .map_err(repository_error)?;

        tx.commit().await.map_err(repository_error)?;
        Ok(sale.clone())
    }
}
