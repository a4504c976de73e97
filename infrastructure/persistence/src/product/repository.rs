use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::{PRODUCT_TYPE, ProductDocument};
use crate::db::Collections;
use crate::document::{self, StoredDocument, ViewLookup, repository_error, view_lookup};

pub struct ProductRepositoryPostgres {
    pool: PgPool,
    collections: Collections,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool, collections: Collections) -> Self {
        Self { pool, collections }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let viewed = document::fetch_all(&self.pool, &self.collections.products_all).await;
        let rows: Vec<StoredDocument<ProductDocument>> = match view_lookup(viewed)? {
            ViewLookup::Found(rows) => rows,
            ViewLookup::Missing => {
                tracing::warn!(
                    "View {} is missing, scanning {}",
                    self.collections.products_all,
                    self.collections.products
                );
                document::find_by_fields(&self.pool, &self.collections.products, PRODUCT_TYPE, &[])
                    .await
                    .map_err(repository_error)?
            }
        };

        Ok(rows.into_iter().map(StoredDocument::into_product).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        document::fetch_one::<ProductDocument, _>(&self.pool, &self.collections.products, id)
            .await
            .map_err(repository_error)?
            .filter(|row| row.doc.doc_type == PRODUCT_TYPE)
            .map(StoredDocument::into_product)
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, product: &Product) -> Result<Product, RepositoryError> {
        let rev = document::insert(
            &self.pool,
            &self.collections.products,
            product.id,
            product.created_at,
            &ProductDocument::from_domain(product),
        )
        .await
        .map_err(repository_error)?;

        Ok(Product {
            revision: rev,
            ..product.clone()
        })
    }

    async fn update(&self, product: &Product) -> Result<Product, RepositoryError> {
        let rev = document::update(
            &self.pool,
            &self.collections.products,
            product.id,
            product.revision,
            &ProductDocument::from_domain(product),
        )
        .await
        .map_err(repository_error)?
        .ok_or(RepositoryError::Conflict)?;

        Ok(Product {
            revision: rev,
            ..product.clone()
        })
    }

    async fn delete(&self, product: &Product) -> Result<(), RepositoryError> {
        let deleted = document::delete(
            &self.pool,
            &self.collections.products,
            product.id,
            product.revision,
        )
        .await
        .map_err(repository_error)?;

        if deleted {
            Ok(())
        } else {
            Err(RepositoryError::Conflict)
        }
    }
}
