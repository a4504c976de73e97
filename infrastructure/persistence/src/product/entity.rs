use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;

use crate::document::StoredDocument;

pub const PRODUCT_TYPE: &str = "product";

/// JSON body of a product row. `id` is the business code, the row id is the
/// storage identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDocument {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub id: String,
    pub name: String,
    pub price: BigDecimal,
    pub description: String,
    pub stock: u32,
    #[serde(default)]
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProductDocument {
    pub fn from_domain(product: &Product) -> Self {
        Self {
            doc_type: PRODUCT_TYPE.to_string(),
            id: product.code.clone(),
            name: product.name.clone(),
            price: product.price.clone(),
            description: product.description.clone(),
            stock: product.stock,
            photo: product.photo.clone(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

impl StoredDocument<ProductDocument> {
    pub fn into_product(self) -> Product {
        let doc = self.doc;
        Product::from_repository(
            self.id,
            doc.id,
            doc.name,
            doc.price,
            doc.description,
            doc.stock,
            doc.photo,
            self.rev,
            doc.created_at,
            doc.updated_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;
    use uuid::Uuid;

    #[test]
    fn should_tag_document_and_keep_business_code_as_id() {
        let product = Product::from_repository(
            Uuid::new_v4(),
            "P1".to_string(),
            "Coffee beans".to_string(),
            BigDecimal::from_str("5.00").unwrap(),
            "Arabica".to_string(),
            10,
            Some("/uploads/1-beans.png".to_string()),
            3,
            Utc::now(),
            None,
        );

        let value = serde_json::to_value(ProductDocument::from_domain(&product)).unwrap();

        assert_eq!(value["type"], json!("product"));
        assert_eq!(value["id"], json!("P1"));
        assert_eq!(value["photo"], json!("/uploads/1-beans.png"));
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn should_read_document_without_optional_fields() {
        let doc: ProductDocument = serde_json::from_value(json!({
            "type": "product",
            "id": "P2",
            "name": "Tea",
            "price": "2.50",
            "description": "Green",
            "stock": 4,
            "createdAt": "2024-05-01T10:00:00Z"
        }))
        .unwrap();
        let row_id = Uuid::new_v4();

        let product = StoredDocument {
            id: row_id,
            rev: 2,
            doc,
        }
        .into_product();

        assert_eq!(product.id, row_id);
        assert_eq!(product.code, "P2");
        assert_eq!(product.revision, 2);
        assert_eq!(product.photo, None);
        assert_eq!(product.price, BigDecimal::from_str("2.5").unwrap());
    }
}
