use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::sale::model::{Sale, SaleLineItem};

use crate::document::StoredDocument;

pub const SALE_TYPE: &str = "sale";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItemDocument {
    pub product_id: Uuid,
    pub id: String,
    pub name: String,
    pub unit_price: BigDecimal,
    pub quantity: u32,
    pub subtotal: BigDecimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDocument {
    #[serde(rename = "type")]
    pub doc_type: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    pub items: Vec<SaleItemDocument>,
    pub total: BigDecimal,
    pub created_at: DateTime<Utc>,
}

impl SaleDocument {
    pub fn from_domain(sale: &Sale) -> Self {
        Self {
            doc_type: SALE_TYPE.to_string(),
            customer_name: sale.customer_name.clone(),
            customer_id: sale.customer_id.clone(),
            items: sale
                .items
                .iter()
                .map(|item| SaleItemDocument {
                    product_id: item.product_id,
                    id: item.code.clone(),
                    name: item.name.clone(),
                    unit_price: item.unit_price.clone(),
                    quantity: item.quantity,
                    subtotal: item.subtotal.clone(),
                })
                .collect(),
            total: sale.total.clone(),
            created_at: sale.created_at,
        }
    }
}

impl StoredDocument<SaleDocument> {
    pub fn into_sale(self) -> Sale {
        let doc = self.doc;
        let items = doc
            .items
            .into_iter()
            .map(|item| SaleLineItem {
                product_id: item.product_id,
                code: item.id,
                name: item.name,
                unit_price: item.unit_price,
                quantity: item.quantity,
                subtotal: item.subtotal,
            })
            .collect();

        Sale::from_repository(
            self.id,
            doc.customer_name,
            doc.customer_id,
            items,
            doc.total,
            doc.created_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_store_line_snapshots_under_camel_case_keys() {
        let product_id = Uuid::new_v4();
        let sale = Sale::from_repository(
            Uuid::new_v4(),
            Some("Ana".to_string()),
            None,
            vec![SaleLineItem {
                product_id,
                code: "P1".to_string(),
                name: "Coffee beans".to_string(),
                unit_price: BigDecimal::from(5),
                quantity: 3,
                subtotal: BigDecimal::from(15),
            }],
            BigDecimal::from(15),
            Utc::now(),
        );

        let value = serde_json::to_value(SaleDocument::from_domain(&sale)).unwrap();

        assert_eq!(value["type"], json!("sale"));
        assert_eq!(value["customerName"], json!("Ana"));
        assert_eq!(value["customerId"], json!(null));
        assert_eq!(value["items"][0]["productId"], json!(product_id.to_string()));
        assert_eq!(value["items"][0]["id"], json!("P1"));
        assert_eq!(value["items"][0]["quantity"], json!(3));
    }
}
