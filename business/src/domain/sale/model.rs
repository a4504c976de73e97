use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::{non_blank, sum_money};

use super::errors::SaleError;

/// Snapshot of a product at the moment it was sold. Later price or name
/// changes on the product never reach historical sales.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleLineItem {
    pub product_id: Uuid,
    pub code: String,
    pub name: String,
    pub unit_price: BigDecimal,
    pub quantity: u32,
    pub subtotal: BigDecimal,
}

impl SaleLineItem {
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        let unit_price = product.price.clone();
        let subtotal = &unit_price * BigDecimal::from(quantity);
        Self {
            product_id: product.id,
            code: product.code.clone(),
            name: product.name.clone(),
            unit_price,
            quantity,
            subtotal,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub id: Uuid,
    pub customer_name: Option<String>,
    pub customer_id: Option<String>,
    pub items: Vec<SaleLineItem>,
    pub total: BigDecimal,
    pub created_at: DateTime<Utc>,
}

impl Sale {
    pub fn new(
        customer_name: Option<String>,
        customer_id: Option<String>,
        items: Vec<SaleLineItem>,
    ) -> Result<Self, SaleError> {
        if items.is_empty() {
            return Err(SaleError::EmptyItems);
        }

        let total = sum_money(items.iter().map(|item| &item.subtotal));
        Ok(Self {
            id: Uuid::new_v4(),
            customer_name: non_blank(customer_name),
            customer_id: non_blank(customer_id),
            items,
            total,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        customer_name: Option<String>,
        customer_id: Option<String>,
        items: Vec<SaleLineItem>,
        total: BigDecimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer_name,
            customer_id,
            items,
            total,
            created_at,
        }
    }

    /// Units sold across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

/// One normalized `(product, quantity)` request coming from a sale form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleItemRequest {
    pub product_id: Uuid,
    pub quantity: u32,
}

/// Exact-match customer lookup. Every supplied field must match; an empty
/// filter matches all sales.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerFilter {
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
}

impl CustomerFilter {
    pub fn matches(&self, sale: &Sale) -> bool {
        let id_matches = self
            .customer_id
            .as_ref()
            .is_none_or(|id| sale.customer_id.as_ref() == Some(id));
        let name_matches = self
            .customer_name
            .as_ref()
            .is_none_or(|name| sale.customer_name.as_ref() == Some(name));
        id_matches && name_matches
    }
}
