use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Signed;
use uuid::Uuid;

use super::errors::ProductError;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Storage identity, assigned when the product is created.
    pub id: Uuid,
    /// Business key chosen by the user. Unique across the catalog.
    pub code: String,
    pub name: String,
    pub price: BigDecimal,
    pub description: String,
    pub stock: u32,
    /// `/uploads/<file>` for uploaded photos, or a remote URL.
    pub photo: Option<String>,
    /// Revision the document had when it was read. Zero until persisted.
    pub revision: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

pub struct NewProductProps {
    pub code: String,
    pub name: String,
    pub price: BigDecimal,
    pub description: String,
    pub stock: u32,
    pub photo: Option<String>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.code.trim().is_empty()
            || props.name.trim().is_empty()
            || props.description.trim().is_empty()
        {
            return Err(ProductError::FieldsRequired);
        }

        if props.price.is_negative() {
            return Err(ProductError::InvalidPrice);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            code: props.code.trim().to_string(),
            name: props.name.trim().to_string(),
            price: props.price,
            description: props.description.trim().to_string(),
            stock: props.stock,
            photo: props.photo,
            revision: 0,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        code: String,
        name: String,
        price: BigDecimal,
        description: String,
        stock: u32,
        photo: Option<String>,
        revision: i32,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            code,
            name,
            price,
            description,
            stock,
            photo,
            revision,
            created_at,
            updated_at,
        }
    }

    /// Removes `quantity` units from stock and returns what is left.
    ///
    /// Returns `None` and leaves the product untouched when there is not
    /// enough stock.
    pub fn take_stock(&mut self, quantity: u32) -> Option<u32> {
        let remaining = self.stock.checked_sub(quantity)?;
        self.stock = remaining;
        Some(remaining)
    }

    /// Value of the units on hand at the current price.
    pub fn stock_value(&self) -> BigDecimal {
        &self.price * BigDecimal::from(self.stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn props() -> NewProductProps {
        NewProductProps {
            code: "P1".to_string(),
            name: "Coffee beans".to_string(),
            price: BigDecimal::from_str("5.00").unwrap(),
            description: "Arabica, 1kg".to_string(),
            stock: 10,
            photo: None,
        }
    }

    #[test]
    fn should_create_product_when_fields_valid() {
        let product = Product::new(props()).unwrap();

        assert_eq!(product.code, "P1");
        assert_eq!(product.stock, 10);
        assert_eq!(product.revision, 0);
        assert!(product.updated_at.is_none());
    }

    #[test]
    fn should_reject_product_when_name_blank() {
        let result = Product::new(NewProductProps {
            name: "  ".to_string(),
            ..props()
        });

        assert!(matches!(result, Err(ProductError::FieldsRequired)));
    }

    #[test]
    fn should_reject_product_when_price_negative() {
        let result = Product::new(NewProductProps {
            price: BigDecimal::from(-1),
            ..props()
        });

        assert!(matches!(result, Err(ProductError::InvalidPrice)));
    }

    #[test]
    fn should_take_stock_when_enough_units() {
        let mut product = Product::new(props()).unwrap();

        assert_eq!(product.take_stock(3), Some(7));
        assert_eq!(product.stock, 7);
    }

    #[test]
    fn should_take_all_units() {
        let mut product = Product::new(props()).unwrap();

        assert_eq!(product.take_stock(10), Some(0));
    }

    #[test]
    fn should_leave_stock_untouched_when_not_enough_units() {
        let mut product = Product::new(props()).unwrap();

        assert_eq!(product.take_stock(11), None);
        assert_eq!(product.stock, 10);
    }

    #[test]
    fn should_compute_stock_value() {
        let product = Product::new(props()).unwrap();

        assert_eq!(product.stock_value(), BigDecimal::from(50));
    }
}
