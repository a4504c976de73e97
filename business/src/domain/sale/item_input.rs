//! Sale forms can describe their items in two ways: a hidden `items` field
//! holding a JSON list, or one quantity input and one checkbox per product.
//! Both are reduced to the same list of [`SaleItemRequest`]s.

use std::collections::HashMap;

use serde_json::Value;
use uuid::Uuid;

use super::model::SaleItemRequest;

pub const ITEMS_FIELD: &str = "items";
pub const QUANTITY_FIELD_PREFIX: &str = "qty-";
pub const SELECTED_FIELD_PREFIX: &str = "sel-";

pub trait SaleItemSource {
    /// Normalized requests. Empty when the source carried nothing usable.
    fn items(&self) -> Vec<SaleItemRequest>;
}

/// Hidden `items` field with `[{"_id": "<uuid>", "quantity": 3}, ...]`.
///
/// Entries with an unknown id format or a quantity that is not a positive
/// integer are dropped. Malformed JSON yields nothing.
pub struct StructuredItems<'a> {
    pub raw: Option<&'a str>,
}

impl SaleItemSource for StructuredItems<'_> {
    fn items(&self) -> Vec<SaleItemRequest> {
        let Some(raw) = self.raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Vec::new();
        };

        let Ok(Value::Array(entries)) = serde_json::from_str::<Value>(raw) else {
            return Vec::new();
        };

        entries
            .iter()
            .filter_map(|entry| {
                let product_id = entry
                    .get("_id")
                    .and_then(Value::as_str)
                    .and_then(|id| Uuid::parse_str(id.trim()).ok())?;
                let quantity = entry.get("quantity").and_then(positive_quantity)?;
                Some(SaleItemRequest {
                    product_id,
                    quantity,
                })
            })
            .collect()
    }
}

/// Per-product `qty-<id>` inputs and `sel-<id>` checkboxes.
///
/// A positive quantity wins; a checked box without one means a single unit.
pub struct FormFieldItems<'a> {
    pub fields: &'a HashMap<String, String>,
    pub product_ids: &'a [Uuid],
}

impl SaleItemSource for FormFieldItems<'_> {
    fn items(&self) -> Vec<SaleItemRequest> {
        self.product_ids
            .iter()
            .filter_map(|&product_id| {
                let quantity = self
                    .fields
                    .get(&format!("{QUANTITY_FIELD_PREFIX}{product_id}"))
                    .and_then(|qty| parse_quantity(qty));
                let selected = self
                    .fields
                    .contains_key(&format!("{SELECTED_FIELD_PREFIX}{product_id}"));

                match (quantity, selected) {
                    (Some(quantity), _) => Some(SaleItemRequest {
                        product_id,
                        quantity,
                    }),
                    (None, true) => Some(SaleItemRequest {
                        product_id,
                        quantity: 1,
                    }),
                    (None, false) => None,
                }
            })
            .collect()
    }
}

fn positive_quantity(value: &Value) -> Option<u32> {
    match value {
        Value::Number(number) => number
            .as_u64()
            .and_then(|q| u32::try_from(q).ok())
            .filter(|q| *q > 0),
        Value::String(text) => parse_quantity(text),
        _ => None,
    }
}

fn parse_quantity(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|q| *q > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    #[test]
    fn should_read_structured_items_in_order() {
        let raw = format!(
            r#"[{{"_id":"{}","quantity":3}},{{"_id":"{}","quantity":"2"}}]"#,
            id(1),
            id(2)
        );

        let items = StructuredItems { raw: Some(&raw) }.items();

        assert_eq!(
            items,
            vec![
                SaleItemRequest {
                    product_id: id(1),
                    quantity: 3
                },
                SaleItemRequest {
                    product_id: id(2),
                    quantity: 2
                },
            ]
        );
    }

    #[test]
    fn should_drop_structured_entries_with_invalid_quantity_or_id() {
        let raw = format!(
            r#"[{{"_id":"{}","quantity":0}},{{"_id":"{}","quantity":"abc"}},{{"_id":"nope","quantity":1}},{{"_id":"{}","quantity":-4}},{{"_id":"{}","quantity":5}}]"#,
            id(1),
            id(2),
            id(3),
            id(4)
        );

        let items = StructuredItems { raw: Some(&raw) }.items();

        assert_eq!(
            items,
            vec![SaleItemRequest {
                product_id: id(4),
                quantity: 5
            }]
        );
    }

    #[test]
    fn should_yield_nothing_for_malformed_or_missing_json() {
        assert!(StructuredItems { raw: None }.items().is_empty());
        assert!(StructuredItems { raw: Some("  ") }.items().is_empty());
        assert!(StructuredItems { raw: Some("{not json") }.items().is_empty());
        assert!(StructuredItems { raw: Some(r#"{"_id":"x"}"#) }.items().is_empty());
    }

    #[test]
    fn should_default_checked_product_to_one_unit() {
        let mut fields = HashMap::new();
        fields.insert(format!("sel-{}", id(1)), "on".to_string());
        fields.insert(format!("qty-{}", id(1)), "abc".to_string());
        fields.insert(format!("qty-{}", id(2)), "4".to_string());
        fields.insert(format!("qty-{}", id(3)), "0".to_string());
        let product_ids = [id(1), id(2), id(3)];

        let items = FormFieldItems {
            fields: &fields,
            product_ids: &product_ids,
        }
        .items();

        assert_eq!(
            items,
            vec![
                SaleItemRequest {
                    product_id: id(1),
                    quantity: 1
                },
                SaleItemRequest {
                    product_id: id(2),
                    quantity: 4
                },
            ]
        );
    }

    #[test]
    fn should_ignore_fields_of_products_outside_the_catalog() {
        let mut fields = HashMap::new();
        fields.insert(format!("qty-{}", id(9)), "2".to_string());
        let product_ids = [id(1)];

        let items = FormFieldItems {
            fields: &fields,
            product_ids: &product_ids,
        }
        .items();

        assert!(items.is_empty());
    }
}
