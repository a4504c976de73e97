use std::collections::HashMap;

use uuid::Uuid;

use business::domain::sale::item_input::{
    FormFieldItems, ITEMS_FIELD, SaleItemSource, StructuredItems,
};
use business::domain::sale::model::SaleItemRequest;
use business::domain::shared::value_objects::non_blank;

pub const CUSTOMER_NAME_FIELD: &str = "customerName";
pub const CUSTOMER_ID_FIELD: &str = "customerId";

/// Raw fields of the new sale form. Product inputs are named after product
/// ids, so the field set is not known in advance.
pub struct SaleForm {
    fields: HashMap<String, String>,
}

impl SaleForm {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn customer_name(&self) -> Option<String> {
        non_blank(self.fields.get(CUSTOMER_NAME_FIELD).cloned())
    }

    pub fn customer_id(&self) -> Option<String> {
        non_blank(self.fields.get(CUSTOMER_ID_FIELD).cloned())
    }

    /// Items from the hidden JSON field, empty when it is missing or unusable.
    pub fn structured_items(&self) -> Vec<SaleItemRequest> {
        StructuredItems {
            raw: self.fields.get(ITEMS_FIELD).map(String::as_str),
        }
        .items()
    }

    /// Items rebuilt from the per-product inputs of the catalog products.
    pub fn field_items(&self, product_ids: &[Uuid]) -> Vec<SaleItemRequest> {
        FormFieldItems {
            fields: &self.fields,
            product_ids,
        }
        .items()
    }
}
