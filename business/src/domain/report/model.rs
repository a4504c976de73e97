use std::collections::BTreeMap;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

use crate::domain::product::model::Product;
use crate::domain::sale::model::Sale;
use crate::domain::shared::value_objects::sum_money;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// A rendered report ready to be downloaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ReportFile {
    pub fn pdf(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: PDF_CONTENT_TYPE,
            bytes,
        }
    }

    pub fn xlsx(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: XLSX_CONTENT_TYPE,
            bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InventoryPhoto {
    Missing,
    Loaded(Vec<u8>),
    /// The product has a photo but it could not be read or downloaded.
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryEntry {
    pub product: Product,
    pub photo: InventoryPhoto,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryReport {
    pub generated_by: String,
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<InventoryEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalesTotalReport {
    pub sales: Vec<Sale>,
    pub grand_total: BigDecimal,
}

impl SalesTotalReport {
    pub fn new(mut sales: Vec<Sale>) -> Self {
        sales.sort_by_key(|sale| sale.created_at);
        let grand_total = sum_money(sales.iter().map(|sale| &sale.total));
        Self { sales, grand_total }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StockTotalReport {
    pub products: Vec<Product>,
    pub total_units: u64,
    pub total_value: BigDecimal,
}

impl StockTotalReport {
    pub fn new(products: Vec<Product>) -> Self {
        let total_units = products.iter().map(|p| u64::from(p.stock)).sum();
        let values: Vec<BigDecimal> = products.iter().map(Product::stock_value).collect();
        Self {
            total_value: sum_money(&values),
            total_units,
            products,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerTotalRow {
    pub customer_name: Option<String>,
    pub customer_id: Option<String>,
    pub sales_count: usize,
    pub total: BigDecimal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CustomerTotalReport {
    /// Every sale of the customer matching the query.
    Customer {
        query: String,
        sales: Vec<Sale>,
        total: BigDecimal,
    },
    /// One row per distinct `(name, id)` pair.
    AllCustomers {
        rows: Vec<CustomerTotalRow>,
        total: BigDecimal,
    },
}

impl CustomerTotalReport {
    pub fn customer(query: String, mut sales: Vec<Sale>) -> Self {
        sales.sort_by_key(|sale| (sale.created_at, sale.id));
        sales.dedup_by_key(|sale| sale.id);
        let total = sum_money(sales.iter().map(|sale| &sale.total));
        Self::Customer {
            query,
            sales,
            total,
        }
    }

    pub fn all_customers(sales: &[Sale]) -> Self {
        let mut groups: BTreeMap<(Option<String>, Option<String>), (usize, Vec<&BigDecimal>)> =
            BTreeMap::new();
        for sale in sales {
            let entry = groups
                .entry((sale.customer_name.clone(), sale.customer_id.clone()))
                .or_default();
            entry.0 += 1;
            entry.1.push(&sale.total);
        }

        let rows: Vec<CustomerTotalRow> = groups
            .into_iter()
            .map(|((customer_name, customer_id), (sales_count, totals))| CustomerTotalRow {
                customer_name,
                customer_id,
                sales_count,
                total: sum_money(totals),
            })
            .collect();
        let total = sum_money(rows.iter().map(|row| &row.total));
        Self::AllCustomers { rows, total }
    }
}
