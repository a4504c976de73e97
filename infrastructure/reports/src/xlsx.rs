use bigdecimal::{BigDecimal, RoundingMode};
use business::domain::report::errors::ReportError;
use business::domain::report::model::{
    CustomerTotalReport, SalesTotalReport, StockTotalReport,
};
use business::domain::report::services::SpreadsheetRenderer;
use business::domain::sale::model::Sale;
use business::domain::shared::value_objects::MONEY_SCALE;
use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";
const SALE_COLUMNS: [&str; 5] = ["Date", "Customer", "Customer ID", "Items", "Total"];

struct Formats {
    header: Format,
    money: Format,
    total_label: Format,
    total_money: Format,
}

impl Formats {
    fn new() -> Self {
        Self {
            header: Format::new().set_bold(),
            money: Format::new().set_num_format("0.00"),
            total_label: Format::new().set_bold(),
            total_money: Format::new().set_bold().set_num_format("0.00"),
        }
    }
}

fn money(amount: &BigDecimal) -> f64 {
    amount
        .with_scale_round(MONEY_SCALE, RoundingMode::HalfUp)
        .to_f64()
        .unwrap_or_default()
}

fn date(at: &DateTime<Utc>) -> String {
    at.format(DATE_FORMAT).to_string()
}

fn headers(
    sheet: &mut Worksheet,
    row: u32,
    titles: &[&str],
    formats: &Formats,
) -> Result<(), XlsxError> {
    for (col, title) in titles.iter().enumerate() {
        sheet.write_string_with_format(row, col as u16, *title, &formats.header)?;
        sheet.set_column_width(col as u16, 18)?;
    }
    Ok(())
}

fn sale_rows(
    sheet: &mut Worksheet,
    first_row: u32,
    sales: &[Sale],
    formats: &Formats,
) -> Result<u32, XlsxError> {
    let mut row = first_row;
    for sale in sales {
        sheet.write_string(row, 0, date(&sale.created_at))?;
        sheet.write_string(row, 1, sale.customer_name.as_deref().unwrap_or_default())?;
        sheet.write_string(row, 2, sale.customer_id.as_deref().unwrap_or_default())?;
        sheet.write_number(row, 3, f64::from(sale.item_count()))?;
        sheet.write_number_with_format(row, 4, money(&sale.total), &formats.money)?;
        row += 1;
    }
    Ok(row)
}

fn finish(mut workbook: Workbook) -> Result<Vec<u8>, XlsxError> {
    workbook.save_to_buffer()
}

fn rendering(error: XlsxError) -> ReportError {
    ReportError::Rendering(error.to_string())
}

/// XLSX workbooks with one sheet per report.
#[derive(Debug, Default, Clone)]
pub struct XlsxSpreadsheetRenderer;

impl XlsxSpreadsheetRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_sales_total(report: &SalesTotalReport) -> Result<Vec<u8>, XlsxError> {
        let formats = Formats::new();
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Sales")?;

        headers(sheet, 0, &SALE_COLUMNS, &formats)?;
        let row = sale_rows(sheet, 1, &report.sales, &formats)?;
        sheet.write_string_with_format(row, 0, "Grand total", &formats.total_label)?;
        sheet.write_number_with_format(row, 4, money(&report.grand_total), &formats.total_money)?;

        finish(workbook)
    }

    fn render_stock_total(report: &StockTotalReport) -> Result<Vec<u8>, XlsxError> {
        let formats = Formats::new();
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Stock")?;

        headers(sheet, 0, &["ID", "Name", "Price", "Stock", "Stock value"], &formats)?;
        let mut row = 1;
        for product in &report.products {
            sheet.write_string(row, 0, &product.code)?;
            sheet.write_string(row, 1, &product.name)?;
            sheet.write_number_with_format(row, 2, money(&product.price), &formats.money)?;
            sheet.write_number(row, 3, f64::from(product.stock))?;
            sheet.write_number_with_format(row, 4, money(&product.stock_value()), &formats.money)?;
            row += 1;
        }
        sheet.write_string_with_format(row, 0, "Total", &formats.total_label)?;
        sheet.write_number_with_format(row, 3, report.total_units as f64, &formats.total_label)?;
        sheet.write_number_with_format(row, 4, money(&report.total_value), &formats.total_money)?;

        finish(workbook)
    }

    fn render_customer_total(report: &CustomerTotalReport) -> Result<Vec<u8>, XlsxError> {
        let formats = Formats::new();
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Customers")?;

        match report {
            CustomerTotalReport::Customer {
                query,
                sales,
                total,
            } => {
                let title = format!("Customer: {}", query);
                sheet.write_string_with_format(0, 0, title, &formats.header)?;
                headers(sheet, 1, &SALE_COLUMNS, &formats)?;
                let row = sale_rows(sheet, 2, sales, &formats)?;
                sheet.write_string_with_format(row, 0, "Total", &formats.total_label)?;
                sheet.write_number_with_format(row, 4, money(total), &formats.total_money)?;
            }
            CustomerTotalReport::AllCustomers { rows, total } => {
                headers(sheet, 0, &["Customer", "Customer ID", "Sales", "Total"], &formats)?;
                let mut row = 1;
                for customer in rows {
                    let name = customer.customer_name.as_deref().unwrap_or_default();
                    let id = customer.customer_id.as_deref().unwrap_or_default();
                    sheet.write_string(row, 0, name)?;
                    sheet.write_string(row, 1, id)?;
                    sheet.write_number(row, 2, customer.sales_count as f64)?;
                    sheet.write_number_with_format(row, 3, money(&customer.total), &formats.money)?;
                    row += 1;
                }
                sheet.write_string_with_format(row, 0, "Total", &formats.total_label)?;
                sheet.write_number_with_format(row, 3, money(total), &formats.total_money)?;
            }
        }

        finish(workbook)
    }
}

impl SpreadsheetRenderer for XlsxSpreadsheetRenderer {
    fn sales_total(&self, report: &SalesTotalReport) -> Result<Vec<u8>, ReportError> {
        Self::render_sales_total(report).map_err(rendering)
    }

    fn stock_total(&self, report: &StockTotalReport) -> Result<Vec<u8>, ReportError> {
        Self::render_stock_total(report).map_err(rendering)
    }

    fn customer_total(&self, report: &CustomerTotalReport) -> Result<Vec<u8>, ReportError> {
        Self::render_customer_total(report).map_err(rendering)
    }
}
