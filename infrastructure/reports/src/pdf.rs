use business::domain::report::errors::ReportError;
use business::domain::report::model::{InventoryPhoto, InventoryReport};
use business::domain::report::services::PdfRenderer;
use business::domain::sale::model::Sale;
use business::domain::shared::value_objects::format_money;
use chrono::{DateTime, Utc};
use printpdf::image_crate::GenericImageView;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference,
};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 18.0;
const PT_TO_MM: f32 = 0.3528;
/// Average glyph width of Helvetica, as a fraction of the font size.
const HELVETICA_AVG_WIDTH: f32 = 0.5;
const PHOTO_WIDTH_MM: f32 = 70.0;
const PHOTO_MAX_HEIGHT_MM: f32 = 100.0;
const PHOTO_DPI: f32 = 300.0;
const LAYER_NAME: &str = "content";

const NO_PRODUCTS: &str = "No products registered in the inventory.";
const PHOTO_PLACEHOLDER: &str = "Could not load the product image";
const FOOTER: &str = "(c) Store - All rights reserved";

#[derive(Clone, Copy)]
enum Align {
    Left,
    Center,
    Right,
}

/// Writes lines top to bottom, opening a new page when the current one is full.
struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
}

impl PageWriter {
    fn new(title: &str) -> Result<Self, ReportError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(rendering)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(rendering)?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            y: PAGE_HEIGHT - MARGIN,
        })
    }

    fn ensure_space(&mut self, needed: f32) {
        if self.y - needed >= MARGIN {
            return;
        }
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - MARGIN;
    }

    fn text(&mut self, text: &str, size: f32, align: Align) {
        self.write(text, size, align, false);
    }

    fn heading(&mut self, text: &str, size: f32, align: Align) {
        self.write(text, size, align, true);
    }

    fn write(&mut self, text: &str, size: f32, align: Align, bold: bool) {
        for line in wrap_lines(text, size) {
            self.line(&line, size, align, bold);
        }
    }

    fn line(&mut self, text: &str, size: f32, align: Align, bold: bool) {
        let line_height = size * PT_TO_MM * 1.4;
        self.ensure_space(line_height);
        self.y -= size * PT_TO_MM;

        let width = text_width(text, size);
        let x = match align {
            Align::Left => MARGIN,
            Align::Center => ((PAGE_WIDTH - width) / 2.0).max(MARGIN),
            Align::Right => (PAGE_WIDTH - MARGIN - width).max(MARGIN),
        };
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);

        self.y -= line_height - size * PT_TO_MM;
    }

    fn gap(&mut self, lines: f32) {
        self.y -= lines * 12.0 * PT_TO_MM * 1.4;
    }

    /// Embeds a photo scaled to a fixed width. Returns false when the bytes
    /// are not a decodable image.
    fn photo(&mut self, bytes: &[u8]) -> bool {
        let Ok(decoded) = printpdf::image_crate::load_from_memory(bytes) else {
            return false;
        };
        if decoded.width() == 0 || decoded.height() == 0 {
            return false;
        }

        let natural_width = decoded.width() as f32 / PHOTO_DPI * 25.4;
        let natural_height = decoded.height() as f32 / PHOTO_DPI * 25.4;
        let scale = (PHOTO_WIDTH_MM / natural_width).min(PHOTO_MAX_HEIGHT_MM / natural_height);
        let height = natural_height * scale;

        self.ensure_space(height);
        self.y -= height;
        Image::from_dynamic_image(&decoded).add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(MARGIN)),
                translate_y: Some(Mm(self.y)),
                scale_x: Some(scale),
                scale_y: Some(scale),
                dpi: Some(PHOTO_DPI),
                ..Default::default()
            },
        );
        true
    }

    fn finish(self) -> Result<Vec<u8>, ReportError> {
        self.doc.save_to_bytes().map_err(rendering)
    }
}

fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * HELVETICA_AVG_WIDTH * PT_TO_MM
}

/// Splits `text` into lines that fit between the margins, breaking at spaces
/// and cutting words that are wider than a whole line.
fn wrap_lines(text: &str, size: f32) -> Vec<String> {
    let per_char = size * HELVETICA_AVG_WIDTH * PT_TO_MM;
    let max_chars = (((PAGE_WIDTH - 2.0 * MARGIN) / per_char).floor() as usize).max(1);

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for piece in chars.chunks(max_chars) {
            let piece: String = piece.iter().collect();
            let needed = current.chars().count() + 1 + piece.chars().count();
            if !current.is_empty() && needed > max_chars {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&piece);
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn rendering(error: impl std::fmt::Display) -> ReportError {
    ReportError::Rendering(error.to_string())
}

/// PDF documents built with printpdf and the builtin Helvetica faces.
#[derive(Debug, Default, Clone)]
pub struct PrintPdfRenderer;

impl PrintPdfRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl PdfRenderer for PrintPdfRenderer {
    fn inventory(&self, report: &InventoryReport) -> Result<Vec<u8>, ReportError> {
        let mut page = PageWriter::new("Inventory Report")?;

        page.heading("Inventory Report", 25.0, Align::Center);
        page.gap(1.0);
        page.text(
            &format!("Date: {}", report.generated_at.format("%Y-%m-%d")),
            12.0,
            Align::Right,
        );
        page.text(
            &format!("Generated by: {}", report.generated_by),
            12.0,
            Align::Left,
        );
        page.gap(1.0);
        page.heading("Product Inventory", 14.0, Align::Left);
        page.gap(0.5);

        if report.entries.is_empty() {
            page.text(NO_PRODUCTS, 12.0, Align::Left);
        }

        for (index, entry) in report.entries.iter().enumerate() {
            let product = &entry.product;
            page.heading(
                &format!("Product #{}: {}", index + 1, product.name),
                14.0,
                Align::Left,
            );
            page.text(&format!("ID: {}", product.code), 12.0, Align::Left);
            page.text(
                &format!("Price: ${}", format_money(&product.price)),
                12.0,
                Align::Left,
            );
            page.text(&format!("Stock: {} units", product.stock), 12.0, Align::Left);
            page.text(
                &format!("Description: {}", product.description),
                12.0,
                Align::Left,
            );

            match &entry.photo {
                InventoryPhoto::Missing => {}
                InventoryPhoto::Loaded(bytes) => {
                    if !page.photo(bytes) {
                        tracing::warn!(product = %product.code, "photo is not a readable image");
                        page.text(PHOTO_PLACEHOLDER, 12.0, Align::Left);
                    }
                }
                InventoryPhoto::Unavailable => page.text(PHOTO_PLACEHOLDER, 12.0, Align::Left),
            }
            page.gap(1.5);
        }

        page.gap(1.0);
        page.text(FOOTER, 10.0, Align::Center);
        page.finish()
    }

    fn receipt(&self, sale: &Sale, issued_at: DateTime<Utc>) -> Result<Vec<u8>, ReportError> {
        let mut page = PageWriter::new("Sale Receipt")?;

        page.heading("Sale Receipt", 20.0, Align::Center);
        page.gap(1.0);
        page.text(
            &format!("Date: {}", issued_at.format("%Y-%m-%d %H:%M:%S")),
            12.0,
            Align::Left,
        );
        page.text(
            &format!("Customer: {}", sale.customer_name.as_deref().unwrap_or_default()),
            12.0,
            Align::Left,
        );
        page.text(
            &format!("Customer ID: {}", sale.customer_id.as_deref().unwrap_or_default()),
            12.0,
            Align::Left,
        );
        page.gap(1.0);
        page.heading("Product Details", 14.0, Align::Left);
        page.gap(0.5);

        for (index, item) in sale.items.iter().enumerate() {
            page.text(
                &format!(
                    "{}. {} (x{}) - ${} each - Subtotal: ${}",
                    index + 1,
                    item.name,
                    item.quantity,
                    format_money(&item.unit_price),
                    format_money(&item.subtotal)
                ),
                12.0,
                Align::Left,
            );
        }

        page.gap(1.0);
        page.heading(
            &format!("Total: ${}", format_money(&sale.total)),
            16.0,
            Align::Right,
        );
        page.finish()
    }
}
