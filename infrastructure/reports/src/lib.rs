mod pdf;
mod photo_loader;
mod xlsx;

pub use pdf::PrintPdfRenderer;
pub use photo_loader::HttpPhotoLoader;
pub use xlsx::XlsxSpreadsheetRenderer;
