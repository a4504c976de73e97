use poem_openapi::Multipart;
use poem_openapi::types::multipart::Upload;
use uuid::Uuid;

use business::domain::product::errors::ProductError;
use business::domain::product::photo::{MAX_PHOTO_BYTES, PhotoUpload};
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::use_cases::update::UpdateProductParams;
use business::domain::product::value_objects::{parse_price, parse_stock};
use business::domain::shared::value_objects::non_blank;

/// Add and edit forms share these fields. `id` is the business code.
#[derive(Debug, Multipart)]
pub struct ProductForm {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub stock: Option<String>,
    pub photo: Option<Upload>,
}

impl ProductForm {
    /// Every field but the photo is required.
    pub async fn into_create_params(self) -> Result<CreateProductParams, ProductError> {
        let (Some(code), Some(name), Some(price), Some(description), Some(stock)) = (
            non_blank(self.id),
            non_blank(self.name),
            non_blank(self.price),
            non_blank(self.description),
            non_blank(self.stock),
        ) else {
            return Err(ProductError::FieldsRequired);
        };

        Ok(CreateProductParams {
            code,
            name,
            price: parse_price(&price)?,
            description,
            stock: parse_stock(&stock)?,
            photo: read_photo(self.photo).await?,
        })
    }

    /// Blank fields keep the stored value.
    pub async fn into_update_params(self, id: Uuid) -> Result<UpdateProductParams, ProductError> {
        Ok(UpdateProductParams {
            id,
            code: non_blank(self.id),
            name: non_blank(self.name),
            price: non_blank(self.price)
                .map(|price| parse_price(&price))
                .transpose()?,
            description: non_blank(self.description),
            stock: non_blank(self.stock)
                .map(|stock| parse_stock(&stock))
                .transpose()?,
            photo: read_photo(self.photo).await?,
        })
    }
}

/// Browsers send an empty file part when no photo was picked.
async fn read_photo(upload: Option<Upload>) -> Result<Option<PhotoUpload>, ProductError> {
    let Some(upload) = upload else {
        return Ok(None);
    };
    let file_name = upload.file_name().unwrap_or_default().to_string();
    if file_name.is_empty() {
        return Ok(None);
    }
    if upload.size() > MAX_PHOTO_BYTES {
        return Err(ProductError::PhotoTooLarge);
    }

    let content_type = upload.content_type().unwrap_or_default().to_string();
    let bytes = upload.into_vec().await.map_err(|e| {
        tracing::warn!("Cannot read uploaded photo {}: {}", file_name, e);
        ProductError::PhotoStorageFailed
    })?;

    PhotoUpload::new(file_name, content_type, bytes).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    fn form(price: &str, stock: &str) -> ProductForm {
        ProductForm {
            id: Some("P1".to_string()),
            name: Some("Coffee".to_string()),
            price: Some(price.to_string()),
            description: Some("Arabica".to_string()),
            stock: Some(stock.to_string()),
            photo: None,
        }
    }

    #[tokio::test]
    async fn should_parse_complete_create_form() {
        let params = form("5.00", "10").into_create_params().await.unwrap();

        assert_eq!(params.code, "P1");
        assert_eq!(params.price, BigDecimal::from_str("5.00").unwrap());
        assert_eq!(params.stock, 10);
        assert!(params.photo.is_none());
    }

    #[tokio::test]
    async fn should_require_every_field_on_create() {
        let mut incomplete = form("5.00", "10");
        incomplete.description = Some("  ".to_string());

        let result = incomplete.into_create_params().await;

        assert!(matches!(result, Err(ProductError::FieldsRequired)));
    }

    #[tokio::test]
    async fn should_reject_negative_stock() {
        let result = form("5.00", "-1").into_create_params().await;

        assert!(matches!(result, Err(ProductError::InvalidStock)));
    }

    #[tokio::test]
    async fn should_leave_blank_fields_out_of_update() {
        let mut partial = form("", "");
        partial.name = None;

        let params = partial.into_update_params(Uuid::new_v4()).await.unwrap();

        assert_eq!(params.code.as_deref(), Some("P1"));
        assert!(params.name.is_none());
        assert!(params.price.is_none());
        assert!(params.stock.is_none());
    }
}
