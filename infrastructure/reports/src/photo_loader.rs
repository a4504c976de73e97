use std::path::PathBuf;

use async_trait::async_trait;

use business::domain::product::photo::{is_remote_photo, local_file_name};
use business::domain::report::errors::ReportError;
use business::domain::report::services::PhotoLoader;

/// Reads uploaded photos from the upload directory and downloads remote
/// ones over http(s).
pub struct HttpPhotoLoader {
    client: reqwest::Client,
    upload_dir: PathBuf,
}

impl HttpPhotoLoader {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            client: reqwest::Client::new(),
            upload_dir: upload_dir.into(),
        }
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, reqwest::Error> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl PhotoLoader for HttpPhotoLoader {
    async fn load(&self, photo_ref: &str) -> Result<Vec<u8>, ReportError> {
        if let Some(file_name) = local_file_name(photo_ref) {
            let path = self.upload_dir.join(file_name);
            return tokio::fs::read(&path).await.map_err(|e| {
                ReportError::PhotoUnavailable(format!("{}: {}", path.display(), e))
            });
        }

        if is_remote_photo(photo_ref) {
            return self
                .download(photo_ref)
                .await
                .map_err(|e| ReportError::PhotoUnavailable(format!("{}: {}", photo_ref, e)));
        }

        Err(ReportError::PhotoUnavailable(format!(
            "unsupported photo reference {}",
            photo_ref
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("store-photos-{}", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn should_read_uploaded_photo() {
        let dir = temp_dir();
        tokio::fs::create_dir_all(&dir).await.unwrap();
        tokio::fs::write(dir.join("1-mug.png"), [7, 8, 9]).await.unwrap();
        let loader = HttpPhotoLoader::new(&dir);

        let bytes = loader.load("/uploads/1-mug.png").await.unwrap();

        assert_eq!(bytes, vec![7, 8, 9]);
        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn should_fail_for_missing_upload() {
        let loader = HttpPhotoLoader::new(temp_dir());

        let result = loader.load("/uploads/gone.png").await;

        assert!(matches!(result, Err(ReportError::PhotoUnavailable(_))));
    }

    #[tokio::test]
    async fn should_reject_unknown_reference_kind() {
        let loader = HttpPhotoLoader::new(temp_dir());

        let result = loader.load("ftp://example.com/mug.png").await;

        assert!(matches!(result, Err(ReportError::PhotoUnavailable(_))));
    }
}
