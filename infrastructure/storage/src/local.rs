use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use business::domain::product::errors::ProductError;
use business::domain::product::photo::{PhotoUpload, UPLOADS_PREFIX, local_file_name};
use business::domain::product::services::PhotoStorage;

/// Keeps uploaded photos as plain files in one directory, served by the web
/// layer under `/uploads/`.
pub struct LocalPhotoStorage {
    upload_dir: PathBuf,
}

impl LocalPhotoStorage {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }
}

#[async_trait]
impl PhotoStorage for LocalPhotoStorage {
    async fn store(&self, photo: &PhotoUpload, file_name: &str) -> Result<String, ProductError> {
        let photo_ref = format!("{UPLOADS_PREFIX}{file_name}");
        let Some(file_name) = local_file_name(&photo_ref) else {
            return Err(ProductError::PhotoStorageFailed);
        };

        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|e| {
                tracing::error!("Cannot create upload directory {:?}: {}", self.upload_dir, e);
                ProductError::PhotoStorageFailed
            })?;

        let path = self.upload_dir.join(file_name);
        tokio::fs::write(&path, &photo.bytes).await.map_err(|e| {
            tracing::error!("Cannot write photo {:?}: {}", path, e);
            ProductError::PhotoStorageFailed
        })?;

        tracing::debug!("Stored photo {:?} ({} bytes)", path, photo.bytes.len());
        Ok(format!("{UPLOADS_PREFIX}{file_name}"))
    }

    async fn remove(&self, photo_ref: &str) -> Result<(), ProductError> {
        let Some(file_name) = local_file_name(photo_ref) else {
            return Ok(());
        };

        let path = self.upload_dir.join(file_name);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!("Removed photo {:?}", path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                tracing::error!("Cannot remove photo {:?}: {}", path, e);
                Err(ProductError::PhotoStorageFailed)
            }
        }
    }
}
