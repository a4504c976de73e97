use async_trait::async_trait;

use super::errors::ProductError;
use super::photo::PhotoUpload;

/// Service port for keeping product photos somewhere the app can serve them.
#[async_trait]
pub trait PhotoStorage: Send + Sync {
    /// Stores the photo under `file_name` and returns its public reference.
    async fn store(&self, photo: &PhotoUpload, file_name: &str) -> Result<String, ProductError>;

    /// Removes a previously stored photo. References that were not stored by
    /// this service are ignored.
    async fn remove(&self, photo_ref: &str) -> Result<(), ProductError>;
}
