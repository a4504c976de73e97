use std::path::PathBuf;

use super::ConfigSource;

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
}

impl StorageConfig {
    /// Environment variables:
    /// - UPLOAD_DIR: directory holding product photos (default: "uploads")
    pub fn from_source(source: &impl ConfigSource) -> Self {
        Self {
            upload_dir: source
                .var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("uploads")),
        }
    }
}
