use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use uuid::Uuid;

use super::errors::ProductError;

/// Public path prefix under which uploaded photos are served.
pub const UPLOADS_PREFIX: &str = "/uploads/";

/// Largest accepted photo, in bytes.
pub const MAX_PHOTO_BYTES: usize = 5_000_000;

const ALLOWED_TYPES: [&str; 4] = ["jpeg", "jpg", "png", "gif"];

static UNSAFE_FILE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_.-]").expect("valid file name pattern"));

/// A validated image uploaded together with a product form.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoUpload {
    pub original_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl PhotoUpload {
    /// Accepts jpeg, jpg, png and gif images up to [`MAX_PHOTO_BYTES`].
    ///
    /// Both the file extension and the declared content type must name an
    /// allowed type.
    pub fn new(
        original_name: String,
        content_type: String,
        bytes: Vec<u8>,
    ) -> Result<Self, ProductError> {
        let extension = original_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();
        let mime = content_type.to_lowercase();

        let extension_ok = ALLOWED_TYPES.contains(&extension.as_str());
        let mime_ok = ALLOWED_TYPES.iter().any(|t| mime.contains(t));
        if !extension_ok || !mime_ok {
            return Err(ProductError::PhotoInvalidType);
        }

        if bytes.len() > MAX_PHOTO_BYTES {
            return Err(ProductError::PhotoTooLarge);
        }

        Ok(Self {
            original_name,
            content_type,
            bytes,
        })
    }

    /// File name used on disk:
    /// `<unix millis>-<8 random hex digits>-<sanitized original name>`.
    ///
    /// The random part keeps two uploads of the same file within one
    /// millisecond from overwriting each other.
    pub fn stored_file_name(&self, at: DateTime<Utc>) -> String {
        let safe_name = UNSAFE_FILE_CHARS.replace_all(&self.original_name, "_");
        let suffix = Uuid::new_v4().simple().to_string();
        format!("{}-{}-{}", at.timestamp_millis(), &suffix[..8], safe_name)
    }
}

/// Whether a photo reference points at a file we stored ourselves.
pub fn is_local_photo(photo_ref: &str) -> bool {
    photo_ref.starts_with(UPLOADS_PREFIX)
}

/// Whether a photo reference points at a remote http(s) resource.
pub fn is_remote_photo(photo_ref: &str) -> bool {
    photo_ref.starts_with("http://") || photo_ref.starts_with("https://")
}

/// File name component of a local photo reference.
///
/// Only the last path segment is kept so a reference can never escape the
/// upload directory.
pub fn local_file_name(photo_ref: &str) -> Option<&str> {
    if !is_local_photo(photo_ref) {
        return None;
    }
    photo_ref
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty() && *name != "." && *name != "..")
}
