use std::path::Path;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    media::entities::{MediaKind, MediaUpload},
};

pub const MAX_MEDIA_SIZE: usize = 50 * 1024 * 1024;

/// Generates a collision-free file name for an upload, keeping the client
/// extension only when it is plain ASCII alphanumeric.
pub fn media_file_name(kind: MediaKind, original: Option<&str>) -> String {
    let extension = original
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_else(|| kind.default_extension().to_string());

    format!("{}.{}", Uuid::new_v4().simple(), extension)
}

pub fn media_key(restaurant_slug: &str, file_name: &str) -> String {
    format!("{}/{}", restaurant_slug, file_name)
}

pub fn ensure_media_size(upload: &MediaUpload) -> Result<(), CoreError> {
    if upload.data.len() > MAX_MEDIA_SIZE {
        return Err(CoreError::FileTooLarge);
    }
    Ok(())
}
