use std::path::PathBuf;

use tracing::{error, instrument};

use crate::domain::{
    common::{MediaConfig, entities::app_errors::CoreError},
    media::{
        entities::{MediaKind, MediaUpload, StoredMedia},
        ports::MediaStoragePort,
        value_objects::{media_file_name, media_key},
    },
};

/// Writes media under `<media_dir>/<slug>/`, served back at
/// `<base_url>/media/<slug>/<file>`.
#[derive(Debug, Clone)]
pub struct LocalMediaStorage {
    media_dir: PathBuf,
    base_url: String,
}

impl LocalMediaStorage {
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            media_dir: config.media_dir.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn media_url(&self, key: &str) -> String {
        format!("{}/media/{}", self.base_url, key)
    }
}

impl MediaStoragePort for LocalMediaStorage {
    #[instrument(skip(self, upload), fields(size = upload.data.len()))]
    async fn store(
        &self,
        restaurant_slug: String,
        kind: MediaKind,
        upload: MediaUpload,
    ) -> Result<StoredMedia, CoreError> {
        let file_name = media_file_name(kind, upload.filename.as_deref());
        let directory = self.media_dir.join(&restaurant_slug);

        tokio::fs::create_dir_all(&directory).await.map_err(|e| {
            error!("Failed to create media directory {}: {}", directory.display(), e);
            CoreError::MediaStorageError(e.to_string())
        })?;

        let path = directory.join(&file_name);
        tokio::fs::write(&path, &upload.data).await.map_err(|e| {
            error!("Failed to write media file {}: {}", path.display(), e);
            CoreError::MediaStorageError(e.to_string())
        })?;

        let key = media_key(&restaurant_slug, &file_name);

        Ok(StoredMedia {
            url: self.media_url(&key),
            key,
        })
    }
}
