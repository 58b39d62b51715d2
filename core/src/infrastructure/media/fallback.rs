use tracing::warn;

use crate::domain::{
    common::entities::app_errors::CoreError,
    media::{
        entities::{MediaKind, MediaUpload, StoredMedia},
        ports::{MediaStoragePort, ObjectStoragePort},
        value_objects::{media_file_name, media_key},
    },
};
use crate::infrastructure::media::local::LocalMediaStorage;

/// Stores media in object storage when configured, falling back to the
/// local media directory when the remote put fails.
#[derive(Clone)]
pub struct FallbackMediaStorage<O> {
    remote: Option<O>,
    local: LocalMediaStorage,
}

impl<O> FallbackMediaStorage<O> {
    pub fn new(remote: Option<O>, local: LocalMediaStorage) -> Self {
        Self { remote, local }
    }

    pub fn backend(&self) -> &'static str {
        if self.remote.is_some() { "s3" } else { "local" }
    }
}

impl<O: ObjectStoragePort> MediaStoragePort for FallbackMediaStorage<O> {
    async fn store(
        &self,
        restaurant_slug: String,
        kind: MediaKind,
        upload: MediaUpload,
    ) -> Result<StoredMedia, CoreError> {
        let Some(remote) = &self.remote else {
            return self.local.store(restaurant_slug, kind, upload).await;
        };

        let key = media_key(
            &restaurant_slug,
            &media_file_name(kind, upload.filename.as_deref()),
        );
        let content_type = upload
            .content_type
            .clone()
            .unwrap_or_else(|| kind.default_content_type().to_string());

        match remote
            .put_object(key.clone(), upload.data.clone(), content_type)
            .await
        {
            Ok(()) => Ok(StoredMedia {
                url: remote.public_url(&key),
                key,
            }),
            Err(e) => {
                warn!(error = %e, key = %key, "object storage put failed, storing locally");
                self.local.store(restaurant_slug, kind, upload).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use bytes::Bytes;

    use super::*;
    use crate::domain::common::MediaConfig;

    struct FakeBucket {
        fail: bool,
        puts: Mutex<Vec<(String, String)>>,
    }

    impl ObjectStoragePort for FakeBucket {
        async fn put_object(
            &self,
            object_key: String,
            _payload: Bytes,
            content_type: String,
        ) -> Result<(), CoreError> {
            if self.fail {
                return Err(CoreError::ObjectStorageError("down".to_string()));
            }
            self.puts.lock().unwrap().push((object_key, content_type));
            Ok(())
        }

        fn public_url(&self, object_key: &str) -> String {
            format!("https://bucket.test/menuart/{}", object_key)
        }
    }

    fn upload() -> MediaUpload {
        MediaUpload {
            filename: Some("dish.png".to_string()),
            content_type: Some("image/png".to_string()),
            data: Bytes::from_static(b"png"),
        }
    }

    fn storage(dir: &tempfile::TempDir, fail: bool) -> FallbackMediaStorage<FakeBucket> {
        FallbackMediaStorage::new(
            Some(FakeBucket {
                fail,
                puts: Mutex::new(Vec::new()),
            }),
            LocalMediaStorage::new(&MediaConfig {
                media_dir: dir.path().to_path_buf(),
                base_url: "http://localhost:8000".to_string(),
            }),
        )
    }

    #[tokio::test]
    async fn test_remote_put_returns_bucket_url() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir, false);

        let stored = storage
            .store("demo".to_string(), MediaKind::Image, upload())
            .await
            .unwrap();

        assert!(stored.url.starts_with("https://bucket.test/menuart/demo/"));
        assert!(stored.url.ends_with(".png"));
        let puts = storage.remote.as_ref().unwrap().puts.lock().unwrap();
        assert_eq!(puts[0].1, "image/png");
        assert!(!dir.path().join("demo").exists());
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back_to_local() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir, true);

        let stored = storage
            .store("demo".to_string(), MediaKind::Image, upload())
            .await
            .unwrap();

        assert!(stored.url.starts_with("http://localhost:8000/media/demo/"));
        assert!(dir.path().join(&stored.key).exists());
    }

    #[test]
    fn test_backend_name() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(storage(&dir, false).backend(), "s3");

        let local_only: FallbackMediaStorage<FakeBucket> = FallbackMediaStorage::new(
            None,
            LocalMediaStorage::new(&MediaConfig {
                media_dir: dir.path().to_path_buf(),
                base_url: "http://localhost:8000".to_string(),
            }),
        );
        assert_eq!(local_only.backend(), "local");
    }
}
