use bytes::Bytes;

use crate::domain::{
    common::entities::app_errors::CoreError,
    media::entities::{MediaKind, MediaUpload, StoredMedia},
};

/// Persists item media and returns the public URL to store on the item.
#[cfg_attr(test, mockall::automock)]
pub trait MediaStoragePort: Send + Sync {
    fn store(
        &self,
        restaurant_slug: String,
        kind: MediaKind,
        upload: MediaUpload,
    ) -> impl Future<Output = Result<StoredMedia, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ObjectStoragePort: Send + Sync {
    fn put_object(
        &self,
        object_key: String,
        payload: Bytes,
        content_type: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn public_url(&self, object_key: &str) -> String;
}
