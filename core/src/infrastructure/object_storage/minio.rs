use aws_sdk_s3::{
    Client,
    config::{BehaviorVersion, Credentials, Region},
    primitives::ByteStream,
};
use bytes::Bytes;
use tracing::instrument;

use crate::domain::{
    common::{ObjectStorageConfig, entities::app_errors::CoreError},
    media::ports::ObjectStoragePort,
};

#[derive(Clone)]
pub struct MinioObjectStorage {
    client: Client,
    bucket: String,
    public_base: String,
}

impl MinioObjectStorage {
    pub fn new(config: ObjectStorageConfig) -> Self {
        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            "menuart",
        );

        let endpoint = config.endpoint.trim_end_matches('/').to_string();

        tracing::info!(
            endpoint = %endpoint,
            region = %config.region,
            bucket = %config.bucket,
            "Initializing MinIO client"
        );

        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .endpoint_url(&endpoint)
            .force_path_style(true)
            .build();

        let public_base = config
            .public_url
            .as_deref()
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(endpoint);

        Self {
            client: Client::from_conf(s3_config),
            bucket: config.bucket,
            public_base,
        }
    }
}

impl ObjectStoragePort for MinioObjectStorage {
    #[instrument(skip(self, payload), fields(bucket = %self.bucket))]
    async fn put_object(
        &self,
        object_key: String,
        payload: Bytes,
        content_type: String,
    ) -> Result<(), CoreError> {
        let payload_size = payload.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&object_key)
            .content_type(&content_type)
            .body(ByteStream::from(payload))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    object_key = %object_key,
                    payload_size = payload_size,
                    "Failed to upload object"
                );
                CoreError::ObjectStorageError(format!("Failed to upload object: {}", e))
            })?;

        tracing::info!(object_key = %object_key, size = payload_size, "Object uploaded");

        Ok(())
    }

    fn public_url(&self, object_key: &str) -> String {
        format!("{}/{}/{}", self.public_base, self.bucket, object_key)
    }
}
