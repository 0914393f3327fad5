//! Bucket uploader: publishes serialized instance data as a public object.
//!
//! Publishing is two independent requests against the [`ObjectStore`]: the
//! body upload and the ACL change. When the second one fails the object stays
//! in the bucket without public access and the error says so; nothing is
//! rolled back.

use tracing::{error, info};

use crate::contract::ObjectStore;
use crate::error::PublishError;
use crate::provider::CloudProvider;

pub const JSON_CONTENT_TYPE: &str = "application/json";

pub struct BucketUploader {
    store: Box<dyn ObjectStore>,
    bucket: String,
}

impl BucketUploader {
    pub fn new(store: impl ObjectStore + 'static, bucket: impl Into<String>) -> Self {
        Self {
            store: Box::new(store),
            bucket: bucket.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Object key for a provider's document.
    pub fn object_key(provider: CloudProvider) -> &'static str {
        provider.as_str()
    }

    pub fn object_url(&self, provider: CloudProvider) -> String {
        format!("s3://{}/{}", self.bucket, Self::object_key(provider))
    }

    /// Uploads `json` under the provider's key, then makes it public-read.
    pub async fn upload(&self, provider: CloudProvider, json: &str) -> Result<String, PublishError> {
        let key = Self::object_key(provider);
        info!(%provider, bucket = %self.bucket, key, bytes = json.len(), "Uploading instance data");

        if let Err(source) = self
            .store
            .put_object(&self.bucket, key, json.as_bytes().to_vec(), JSON_CONTENT_TYPE)
            .await
        {
            error!(error = ?source, bucket = %self.bucket, key, "Upload failed");
            return Err(PublishError::Upload {
                bucket: self.bucket.clone(),
                key: key.to_string(),
                source,
            });
        }

        if let Err(source) = self.store.set_public_read(&self.bucket, key).await {
            error!(
                error = ?source,
                bucket = %self.bucket,
                key,
                "Object uploaded but public-read ACL could not be set"
            );
            return Err(PublishError::Acl {
                bucket: self.bucket.clone(),
                key: key.to_string(),
                source,
            });
        }

        info!(bucket = %self.bucket, key, "Object uploaded and marked public-read");
        Ok(self.object_url(provider))
    }
}
