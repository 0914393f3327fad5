#![doc = "S3 integration: implements the core `ObjectStore` contract with the AWS SDK."]
//
//! Credentials and region come from the standard AWS provider chain
//! (environment, shared config/credentials files, instance profile). The
//! region falls back to `us-east-1` when nothing in the chain sets one.

use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client;
use instance_data_core::contract::{ObjectStore, StoreError};

const FALLBACK_REGION: &str = "us-east-1";

#[derive(Debug, Clone)]
pub struct S3Store {
    client: Client,
}

impl S3Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn from_env() -> Self {
        let region = RegionProviderChain::default_provider().or_else(FALLBACK_REGION);
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;
        tracing::info!(
            region = ?sdk_config.region(),
            "Initialized S3 client from environment"
        );
        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StoreError> {
        tracing::info!(bucket, key, bytes = body.len(), "PutObject");
        match self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
        {
            Ok(_) => Ok(()),
            Err(e) => {
                tracing::error!(error = %DisplayErrorContext(&e), bucket, key, "PutObject failed");
                Err(format!("PutObject failed: {}", DisplayErrorContext(&e)).into())
            }
        }
    }

    async fn set_public_read(&self, bucket: &str, key: &str) -> Result<(), StoreError> {
        tracing::info!(bucket, key, "PutObjectAcl public-read");
        match self
            .client
            .put_object_acl()
            .bucket(bucket)
            .key(key)
            .acl(ObjectCannedAcl::PublicRead)
            .send()
            .await
        {
            Ok(_) => Ok(()),
            Err(e) => {
                tracing::error!(error = %DisplayErrorContext(&e), bucket, key, "PutObjectAcl failed");
                Err(format!("PutObjectAcl failed: {}", DisplayErrorContext(&e)).into())
            }
        }
    }
}
