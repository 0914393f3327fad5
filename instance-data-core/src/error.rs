//! Error types for publishing instance data.

use std::path::PathBuf;

use thiserror::Error;

use crate::provider::CloudProvider;

/// Boxed error returned across the trait seams in [`crate::contract`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Everything that can stop a publishing run. All variants are fatal.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The output location could not be resolved from configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The instance-data document for a provider could not be loaded.
    #[error("failed to load {provider} instance data: {source}")]
    Document {
        provider: CloudProvider,
        #[source]
        source: BoxError,
    },

    /// The document could not be rendered as JSON.
    #[error("failed to serialize instance data: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the generated source file failed.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Uploading the object body failed.
    #[error("failed to upload s3://{bucket}/{key}: {source}")]
    Upload {
        bucket: String,
        key: String,
        #[source]
        source: BoxError,
    },

    /// The object was uploaded but setting its ACL failed.
    #[error("uploaded s3://{bucket}/{key} but failed to make it public-read (object left private): {source}")]
    Acl {
        bucket: String,
        key: String,
        #[source]
        source: BoxError,
    },
}
