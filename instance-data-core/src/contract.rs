//! # contract: interfaces at the I/O edges of a publishing run
//!
//! Two traits separate the core pipeline from anything that touches the
//! outside world:
//! - [`DocumentSource`] hands over the instance-data document for a provider.
//!   How the document is assembled from cloud APIs is not this crate's concern.
//! - [`ObjectStore`] is the minimal object-storage surface the bucket uploader
//!   needs: put an object, then mark it public-read.
//!
//! ## Mocking & Testing
//! Both traits are annotated for `mockall`; with the `test-export-mocks`
//! feature (on by default) `MockDocumentSource` and `MockObjectStore` are
//! available to dependents for their own tests.

use async_trait::async_trait;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

use crate::document::InstanceDataDocument;
use crate::error::BoxError;
use crate::provider::CloudProvider;

/// Error returned by [`DocumentSource`] implementations.
pub type SourceError = BoxError;

/// Error returned by [`ObjectStore`] implementations.
pub type StoreError = BoxError;

/// Supplies the instance-data document for one provider.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
pub trait DocumentSource {
    /// Loads the full document for `provider`.
    fn load(&self, provider: CloudProvider) -> Result<InstanceDataDocument, SourceError>;
}

/// Object storage with just enough surface to publish one public object.
///
/// The two calls are independent requests; nothing ties them together.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Writes `body` to `bucket`/`key`, replacing any existing object.
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StoreError>;

    /// Sets the canned `public-read` ACL on an existing object.
    async fn set_public_read(&self, bucket: &str, key: &str) -> Result<(), StoreError>;
}
