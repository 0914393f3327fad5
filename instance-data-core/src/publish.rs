//! Top-level pipeline: load → serialize → publish, once per provider.
//!
//! [`publish_all`] walks the providers in order and hands each serialized
//! document to the single [`Sink`] chosen for the run.
//!
//! # Error Handling
//! Fail-fast: the first provider that cannot be loaded, serialized or
//! published stops the run and its error is returned. Side effects already
//! committed for earlier providers (written files, uploaded objects) stay.

use tracing::{error, info};

use crate::contract::DocumentSource;
use crate::document::{content_hash, to_pretty_json};
use crate::error::PublishError;
use crate::provider::CloudProvider;
use crate::sink::Sink;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub entries: Vec<PublishedEntry>,
}

/// One provider's published document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedEntry {
    pub provider: CloudProvider,
    /// File path or `s3://bucket/key`.
    pub destination: String,
    pub bytes: usize,
    /// Hex SHA-256 of the published JSON.
    pub sha256: String,
}

pub async fn publish_all<D>(
    providers: &[CloudProvider],
    source: &D,
    sink: &Sink,
) -> Result<PublishReport, PublishError>
where
    D: DocumentSource,
{
    info!(output = ?sink.target(), providers = providers.len(), "[PUBLISH] Starting");

    let mut entries = Vec::with_capacity(providers.len());
    for &provider in providers {
        let entry = publish_one(provider, source, sink).await.map_err(|e| {
            error!(%provider, error = %e, "[PUBLISH][ERROR] Aborting run");
            e
        })?;
        entries.push(entry);
    }

    info!(published = entries.len(), "[PUBLISH] Complete");
    Ok(PublishReport { entries })
}

async fn publish_one<D>(
    provider: CloudProvider,
    source: &D,
    sink: &Sink,
) -> Result<PublishedEntry, PublishError>
where
    D: DocumentSource,
{
    let document = source
        .load(provider)
        .map_err(|e| PublishError::Document {
            provider,
            source: e,
        })?;
    let json = to_pretty_json(&document)?;
    let sha256 = content_hash(&json);
    info!(%provider, bytes = json.len(), %sha256, "[PUBLISH] Serialized instance data");

    let destination = sink.publish(provider, &json).await?;
    info!(%provider, %destination, "[PUBLISH] Published");

    Ok(PublishedEntry {
        provider,
        destination,
        bytes: json.len(),
        sha256,
    })
}
