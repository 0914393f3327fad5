//! CLI interface for instance-data: argument parsing and the `run` entrypoint.
//!
//! The only choice a user makes is the output target. Without flags the
//! documents are written as Go sources into the milpa tree; with `--upload`
//! they are pushed to the public bucket instead. Everything past that choice
//! lives in `instance-data-core`.
use anyhow::{anyhow, Result};
use clap::Parser;
use instance_data_core::config::OutputTarget;
use instance_data_core::emit::GoSourceEmitter;
use instance_data_core::publish::{publish_all, PublishReport};
use instance_data_core::sink::Sink;
use instance_data_core::source::JsonDirSource;
use instance_data_core::upload::BucketUploader;
use instance_data_core::CloudProvider;

use crate::load_config::load_config;
use crate::upload::S3Store;

/// CLI for instance-data: publish cloud instance-type data.
#[derive(Debug, Parser)]
#[clap(
    name = "instance-data",
    version,
    about = "Write cloud instance data into milpa's Go sources, or upload it to the public bucket",
    after_help = "Examples:\n  # write pkg/util/instanceselector/<cloud>_instance_data.go under $MILPA_DIR\n  instance-data\n\n  # upload <cloud> objects to s3://elotl-cloud-data\n  instance-data --upload"
)]
pub struct Cli {
    /// Upload to the elotl-cloud-data bucket instead of writing Go sources
    #[clap(long)]
    pub upload: bool,
}

/// Async CLI entrypoint shared by main() and integration tests.
pub async fn run(cli: Cli) -> Result<PublishReport> {
    tracing::info!("trace_initialised");

    let config = load_config(OutputTarget::from_upload_flag(cli.upload))?;
    let source = JsonDirSource::new(&config.data_dir);

    let sink = match config.target {
        OutputTarget::SourceFile => {
            let base_dir = config
                .base_dir
                .clone()
                .ok_or_else(|| anyhow!("milpa source tree was not resolved"))?;
            Sink::SourceFile(GoSourceEmitter::new(base_dir))
        }
        OutputTarget::RemoteObject => {
            let store = S3Store::from_env().await;
            Sink::RemoteObject(BucketUploader::new(store, config.bucket.as_str()))
        }
    };
    let result = publish_all(&CloudProvider::ALL, &source, &sink).await;

    match result {
        Ok(report) => {
            tracing::info!(published = report.entries.len(), "Publishing complete");
            Ok(report)
        }
        Err(e) => {
            tracing::error!(error = %e, "Publishing failed");
            Err(e.into())
        }
    }
}
