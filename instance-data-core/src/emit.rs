//! Go source emitter: embeds serialized instance data in milpa's
//! `instanceselector` package as a raw string constant.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::error::PublishError;
use crate::provider::CloudProvider;

/// Package directory, relative to the milpa tree root.
pub const INSTANCESELECTOR_DIR: &str = "pkg/util/instanceselector";

/// Writes `<base>/pkg/util/instanceselector/<cloud>_instance_data.go`.
#[derive(Debug, Clone)]
pub struct GoSourceEmitter {
    base_dir: PathBuf,
}

impl GoSourceEmitter {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn output_path(&self, provider: CloudProvider) -> PathBuf {
        self.base_dir
            .join(INSTANCESELECTOR_DIR)
            .join(format!("{}_instance_data.go", provider.as_str()))
    }

    /// Overwrites the provider's generated file. Directories are never created.
    ///
    /// JSON containing a backtick cannot sit inside a Go raw string literal and
    /// is rejected before anything is written.
    pub fn write(&self, provider: CloudProvider, json: &str) -> Result<PathBuf, PublishError> {
        let path = self.output_path(provider);
        if json.contains('`') {
            error!(%provider, path = %path.display(), "Instance data contains a backtick");
            return Err(PublishError::Config(format!(
                "{provider} instance data contains a backtick and cannot be embedded in {}",
                path.display()
            )));
        }
        info!(%provider, path = %path.display(), "Writing go source");
        if let Err(source) = fs::write(&path, render_go_source(provider, json)) {
            error!(error = ?source, path = %path.display(), "Failed to write go source");
            return Err(PublishError::Io { path, source });
        }
        Ok(path)
    }
}

/// Name of the Go constant holding a provider's JSON, e.g. `awsInstanceJson`.
pub fn constant_name(provider: CloudProvider) -> String {
    format!("{}InstanceJson", provider.as_str())
}

/// Full text of the generated Go file. No newline follows the closing backtick.
pub fn render_go_source(provider: CloudProvider, json: &str) -> String {
    format!(
        "package instanceselector\n\nconst {} = `\n{}\n`",
        constant_name(provider),
        json
    )
}
