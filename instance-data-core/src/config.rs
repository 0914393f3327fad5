use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::PublishError;

/// Bucket receiving the public instance-data objects.
pub const DEFAULT_BUCKET: &str = "elotl-cloud-data";

/// Environment variable naming the milpa source tree root.
pub const MILPA_DIR_ENV: &str = "MILPA_DIR";

/// Fallback when [`MILPA_DIR_ENV`] is unset: milpa checked out under `GOPATH`.
pub const GOPATH_ENV: &str = "GOPATH";

/// Environment variable naming the directory of `<cloud>.json` inputs.
pub const DATA_DIR_ENV: &str = "INSTANCE_DATA_DIR";

const MILPA_GOPATH_SUFFIX: &str = "src/github.com/elotl/milpa";

/// Where a run sends its output. Chosen once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    /// Generated Go sources under the milpa tree.
    SourceFile,
    /// Public objects in the instance-data bucket.
    RemoteObject,
}

impl OutputTarget {
    pub fn from_upload_flag(upload: bool) -> Self {
        if upload {
            OutputTarget::RemoteObject
        } else {
            OutputTarget::SourceFile
        }
    }
}

/// Fully resolved settings for one publishing run.
#[derive(Debug, Clone)]
pub struct PublishConfig {
    pub target: OutputTarget,
    /// Milpa tree root; only present for [`OutputTarget::SourceFile`].
    pub base_dir: Option<PathBuf>,
    pub data_dir: PathBuf,
    pub bucket: String,
}

impl PublishConfig {
    pub fn trace_loaded(&self) {
        info!(
            output = ?self.target,
            base_dir = ?self.base_dir,
            data_dir = %self.data_dir.display(),
            bucket = %self.bucket,
            "Loaded PublishConfig"
        );
        debug!(?self, "PublishConfig loaded (full debug)");
    }
}

/// Resolves the milpa tree root from the values of `MILPA_DIR` and `GOPATH`.
///
/// Empty values count as unset.
pub fn resolve_base_dir(
    milpa_dir: Option<&str>,
    gopath: Option<&str>,
) -> Result<PathBuf, PublishError> {
    if let Some(dir) = milpa_dir.filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(gopath) = gopath.filter(|g| !g.is_empty()) {
        return Ok(Path::new(gopath).join(MILPA_GOPATH_SUFFIX));
    }
    Err(PublishError::Config(format!(
        "cannot locate the milpa source tree: neither {MILPA_DIR_ENV} nor {GOPATH_ENV} is set"
    )))
}
