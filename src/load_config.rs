/// `load_config` module: builds a [`PublishConfig`] from the process environment.
///
/// This is the only place the CLI reads environment variables. The core crate
/// receives every value explicitly.
///
/// # Variables
/// - `MILPA_DIR`: milpa source tree root, falling back to
///   `$GOPATH/src/github.com/elotl/milpa`. Required only when writing Go sources.
/// - `INSTANCE_DATA_DIR`: directory holding `<cloud>.json` inputs (default `.`).
///
/// A `.env` file, if present, is loaded by `main` before this runs.
use anyhow::Result;
use instance_data_core::config::{
    resolve_base_dir, OutputTarget, PublishConfig, DATA_DIR_ENV, DEFAULT_BUCKET, GOPATH_ENV,
    MILPA_DIR_ENV,
};
use std::env;
use std::path::PathBuf;
use tracing::{error, info};

pub fn load_config(target: OutputTarget) -> Result<PublishConfig> {
    info!(output = ?target, "Loading configuration from environment");

    let base_dir = match target {
        OutputTarget::SourceFile => {
            let milpa_dir = env::var(MILPA_DIR_ENV).ok();
            let gopath = env::var(GOPATH_ENV).ok();
            match resolve_base_dir(milpa_dir.as_deref(), gopath.as_deref()) {
                Ok(dir) => {
                    info!(base_dir = %dir.display(), "Resolved milpa source tree");
                    Some(dir)
                }
                Err(e) => {
                    error!(error = %e, "Failed to resolve milpa source tree");
                    return Err(e.into());
                }
            }
        }
        OutputTarget::RemoteObject => None,
    };

    let data_dir = env::var(DATA_DIR_ENV)
        .ok()
        .filter(|d| !d.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let config = PublishConfig {
        target,
        base_dir,
        data_dir,
        bucket: DEFAULT_BUCKET.to_string(),
    };
    config.trace_loaded();
    Ok(config)
}
