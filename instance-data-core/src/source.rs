use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::contract::{DocumentSource, SourceError};
use crate::document::InstanceDataDocument;
use crate::provider::CloudProvider;

/// Reads pre-assembled `<cloud>.json` documents from a directory.
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn document_path(&self, provider: CloudProvider) -> PathBuf {
        self.dir.join(format!("{}.json", provider.as_str()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DocumentSource for JsonDirSource {
    fn load(&self, provider: CloudProvider) -> Result<InstanceDataDocument, SourceError> {
        let path = self.document_path(provider);
        let content = fs::read_to_string(&path).map_err(|e| {
            error!(error = ?e, path = %path.display(), %provider, "Failed to read instance data");
            format!("failed to read {}: {e}", path.display())
        })?;
        let document: InstanceDataDocument = serde_json::from_str(&content).map_err(|e| {
            error!(error = ?e, path = %path.display(), %provider, "Instance data is not a JSON object");
            format!("failed to parse {}: {e}", path.display())
        })?;
        info!(
            %provider,
            path = %path.display(),
            instance_types = document.len(),
            "Loaded instance data"
        );
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_loads_document_for_provider() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("gce.json"),
            r#"{"n1-standard-1": {"vcpus": 1}, "f1-micro": {"vcpus": 0.2}}"#,
        )
        .unwrap();

        let source = JsonDirSource::new(dir.path());
        let doc = source.load(CloudProvider::Gce).unwrap();
        assert_eq!(
            doc.instance_types().collect::<Vec<_>>(),
            vec!["n1-standard-1", "f1-micro"]
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = JsonDirSource::new(dir.path())
            .load(CloudProvider::Aws)
            .unwrap_err();
        assert!(err.to_string().contains("aws.json"), "got: {err}");
    }

    #[test]
    fn test_non_object_document_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("azure.json"), "[]").unwrap();
        let err = JsonDirSource::new(dir.path())
            .load(CloudProvider::Azure)
            .unwrap_err();
        assert!(err.to_string().contains("failed to parse"), "got: {err}");
    }
}
