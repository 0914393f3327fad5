use crate::config::OutputTarget;
use crate::emit::GoSourceEmitter;
use crate::error::PublishError;
use crate::provider::CloudProvider;
use crate::upload::BucketUploader;

/// Output strategy for a run. Exactly one is chosen, and every provider goes to it.
pub enum Sink {
    SourceFile(GoSourceEmitter),
    RemoteObject(BucketUploader),
}

impl Sink {
    pub fn target(&self) -> OutputTarget {
        match self {
            Sink::SourceFile(_) => OutputTarget::SourceFile,
            Sink::RemoteObject(_) => OutputTarget::RemoteObject,
        }
    }

    /// Publishes one provider's serialized document and returns where it went.
    pub async fn publish(&self, provider: CloudProvider, json: &str) -> Result<String, PublishError> {
        match self {
            Sink::SourceFile(emitter) => emitter
                .write(provider, json)
                .map(|path| path.display().to_string()),
            Sink::RemoteObject(uploader) => uploader.upload(provider, json).await,
        }
    }
}
