//! Replays a saved API response from disk.

use super::provider::{PayloadSource, RawPayload, SentimentProvider};
use crate::error::SentimentError;
use std::path::{Path, PathBuf};
use tracing::info;

/// Reads a previously saved Fear & Greed response.
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SentimentProvider for FileProvider {
    fn name(&self) -> &str {
        "file"
    }

    fn source(&self) -> PayloadSource {
        PayloadSource::File
    }

    /// Loads the whole file; `limit` is not applied since the payload was
    /// captured with its own limit.
    fn fetch(&self, _limit: u32) -> Result<RawPayload, SentimentError> {
        info!(path = %self.path.display(), "loading saved payload");
        let body = std::fs::read_to_string(&self.path).map_err(|e| {
            SentimentError::Storage(format!("cannot read {}: {e}", self.path.display()))
        })?;
        serde_json::from_str(&body).map_err(|e| SentimentError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sentilab_file_provider_{}_{name}", std::process::id()))
    }

    #[test]
    fn reads_saved_payload() {
        let path = scratch("ok.json");
        std::fs::write(&path, r#"{"data":[{"value":"40"}]}"#).unwrap();
        let payload = FileProvider::new(&path).fetch(1).unwrap();
        assert_eq!(payload["data"][0]["value"], "40");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_storage_error() {
        let err = FileProvider::new(scratch("absent.json")).fetch(1).unwrap_err();
        assert!(matches!(err, SentimentError::Storage(_)));
    }

    #[test]
    fn garbage_file_is_decode_error() {
        let path = scratch("bad.json");
        std::fs::write(&path, "not json").unwrap();
        let err = FileProvider::new(&path).fetch(1).unwrap_err();
        assert!(matches!(err, SentimentError::Decode(_)));
        let _ = std::fs::remove_file(&path);
    }
}
