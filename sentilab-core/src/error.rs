//! Error taxonomy shared by every stage of the pipeline.
//!
//! Errors are displayable in CLI output. Nothing is recovered inside the
//! library: each variant propagates to the caller unchanged.

use thiserror::Error;

/// Structured error type for fetch, normalization, derivation and storage.
#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("network error: {0}")]
    Network(String),

    #[error("service error: upstream returned HTTP {status}")]
    Service { status: u16 },

    #[error("decode error: response body is not valid JSON: {0}")]
    Decode(String),

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    #[error("insufficient data: {needed} observation(s) required, {available} available")]
    InsufficientData { needed: usize, available: usize },

    #[error("storage error: {0}")]
    Storage(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SentimentError {
    /// Stable name of the error kind, used in exit messages and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SentimentError::Network(_) => "NetworkError",
            SentimentError::Service { .. } => "ServiceError",
            SentimentError::Decode(_) => "DecodeError",
            SentimentError::ResponseFormatChanged(_) => "StructureError",
            SentimentError::MalformedRecord { .. } => "MalformedRecordError",
            SentimentError::InsufficientData { .. } => "InsufficientDataError",
            SentimentError::Storage(_) => "StorageError",
            SentimentError::InvalidConfig(_) => "ConfigError",
        }
    }

    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        SentimentError::MalformedRecord {
            index,
            reason: reason.into(),
        }
    }
}
