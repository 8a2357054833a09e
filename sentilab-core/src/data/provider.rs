//! Sentiment provider trait and the payload it yields.
//!
//! The SentimentProvider trait abstracts over payload sources (the public
//! HTTP endpoint, a saved payload file, an in-memory fixture) so the pipeline
//! can run offline and tests never touch the network.

use crate::error::SentimentError;
use serde::{Deserialize, Serialize};

/// Number of daily observations requested when the caller does not say.
pub const DEFAULT_LIMIT: u32 = 365;

/// Raw decoded response, exactly as the source delivered it.
pub type RawPayload = serde_json::Value;

/// Where a payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayloadSource {
    AlternativeMe,
    File,
    Static,
}

/// Trait for sentiment payload sources.
///
/// Implementations perform exactly one retrieval per call: no retries and no
/// caching. Each failure surfaces as its own `SentimentError` kind.
pub trait SentimentProvider {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Which kind of source this is.
    fn source(&self) -> PayloadSource;

    /// Fetch the most recent `limit` observations as a raw JSON payload.
    fn fetch(&self, limit: u32) -> Result<RawPayload, SentimentError>;
}

/// Provider returning a fixed in-memory payload.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    payload: RawPayload,
}

impl StaticProvider {
    pub fn new(payload: RawPayload) -> Self {
        Self { payload }
    }
}

impl SentimentProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    fn source(&self) -> PayloadSource {
        PayloadSource::Static
    }

    /// Returns the stored payload; `limit` is not applied.
    fn fetch(&self, _limit: u32) -> Result<RawPayload, SentimentError> {
        Ok(self.payload.clone())
    }
}
