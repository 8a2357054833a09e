//! alternative.me Fear & Greed Index provider.
//!
//! Issues one blocking GET against the public `fng` endpoint with a bounded
//! timeout. Transport failures, non-success statuses and undecodable bodies
//! are reported as distinct error kinds; nothing is retried.

use super::provider::{PayloadSource, RawPayload, SentimentProvider};
use crate::error::SentimentError;
use std::time::Duration;
use tracing::{debug, info};

/// Public endpoint of the Fear & Greed Index.
pub const DEFAULT_ENDPOINT: &str = "https://api.alternative.me/fng/";

/// Timeout applied to the whole request when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("sentilab/", env!("CARGO_PKG_VERSION"));

/// HTTP provider for the Fear & Greed Index.
pub struct AlternativeMeProvider {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl AlternativeMeProvider {
    /// Provider for the public endpoint with the default timeout.
    pub fn new() -> Result<Self, SentimentError> {
        Self::with_endpoint(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT)
    }

    /// Provider for an arbitrary endpoint (mirrors, local test servers).
    pub fn with_endpoint(endpoint: &str, timeout: Duration) -> Result<Self, SentimentError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SentimentError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Decode a response body into a JSON document.
    fn decode(body: &str) -> Result<RawPayload, SentimentError> {
        serde_json::from_str(body).map_err(|e| SentimentError::Decode(e.to_string()))
    }
}

impl SentimentProvider for AlternativeMeProvider {
    fn name(&self) -> &str {
        "alternative_me"
    }

    fn source(&self) -> PayloadSource {
        PayloadSource::AlternativeMe
    }

    fn fetch(&self, limit: u32) -> Result<RawPayload, SentimentError> {
        info!(endpoint = %self.endpoint, limit, "fetching sentiment index");

        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[("limit", limit)])
            .send()
            .map_err(|e| SentimentError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SentimentError::Service {
                status: status.as_u16(),
            });
        }

        let body = resp
            .text()
            .map_err(|e| SentimentError::Network(format!("failed to read response body: {e}")))?;
        debug!(bytes = body.len(), "received response body");

        Self::decode(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_accepts_json() {
        let payload = AlternativeMeProvider::decode(r#"{"data":[]}"#).unwrap();
        assert!(payload["data"].is_array());
    }

    #[test]
    fn decode_rejects_html() {
        let err = AlternativeMeProvider::decode("<html>maintenance</html>").unwrap_err();
        assert!(matches!(err, SentimentError::Decode(_)));
    }

    #[test]
    fn custom_endpoint_is_kept() {
        let provider =
            AlternativeMeProvider::with_endpoint("http://127.0.0.1:9/fng/", Duration::from_secs(1))
                .unwrap();
        assert_eq!(provider.endpoint(), "http://127.0.0.1:9/fng/");
        assert_eq!(provider.name(), "alternative_me");
    }
}
