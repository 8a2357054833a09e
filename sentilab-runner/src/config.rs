//! Dashboard configuration, loaded from TOML.
//!
//! Every section is optional; missing keys take the defaults below.
//!
//! ```toml
//! [source]
//! url = "https://api.alternative.me/fng/"
//! limit = 365
//! timeout_secs = 30
//!
//! [stats]
//! short_window = 7
//! long_window = 30
//! volatility_window = 20
//! bin_width = 5
//!
//! [output]
//! path = "crypto_sentiment_dashboard.png"
//! width = 2000
//! height = 1200
//! ```

use sentilab_core::data::{AlternativeMeProvider, DEFAULT_ENDPOINT, DEFAULT_LIMIT, DEFAULT_TIMEOUT};
use sentilab_core::{DeriveConfig, SentimentError};
use sentilab_render::RenderOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_OUTPUT: &str = "crypto_sentiment_dashboard.png";

/// Where to fetch from and how much.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    pub url: String,
    pub limit: u32,
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
            limit: DEFAULT_LIMIT,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

/// Dashboard image destination and size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        let render = RenderOptions::default();
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT),
            width: render.width,
            height: render.height,
        }
    }
}

/// Complete configuration of one dashboard run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub source: SourceConfig,
    pub stats: DeriveConfig,
    pub output: OutputConfig,
}

impl DashboardConfig {
    /// Load and validate a configuration file.
    pub fn from_file(path: &Path) -> Result<Self, SentimentError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SentimentError::InvalidConfig(format!("read config {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, SentimentError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| SentimentError::InvalidConfig(format!("parse config TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, SentimentError> {
        toml::to_string_pretty(self)
            .map_err(|e| SentimentError::InvalidConfig(format!("serialize config TOML: {e}")))
    }

    pub fn validate(&self) -> Result<(), SentimentError> {
        if self.source.limit == 0 {
            return Err(SentimentError::InvalidConfig(
                "source limit must be a positive integer".into(),
            ));
        }
        if self.source.timeout_secs == 0 {
            return Err(SentimentError::InvalidConfig(
                "source timeout must be at least one second".into(),
            ));
        }
        if self.source.url.trim().is_empty() {
            return Err(SentimentError::InvalidConfig("source url is empty".into()));
        }
        self.stats.validate()?;
        self.render_options().validate()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_secs)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::with_size(self.output.width, self.output.height)
    }

    /// HTTP provider for the configured endpoint.
    pub fn http_provider(&self) -> Result<AlternativeMeProvider, SentimentError> {
        AlternativeMeProvider::with_endpoint(&self.source.url, self.timeout())
    }
}
