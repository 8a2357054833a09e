//! `derive`: the full set of statistics the dashboard consumes.

use super::rolling::{mean, rolling_mean, rolling_std, sample_std_dev};
use super::summary::{ClassificationCounts, Histogram};
use crate::domain::{Classification, Observation, SentimentSeries};
use crate::error::SentimentError;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU8;
use tracing::debug;

/// Window sizes and bucket width used by the derivation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeriveConfig {
    /// Short moving average window (days).
    pub short_window: usize,
    /// Long moving average window (days).
    pub long_window: usize,
    /// Rolling volatility window (days). Must be at least 2.
    pub volatility_window: usize,
    /// Histogram bucket width in index points.
    pub bin_width: u8,
}

impl Default for DeriveConfig {
    fn default() -> Self {
        Self {
            short_window: 7,
            long_window: 30,
            volatility_window: 20,
            bin_width: 5,
        }
    }
}

impl DeriveConfig {
    pub fn validate(&self) -> Result<(), SentimentError> {
        if self.short_window == 0 || self.long_window == 0 {
            return Err(SentimentError::InvalidConfig(
                "moving average windows must be at least 1".into(),
            ));
        }
        if self.volatility_window < 2 {
            return Err(SentimentError::InvalidConfig(
                "volatility window must be at least 2".into(),
            ));
        }
        if self.bin_width == 0 {
            return Err(SentimentError::InvalidConfig(
                "histogram bin width must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Rolling series aligned with the source series (newest first).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollingStats {
    pub short_ma: Vec<Option<f64>>,
    pub long_ma: Vec<Option<f64>>,
    pub volatility: Vec<Option<f64>>,
}

impl RollingStats {
    pub fn compute(values: &[f64], config: &DeriveConfig) -> Self {
        Self {
            short_ma: rolling_mean(values, config.short_window),
            long_ma: rolling_mean(values, config.long_window),
            volatility: rolling_std(values, config.volatility_window),
        }
    }

    pub fn len(&self) -> usize {
        self.short_ma.len()
    }

    pub fn is_empty(&self) -> bool {
        self.short_ma.is_empty()
    }
}

/// Statistics derived from one series. Recomputed on every run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedStats {
    pub config: DeriveConfig,
    /// Number of observations analysed.
    pub count: usize,
    /// Most recent observation.
    pub latest: Observation,
    pub rolling: RollingStats,
    /// Mean of the first `short_window` entries (clamped to the series length).
    pub short_mean: f64,
    /// Mean of the first `long_window` entries (clamped to the series length).
    pub long_mean: f64,
    /// Sample standard deviation of the whole series; `None` below two entries.
    pub std_dev: Option<f64>,
    /// Most frequent classification.
    pub dominant: Classification,
    pub frequencies: ClassificationCounts,
    pub distribution: Histogram,
}

/// Derive statistics with the default windows (7 / 30 / 20, 5-point buckets).
pub fn derive(series: &SentimentSeries) -> Result<DerivedStats, SentimentError> {
    derive_with(series, &DeriveConfig::default())
}

/// Derive statistics with explicit windows.
pub fn derive_with(
    series: &SentimentSeries,
    config: &DeriveConfig,
) -> Result<DerivedStats, SentimentError> {
    config.validate()?;
    let bin_width = NonZeroU8::new(config.bin_width).ok_or_else(|| {
        SentimentError::InvalidConfig("histogram bin width must be at least 1".into())
    })?;

    let latest = series
        .latest()
        .cloned()
        .ok_or(SentimentError::InsufficientData {
            needed: 1,
            available: 0,
        })?;

    let values = series.values();
    let n = values.len();

    let short_mean = mean(&values[..config.short_window.min(n)]);
    let long_mean = mean(&values[..config.long_window.min(n)]);
    let (short_mean, long_mean) = match (short_mean, long_mean) {
        (Some(s), Some(l)) => (s, l),
        _ => {
            return Err(SentimentError::InsufficientData {
                needed: 1,
                available: n,
            })
        }
    };

    let frequencies = ClassificationCounts::from_series(series);
    let dominant = frequencies.mode().ok_or(SentimentError::InsufficientData {
        needed: 1,
        available: n,
    })?;

    let stats = DerivedStats {
        config: *config,
        count: n,
        latest,
        rolling: RollingStats::compute(&values, config),
        short_mean,
        long_mean,
        std_dev: sample_std_dev(&values),
        dominant,
        frequencies,
        distribution: Histogram::from_series(series, bin_width),
    };

    debug!(
        count = stats.count,
        short_mean = stats.short_mean,
        long_mean = stats.long_mean,
        dominant = %stats.dominant,
        "derived statistics"
    );

    Ok(stats)
}
