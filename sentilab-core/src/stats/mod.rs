//! Derivation engine: rolling statistics and summaries over a series.
//!
//! Every function takes its input explicitly and returns a fresh value; the
//! series is never mutated. Rolling outputs are aligned with series
//! positions (newest first) and hold `None` where a full window is not
//! available.

pub mod derive;
pub mod report;
pub mod rolling;
pub mod summary;

pub use derive::{derive, derive_with, DeriveConfig, DerivedStats, RollingStats};
pub use report::{market_statistics, statistics_lines, REPORT_TITLE};
pub use rolling::{mean, rolling_mean, rolling_std, sample_std_dev};
pub use summary::{ClassificationCounts, Histogram, HistogramBin};

/// Build a series from `(value, classification)` pairs, newest first, one
/// day apart.
#[cfg(test)]
pub fn make_series(
    points: &[(u8, crate::domain::Classification)],
) -> crate::domain::SentimentSeries {
    use crate::domain::{Observation, SentimentSeries};
    use chrono::{Local, TimeZone};

    let newest = 1_700_000_000i64;
    let observations = points
        .iter()
        .enumerate()
        .map(|(i, &(value, classification))| {
            let ts = Local
                .timestamp_opt(newest - 86_400 * i as i64, 0)
                .single()
                .unwrap();
            Observation::new(ts, value, classification)
        })
        .collect();
    SentimentSeries::new(observations)
}

/// Build a series from values alone, labelled by the banding rule.
#[cfg(test)]
pub fn make_series_from_values(values: &[u8]) -> crate::domain::SentimentSeries {
    let points: Vec<_> = values
        .iter()
        .map(|&v| (v, crate::domain::Classification::from_value(v)))
        .collect();
    make_series(&points)
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for statistics tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
