//! SentiLab Core — sentiment index domain types, retrieval and statistics.
//!
//! This crate contains the data-processing core of the dashboard:
//! - Domain types (classification bands, observations, newest-first series)
//! - Payload providers (public HTTP endpoint, saved file, in-memory fixture)
//! - Normalizer from raw JSON to a typed series
//! - Tabular frame view backed by polars
//! - Derivation engine: rolling means, rolling volatility, summaries
//! - One error taxonomy shared by every stage

pub mod data;
pub mod domain;
pub mod error;
pub mod stats;

pub use data::{normalize, to_frame, SentimentProvider};
pub use domain::{Classification, Observation, SentimentSeries};
pub use error::SentimentError;
pub use stats::{derive, derive_with, DeriveConfig, DerivedStats, RollingStats};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: pipeline values can move across threads.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Observation>();
        require_sync::<Observation>();
        require_send::<SentimentSeries>();
        require_sync::<SentimentSeries>();
        require_send::<DerivedStats>();
        require_sync::<DerivedStats>();
        require_send::<SentimentError>();
        require_sync::<SentimentError>();
    }

    /// Contract: derivation reads the series through a shared reference and
    /// hands back a new value; the series is left untouched.
    #[test]
    fn derive_does_not_mutate_series() {
        let series = stats::make_series_from_values(&[12, 48, 77, 30, 61]);
        let before = series.clone();
        let _ = derive(&series).unwrap();
        assert_eq!(series, before);
    }
}
