//! Series builders shared by the panel tests

use chrono::{Local, TimeZone};
use sentilab_core::{Classification, Observation, SentimentSeries};

const NEWEST: i64 = 1_700_000_000;
const DAY: i64 = 86_400;

/// Series from `(value, label)` pairs, newest first, one day apart.
pub fn series_of(points: &[(u8, Classification)]) -> SentimentSeries {
    let observations = points
        .iter()
        .enumerate()
        .map(|(i, &(value, classification))| {
            let ts = Local
                .timestamp_opt(NEWEST - i as i64 * DAY, 0)
                .single()
                .expect("valid timestamp");
            Observation::new(ts, value, classification)
        })
        .collect();
    SentimentSeries::new(observations)
}

/// Series with labels taken from the banding rule.
pub fn series_from_values(values: &[u8]) -> SentimentSeries {
    let points: Vec<_> = values
        .iter()
        .map(|&v| (v, Classification::from_value(v)))
        .collect();
    series_of(&points)
}

pub fn observation(value: u8) -> Observation {
    series_from_values(&[value])
        .latest()
        .cloned()
        .expect("one observation")
}
