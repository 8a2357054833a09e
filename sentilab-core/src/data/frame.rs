//! Tabular view of a series joined with its rolling columns.

use crate::domain::SentimentSeries;
use crate::stats::RollingStats;
use polars::prelude::*;

/// Build the observation frame, one row per observation, newest first.
///
/// `timestamp` holds local wall-clock time (timezone-less), matching how
/// observations are interpreted. Rolling columns hold nulls where no full
/// window exists. `rolling` must be aligned with `series`.
pub fn to_frame(series: &SentimentSeries, rolling: &RollingStats) -> PolarsResult<DataFrame> {
    if rolling.len() != series.len() {
        return Err(PolarsError::ShapeMismatch(
            format!(
                "rolling columns have {} rows, series has {}",
                rolling.len(),
                series.len()
            )
            .into(),
        ));
    }

    let millis: Vec<i64> = series
        .iter()
        .map(|o| o.timestamp.naive_local().and_utc().timestamp_millis())
        .collect();
    let values: Vec<i32> = series.iter().map(|o| i32::from(o.value)).collect();
    let labels: Vec<&str> = series.iter().map(|o| o.classification.label()).collect();

    let timestamp = Series::new("timestamp".into(), millis)
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;

    DataFrame::new(vec![
        timestamp.into(),
        Series::new("value".into(), values).into(),
        Series::new("classification".into(), labels).into(),
        Series::new("short_ma".into(), rolling.short_ma.as_slice()).into(),
        Series::new("long_ma".into(), rolling.long_ma.as_slice()).into(),
        Series::new("volatility".into(), rolling.volatility.as_slice()).into(),
    ])
}
