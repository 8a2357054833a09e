//! Turns a raw Fear & Greed payload into a typed series.
//!
//! Expected shape:
//!
//! ```json
//! { "data": [ { "value": "40", "value_classification": "Fear",
//!               "timestamp": "1551157200" }, ... ] }
//! ```
//!
//! `timestamp` and `value` may arrive as strings or integers. Timestamps are
//! epoch seconds interpreted in the host's local timezone. Labels are carried
//! through as delivered. The first bad record aborts normalization.

use crate::domain::{Classification, Observation, SentimentSeries, MAX_INDEX_VALUE};
use crate::error::SentimentError;
use chrono::{DateTime, Local, TimeZone};
use serde_json::Value;
use tracing::{debug, warn};

/// Convert a raw payload into a newest-first series.
pub fn normalize(raw: &Value) -> Result<SentimentSeries, SentimentError> {
    let entries = raw
        .get("data")
        .ok_or_else(|| SentimentError::ResponseFormatChanged("missing `data` field".into()))?
        .as_array()
        .ok_or_else(|| SentimentError::ResponseFormatChanged("`data` is not an array".into()))?;

    let observations = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_entry(index, entry))
        .collect::<Result<Vec<_>, _>>()?;

    let series = SentimentSeries::new(observations);
    debug!(records = series.len(), "normalized payload");

    let inconsistent = series.inconsistent_count();
    if inconsistent > 0 {
        warn!(
            inconsistent,
            "upstream labels disagree with the value banding; labels kept as delivered"
        );
    }

    Ok(series)
}

fn parse_entry(index: usize, entry: &Value) -> Result<Observation, SentimentError> {
    if !entry.is_object() {
        return Err(SentimentError::malformed(index, "record is not an object"));
    }

    let timestamp = parse_timestamp(index, field(index, entry, "timestamp")?)?;
    let value = parse_value(index, field(index, entry, "value")?)?;

    let label = field(index, entry, "value_classification")?
        .as_str()
        .ok_or_else(|| SentimentError::malformed(index, "`value_classification` is not a string"))?;
    let classification = label
        .parse::<Classification>()
        .map_err(|e| SentimentError::malformed(index, e))?;

    Ok(Observation::new(timestamp, value, classification))
}

fn field<'a>(index: usize, entry: &'a Value, name: &str) -> Result<&'a Value, SentimentError> {
    match entry.get(name) {
        Some(Value::Null) | None => Err(SentimentError::malformed(
            index,
            format!("missing field `{name}`"),
        )),
        Some(v) => Ok(v),
    }
}

/// Integer carried either as a JSON number or as a base-10 string.
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn parse_timestamp(index: usize, raw: &Value) -> Result<DateTime<Local>, SentimentError> {
    let secs = as_integer(raw).ok_or_else(|| {
        SentimentError::malformed(index, format!("`timestamp` is not an integer: {raw}"))
    })?;
    Local
        .timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| SentimentError::malformed(index, format!("`timestamp` out of range: {secs}")))
}

fn parse_value(index: usize, raw: &Value) -> Result<u8, SentimentError> {
    let value = as_integer(raw).ok_or_else(|| {
        SentimentError::malformed(index, format!("`value` is not an integer: {raw}"))
    })?;
    u8::try_from(value)
        .ok()
        .filter(|v| *v <= MAX_INDEX_VALUE)
        .ok_or_else(|| SentimentError::malformed(index, format!("`value` outside 0..=100: {value}")))
}
