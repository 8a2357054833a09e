//! Exports: observation table as CSV and Parquet, statistics as JSON.
//!
//! Rows follow the series order (newest first). Rolling columns are empty in
//! CSV and null in Parquet where no full window exists. Timestamps are local
//! time in both: RFC 3339 with offset in CSV, timezone-less wall clock in
//! Parquet. Every write failure is a `StorageError`.

use std::fs;
use std::path::Path;

use polars::prelude::*;
use sentilab_core::data::{to_frame, ObservationSchema};
use sentilab_core::{DerivedStats, RollingStats, SentimentError, SentimentSeries};
use tracing::info;

pub const CSV_HEADER: [&str; 6] = [
    "timestamp",
    "value",
    "classification",
    "short_ma",
    "long_ma",
    "volatility",
];

fn storage(context: &str, path: &Path, err: impl std::fmt::Display) -> SentimentError {
    SentimentError::Storage(format!("{context} {}: {err}", path.display()))
}

fn ensure_parent(path: &Path) -> Result<(), SentimentError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| storage("create dir", parent, e))?;
    }
    Ok(())
}

fn check_aligned(series: &SentimentSeries, rolling: &RollingStats) -> Result<(), SentimentError> {
    if rolling.len() != series.len() {
        return Err(SentimentError::Storage(format!(
            "rolling columns have {} rows, series has {}",
            rolling.len(),
            series.len()
        )));
    }
    Ok(())
}

fn cell(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.6}")).unwrap_or_default()
}

// ─── CSV ────────────────────────────────────────────────────────────

/// Series and rolling columns as CSV text. Timestamps are RFC 3339 in the
/// local timezone.
pub fn series_to_csv(
    series: &SentimentSeries,
    rolling: &RollingStats,
) -> Result<String, SentimentError> {
    check_aligned(series, rolling)?;
    let csv_err = |e: &dyn std::fmt::Display| SentimentError::Storage(format!("csv: {e}"));

    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADER).map_err(|e| csv_err(&e))?;
    for (i, obs) in series.iter().enumerate() {
        wtr.write_record([
            obs.timestamp.to_rfc3339(),
            obs.value.to_string(),
            obs.classification.label().to_string(),
            cell(rolling.short_ma[i]),
            cell(rolling.long_ma[i]),
            cell(rolling.volatility[i]),
        ])
        .map_err(|e| csv_err(&e))?;
    }

    let data = wtr.into_inner().map_err(|e| csv_err(&e))?;
    String::from_utf8(data).map_err(|e| csv_err(&e))
}

pub fn export_csv(
    series: &SentimentSeries,
    rolling: &RollingStats,
    path: &Path,
) -> Result<(), SentimentError> {
    let text = series_to_csv(series, rolling)?;
    ensure_parent(path)?;
    fs::write(path, text).map_err(|e| storage("write", path, e))?;
    info!(path = %path.display(), rows = series.len(), "csv written");
    Ok(())
}

// ─── Parquet ────────────────────────────────────────────────────────

/// Write the observation frame as Parquet. Writes to a temporary file and
/// renames it into place.
pub fn export_parquet(
    series: &SentimentSeries,
    rolling: &RollingStats,
    path: &Path,
) -> Result<(), SentimentError> {
    check_aligned(series, rolling)?;
    let mut df = to_frame(series, rolling)
        .map_err(|e| SentimentError::Storage(format!("build frame: {e}")))?;
    ObservationSchema::validate(&df)
        .map_err(|e| SentimentError::Storage(format!("frame schema: {e}")))?;

    ensure_parent(path)?;
    let tmp_path = path.with_extension("parquet.tmp");
    let file = fs::File::create(&tmp_path).map_err(|e| storage("create", &tmp_path, e))?;
    ParquetWriter::new(file)
        .finish(&mut df)
        .map_err(|e| storage("write parquet", &tmp_path, e))?;
    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        storage("rename", path, e)
    })?;

    info!(path = %path.display(), rows = df.height(), "parquet written");
    Ok(())
}

// ─── JSON ───────────────────────────────────────────────────────────

pub fn stats_to_json(stats: &DerivedStats) -> Result<String, SentimentError> {
    serde_json::to_string_pretty(stats)
        .map_err(|e| SentimentError::Storage(format!("serialize stats: {e}")))
}

pub fn export_stats_json(stats: &DerivedStats, path: &Path) -> Result<(), SentimentError> {
    let json = stats_to_json(stats)?;
    ensure_parent(path)?;
    fs::write(path, json).map_err(|e| storage("write", path, e))?;
    info!(path = %path.display(), "stats json written");
    Ok(())
}
