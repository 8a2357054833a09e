//! SentiLab Runner — configuration, pipeline orchestration and exports.
//!
//! This crate builds on `sentilab-core` and `sentilab-render` to provide:
//! - TOML dashboard configuration with validated defaults
//! - The fetch → normalize → derive pipeline, optionally rendering the image
//! - CSV, Parquet and JSON exports

pub mod config;
pub mod export;
pub mod pipeline;

pub use config::{DashboardConfig, OutputConfig, SourceConfig, DEFAULT_OUTPUT};
pub use export::{export_csv, export_parquet, export_stats_json, series_to_csv, stats_to_json};
pub use pipeline::{run_dashboard, run_pipeline, PipelineOutput};
pub use sentilab_core::stats::market_statistics;
