//! Pipeline orchestration: fetch → normalize → derive → (render).
//!
//! Each stage hands its output to the next by value; nothing is cached
//! between runs.

use crate::config::DashboardConfig;
use sentilab_core::{
    derive_with, normalize, DerivedStats, RollingStats, SentimentError, SentimentProvider,
    SentimentSeries,
};
use sentilab_render::render_dashboard;
use tracing::{info, warn};

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub series: SentimentSeries,
    pub stats: DerivedStats,
}

impl PipelineOutput {
    pub fn rolling(&self) -> &RollingStats {
        &self.stats.rolling
    }
}

/// Fetch, normalize and derive statistics.
pub fn run_pipeline(
    config: &DashboardConfig,
    provider: &dyn SentimentProvider,
) -> Result<PipelineOutput, SentimentError> {
    config.validate()?;
    let limit = config.source.limit;

    info!(provider = provider.name(), limit, "fetching sentiment payload");
    let raw = provider.fetch(limit)?;

    let mut series = normalize(&raw)?;
    if series.len() > limit as usize {
        warn!(
            received = series.len(),
            limit, "source returned more records than requested; keeping the newest"
        );
        series = SentimentSeries::new(series.observations()[..limit as usize].to_vec());
    }

    let stats = derive_with(&series, &config.stats)?;
    info!(
        count = stats.count,
        latest = stats.latest.value,
        dominant = %stats.dominant,
        "statistics derived"
    );

    Ok(PipelineOutput { series, stats })
}

/// Run the pipeline and write the dashboard image to the configured path.
pub fn run_dashboard(
    config: &DashboardConfig,
    provider: &dyn SentimentProvider,
) -> Result<PipelineOutput, SentimentError> {
    let output = run_pipeline(config, provider)?;
    render_dashboard(
        &output.series,
        &output.stats,
        &config.render_options(),
        &config.output.path,
    )?;
    Ok(output)
}
