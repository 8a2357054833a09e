//! Plain-text "Market Statistics" block.

use super::derive::DerivedStats;

pub const REPORT_TITLE: &str = "Market Statistics";

/// One line per headline figure, without the title.
pub fn statistics_lines(stats: &DerivedStats) -> Vec<String> {
    let volatility = stats
        .std_dev
        .map(|s| format!("{s:.1}"))
        .unwrap_or_else(|| "n/a".to_string());

    vec![
        format!(
            "Current Value: {} ({})",
            stats.latest.value, stats.latest.classification
        ),
        format!(
            "{}-Day Average: {:.1}",
            stats.config.short_window, stats.short_mean
        ),
        format!(
            "{}-Day Average: {:.1}",
            stats.config.long_window, stats.long_mean
        ),
        format!("Volatility: {volatility}"),
        format!("Dominant Sentiment: {}", stats.dominant),
        format!("Data Points Analyzed: {}", stats.count),
    ]
}

/// Title plus every statistics line, newline-terminated.
pub fn market_statistics(stats: &DerivedStats) -> String {
    let mut out = format!("{REPORT_TITLE}\n");
    for line in statistics_lines(stats) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
