//! SentiLab Render - static dashboard image for the sentiment index
//!
//! Draws a titled 3x3 grid of panels onto one PNG, with text set in the
//! bundled DejaVu Sans face:
//! - Gauge of the latest reading
//! - Trend line with short/long moving averages and a volatility band
//! - Value histogram
//! - Classification breakdown pie
//! - Correlation placeholder
//! - Market statistics text and bars

pub mod canvas;
pub mod dashboard;
pub mod layout;
pub mod panels;
pub mod text;
pub mod theme;

pub use dashboard::{
    render, render_dashboard, RenderOptions, FIGURE_TITLE, MAX_SIDE, MIN_HEIGHT, MIN_WIDTH, WATERMARK,
};
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;
