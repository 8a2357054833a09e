//! Figure composition and PNG output.

use crate::canvas::Canvas;
use crate::layout::{Grid, PanelSlot};
use crate::panels;
use crate::text::{Anchor, Typeface};
use crate::theme::Theme;
use image::{ImageFormat, RgbImage};
use sentilab_core::{DerivedStats, SentimentError, SentimentSeries};
use std::path::Path;
use tracing::{debug, info};

/// Smallest figure the grid can lay out.
pub const MIN_WIDTH: u32 = 300;
pub const MIN_HEIGHT: u32 = 200;
/// Largest figure side accepted; bounds the pixel buffer allocation.
pub const MAX_SIDE: u32 = 8000;

pub const FIGURE_TITLE: &str = "Crypto Market Sentiment Analysis Dashboard";
pub const WATERMARK: &str = "Created with SentiLab";

/// Figure size and palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 2000,
            height: 1200,
            theme: Theme::default(),
        }
    }
}

impl RenderOptions {
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), SentimentError> {
        if self.width < MIN_WIDTH || self.height < MIN_HEIGHT {
            return Err(SentimentError::InvalidConfig(format!(
                "image size {}x{} is below the minimum {MIN_WIDTH}x{MIN_HEIGHT}",
                self.width, self.height
            )));
        }
        if self.width > MAX_SIDE || self.height > MAX_SIDE {
            return Err(SentimentError::InvalidConfig(format!(
                "image size {}x{} exceeds the maximum {MAX_SIDE}x{MAX_SIDE}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Draw every panel for `series` and its statistics.
pub fn render(
    series: &SentimentSeries,
    stats: &DerivedStats,
    options: &RenderOptions,
) -> Result<RgbImage, SentimentError> {
    options.validate()?;
    if series.is_empty() {
        return Err(SentimentError::InsufficientData {
            needed: 1,
            available: 0,
        });
    }

    let theme = &options.theme;
    let mut canvas = Canvas::new(options.width, options.height, theme.background);
    let grid = Grid::new(options.width, options.height);
    let face = Typeface::embedded()?;

    let title = grid.title();
    let size = face.fit(FIGURE_TITLE, title.height as f32 * 0.7, title.width as f32);
    face.draw(&mut canvas, FIGURE_TITLE, title.center(), size, theme.foreground, Anchor::Center);

    for slot in PanelSlot::ALL {
        let area = panels::frame(&mut canvas, grid.slot(slot), slot.title(), &face, theme);
        debug!(?slot, ?area, "drawing panel");
        match slot {
            PanelSlot::Gauge => panels::gauge::draw(&mut canvas, area, &stats.latest, &face, theme),
            PanelSlot::Trend => panels::trend::draw(&mut canvas, area, series, stats, &face, theme),
            PanelSlot::Distribution => {
                panels::distribution::draw(&mut canvas, area, &stats.distribution, &face, theme)
            }
            PanelSlot::Breakdown => {
                panels::breakdown::draw(&mut canvas, area, &stats.frequencies, &face, theme)
            }
            PanelSlot::Correlation => panels::placeholder::draw(&mut canvas, area, &face, theme),
            PanelSlot::Stats => panels::stats::draw(&mut canvas, area, stats, &face, theme),
        }
    }

    // Watermark in the bottom-right gutter
    let gutter = grid.gutter() as f64;
    let corner = (options.width as f64 - gutter, options.height as f64 - 1.0);
    let size = (gutter * 0.8).max(6.0) as f32;
    face.draw(&mut canvas, WATERMARK, corner, size, theme.muted, Anchor::BottomRight);

    Ok(canvas.into_image())
}

/// Render and write a PNG to `path`, creating parent directories.
pub fn render_dashboard(
    series: &SentimentSeries,
    stats: &DerivedStats,
    options: &RenderOptions,
    path: &Path,
) -> Result<(), SentimentError> {
    let image = render(series, stats, options)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            SentimentError::Storage(format!("create {}: {e}", parent.display()))
        })?;
    }
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| SentimentError::Storage(format!("write {}: {e}", path.display())))?;

    info!(
        path = %path.display(),
        width = options.width,
        height = options.height,
        "dashboard written"
    );
    Ok(())
}
