//! Trend panel: index value over time with both moving averages and a
//! volatility band around the long average.
//!
//! Series are stored newest first; the x axis runs oldest to newest. The
//! value axis is labelled on the left, the first and last dates along the
//! bottom, with a legend in the top right corner.

use super::{label_size, value_to_y};
use crate::canvas::{Canvas, Rect, Stroke};
use crate::text::{Anchor, Typeface};
use crate::theme::Theme;
use image::Rgb;
use sentilab_core::{DerivedStats, SentimentSeries};

const GRID_LEVELS: [f64; 3] = [25.0, 50.0, 75.0];
const AXIS_LEVELS: [f64; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];
const DASH: f64 = 8.0;
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Plot area inside `area`, leaving the value labels on the left and the
/// dates underneath.
pub fn plot_area(area: Rect) -> Rect {
    let size = label_size(area);
    let left = (size * 2.4).ceil() as u32;
    let bottom = (size * 1.5).ceil() as u32;
    Rect::new(
        area.x + left.min(area.width),
        area.y,
        area.width.saturating_sub(left),
        area.height.saturating_sub(bottom),
    )
}

/// Horizontal position of chronological index `k` out of `n` points.
fn x_at(plot: Rect, k: usize, n: usize) -> f64 {
    if n < 2 {
        return plot.center().0;
    }
    plot.x as f64 + k as f64 / (n - 1) as f64 * plot.width.saturating_sub(1) as f64
}

/// Split a newest-first optional series into chronological runs of defined
/// values. Each entry is `(chronological index, value)`.
pub fn defined_runs(values: &[Option<f64>]) -> Vec<Vec<(usize, f64)>> {
    let n = values.len();
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for k in 0..n {
        match values[n - 1 - k] {
            Some(v) => current.push((k, v)),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

pub fn draw(
    canvas: &mut Canvas,
    area: Rect,
    series: &SentimentSeries,
    stats: &DerivedStats,
    face: &Typeface,
    theme: &Theme,
) {
    let plot = plot_area(area);
    let rolling = &stats.rolling;
    let n = series.len();
    let size = label_size(area);

    for level in GRID_LEVELS {
        let y = value_to_y(plot, level);
        canvas.line(
            (plot.x as f64, y),
            (plot.right() as f64, y),
            Stroke::solid(theme.muted, 1.0).with_alpha(0.2),
        );
    }
    for level in AXIS_LEVELS {
        let at = (plot.x as f64 - 3.0, value_to_y(plot, level));
        face.draw(canvas, &format!("{level:.0}"), at, size, theme.muted, Anchor::CenterRight);
    }
    if n == 0 {
        return;
    }

    // Volatility band: long MA ± rolling std, one column strip per point
    for k in 0..n {
        let i = n - 1 - k;
        let (Some(ma), Some(vol)) = (rolling.long_ma[i], rolling.volatility[i]) else {
            continue;
        };
        let x0 = x_at(plot, k, n);
        let x1 = if k + 1 < n { x_at(plot, k + 1, n) } else { x0 + 1.0 };
        let top = value_to_y(plot, ma + vol);
        let bottom = value_to_y(plot, ma - vol);
        let strip = Rect::new(
            x0.floor() as u32,
            top.floor() as u32,
            (x1.floor() - x0.floor()).max(1.0) as u32,
            (bottom - top).ceil().max(1.0) as u32,
        );
        canvas.fill_rect(strip, theme.foreground, 0.1);
    }

    let points: Vec<(f64, f64)> = series
        .chronological()
        .enumerate()
        .map(|(k, obs)| (x_at(plot, k, n), value_to_y(plot, f64::from(obs.value))))
        .collect();
    if points.len() == 1 {
        canvas.fill_circle(points[0], 2.0, theme.accent, 1.0);
    } else {
        canvas.polyline(&points, Stroke::solid(theme.accent, 2.0));
    }

    for (values, color) in [
        (&rolling.short_ma, theme.short_ma),
        (&rolling.long_ma, theme.long_ma),
    ] {
        for run in defined_runs(values) {
            let line: Vec<(f64, f64)> = run
                .iter()
                .map(|&(k, v)| (x_at(plot, k, n), value_to_y(plot, v)))
                .collect();
            canvas.polyline(&line, Stroke::dashed(color, 1.5, DASH));
        }
    }

    draw_dates(canvas, plot, series, face, size, theme);
    draw_legend(canvas, plot, stats, face, size, theme);
}

fn draw_dates(
    canvas: &mut Canvas,
    plot: Rect,
    series: &SentimentSeries,
    face: &Typeface,
    size: f32,
    theme: &Theme,
) {
    let y = plot.bottom() as f64 + 2.0;
    let mut dates = series.chronological();
    let Some(first) = dates.next() else {
        return;
    };
    let first_label = first.timestamp.format(DATE_FORMAT).to_string();
    match dates.last() {
        Some(last) => {
            face.draw(canvas, &first_label, (plot.x as f64, y), size, theme.muted, Anchor::TopLeft);
            let last_label = last.timestamp.format(DATE_FORMAT).to_string();
            face.draw(canvas, &last_label, (plot.right() as f64, y), size, theme.muted, Anchor::TopRight);
        }
        None => {
            face.draw(canvas, &first_label, (plot.center().0, y), size, theme.muted, Anchor::TopCenter);
        }
    }
}

/// Legend entries: label and line color, value line first.
pub fn legend(stats: &DerivedStats, theme: &Theme) -> Vec<(String, Rgb<u8>)> {
    vec![
        ("Index".to_string(), theme.accent),
        (format!("{}-day MA", stats.config.short_window), theme.short_ma),
        (format!("{}-day MA", stats.config.long_window), theme.long_ma),
    ]
}

fn draw_legend(
    canvas: &mut Canvas,
    plot: Rect,
    stats: &DerivedStats,
    face: &Typeface,
    size: f32,
    theme: &Theme,
) {
    let line_height = f64::from(face.height(size));
    let right = plot.right() as f64 - 4.0;
    let sample = f64::from(size) * 1.6;
    for (i, (label, color)) in legend(stats, theme).into_iter().enumerate() {
        let y = plot.y as f64 + line_height * (i as f64 + 0.8);
        face.draw(canvas, &label, (right, y), size, theme.foreground, Anchor::CenterRight);
        let text_left = right - f64::from(face.width(&label, size)) - 4.0;
        canvas.line((text_left - sample, y), (text_left, y), Stroke::solid(color, 2.0));
    }
}
