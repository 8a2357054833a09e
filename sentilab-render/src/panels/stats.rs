//! Statistics panel: the market statistics lines on the left, one
//! horizontal bar per headline figure on the right.

use crate::canvas::{Canvas, Rect};
use crate::text::{Anchor, Typeface};
use crate::theme::Theme;
use image::Rgb;
use sentilab_core::stats::statistics_lines;
use sentilab_core::DerivedStats;

/// Standard deviation mapped to a full bar.
const STD_DEV_SCALE: f64 = 50.0;

/// One bar: filled fraction in `[0, 1]` and its color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatBar {
    pub fraction: f64,
    pub color: Rgb<u8>,
}

/// Bars for current value, short mean, long mean, volatility and the share
/// of the dominant classification, in that order.
pub fn bars(stats: &DerivedStats, theme: &Theme) -> Vec<StatBar> {
    let value = f64::from(stats.latest.value);
    let bar = |fraction: f64, color| StatBar {
        fraction: fraction.clamp(0.0, 1.0),
        color,
    };
    vec![
        bar(value / 100.0, theme.band_color(stats.latest.classification)),
        bar(stats.short_mean / 100.0, theme.short_ma),
        bar(stats.long_mean / 100.0, theme.long_ma),
        bar(stats.std_dev.unwrap_or(0.0) / STD_DEV_SCALE, theme.foreground),
        bar(
            stats.frequencies.share(stats.dominant),
            theme.band_color(stats.dominant),
        ),
    ]
}

pub fn draw(canvas: &mut Canvas, area: Rect, stats: &DerivedStats, face: &Typeface, theme: &Theme) {
    let text_width = area.width / 2;
    let text = Rect::new(area.x, area.y, text_width, area.height);
    let gauges = Rect::new(area.x + text_width, area.y, area.width - text_width, area.height);
    draw_lines(canvas, text, &statistics_lines(stats), face, theme);
    draw_bars(canvas, gauges.inset(gauges.width.min(gauges.height) / 20), &bars(stats, theme), theme);
}

fn draw_lines(canvas: &mut Canvas, area: Rect, lines: &[String], face: &Typeface, theme: &Theme) {
    if lines.is_empty() || area.height == 0 {
        return;
    }
    let row = area.height as f64 / lines.len() as f64;
    let widest = lines.iter().max_by(|a, b| {
        face.width(a, 1.0).total_cmp(&face.width(b, 1.0))
    });
    let size = widest.map_or(0.0, |l| face.fit(l, (row * 0.62) as f32, area.width as f32 - 4.0));
    for (i, line) in lines.iter().enumerate() {
        let at = (area.x as f64 + 2.0, area.y as f64 + row * (i as f64 + 0.5));
        face.draw(canvas, line, at, size, theme.foreground, Anchor::CenterLeft);
    }
}

fn draw_bars(canvas: &mut Canvas, area: Rect, rows: &[StatBar], theme: &Theme) {
    if rows.is_empty() {
        return;
    }
    let row_height = area.height / rows.len() as u32;
    if row_height < 2 || area.width == 0 {
        return;
    }
    let thickness = (row_height * 3 / 5).max(1);

    for (i, row) in rows.iter().enumerate() {
        let y = area.y + i as u32 * row_height + (row_height - thickness) / 2;
        let track = Rect::new(area.x, y, area.width, thickness);
        canvas.fill_rect(track, theme.muted, 0.25);
        let filled = (row.fraction * area.width as f64).round() as u32;
        canvas.fill_rect(Rect::new(area.x, y, filled, thickness), row.color, 0.9);
        canvas.stroke_rect(track, theme.foreground, 0.3);
    }
}
