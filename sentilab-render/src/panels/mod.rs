//! Dashboard panels. Each panel draws into the rectangle it is given and
//! reads only the series and derived statistics passed in.

pub mod breakdown;
pub mod distribution;
pub mod gauge;
pub mod placeholder;
pub mod stats;
pub mod trend;

use crate::canvas::{Canvas, Rect};
use crate::text::{Anchor, Typeface};
use crate::theme::Theme;

/// Title text size for a panel of this size.
fn title_size(area: Rect) -> f32 {
    (area.height as f32 / 12.0).clamp(8.0, 28.0)
}

/// Axis and label text size for a content area.
pub(crate) fn label_size(area: Rect) -> f32 {
    (area.width.min(area.height) as f32 / 16.0).clamp(7.0, 18.0)
}

/// Draw the panel surface and its title; returns the content area.
pub fn frame(canvas: &mut Canvas, area: Rect, title: &str, face: &Typeface, theme: &Theme) -> Rect {
    canvas.fill_rect(area, theme.panel, 1.0);
    canvas.stroke_rect(area, theme.foreground, 0.12);

    let size = title_size(area);
    let (strip, body) = area.split_top((size * 1.8).ceil() as u32);
    let size = face.fit(title, size, strip.width.saturating_sub(8) as f32);
    face.draw(canvas, title, strip.center(), size, theme.accent, Anchor::Center);
    canvas.fill_rect(
        Rect::new(strip.x + strip.width / 4, strip.bottom().saturating_sub(1), strip.width / 2, 1),
        theme.accent,
        0.4,
    );

    body.inset(area.width.min(area.height) / 32 + 4)
}

/// Map an index value (0..=100) to a row inside `plot`, 100 at the top.
pub(crate) fn value_to_y(plot: Rect, value: f64) -> f64 {
    let frac = value.clamp(0.0, 100.0) / 100.0;
    plot.y as f64 + (1.0 - frac) * plot.height.saturating_sub(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn frame_returns_area_below_title() {
        let face = Typeface::embedded().unwrap();
        let theme = Theme::default();
        let mut canvas = Canvas::new(400, 240, Rgb([0, 0, 0]));
        let area = Rect::new(0, 0, 400, 240);
        let body = frame(&mut canvas, area, "Sentiment Distribution", &face, &theme);

        assert!(body.y > (title_size(area) * 1.8) as u32);
        assert!(body.bottom() <= area.bottom() && body.right() <= area.right());
        // Title text lands in the strip with the accent color
        let cyan = |x, y| {
            let Rgb([r, g, _]) = canvas.pixel(x, y);
            g > 200 && r < 60
        };
        let strip_has_accent = (0..400).any(|x| (0..30).any(|y| cyan(x, y)));
        assert!(strip_has_accent);
    }
}
