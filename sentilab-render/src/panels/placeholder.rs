//! Reserved panel for cross-asset correlation. Drawn as a hatched frame
//! with a caption.

use crate::canvas::{Canvas, Rect, Stroke};
use crate::panels::label_size;
use crate::text::{Anchor, Typeface};
use crate::theme::Theme;

const SPACING: u32 = 16;
pub const CAPTION: [&str; 2] = ["Correlation Analysis", "(Premium Feature)"];

pub fn draw(canvas: &mut Canvas, area: Rect, face: &Typeface, theme: &Theme) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let stroke = Stroke::solid(theme.muted, 1.0).with_alpha(0.15);
    let (x0, y0) = (area.x as f64, area.y as f64);
    let (w, h) = (area.width as f64, area.height as f64);

    // Diagonals x - y = c, clipped to the rectangle
    let mut c = -h;
    while c < w {
        let start = if c >= 0.0 { (x0 + c, y0) } else { (x0, y0 - c) };
        let run = (w - c.max(0.0)).min(h + c.min(0.0));
        let end = (start.0 + run, start.1 + run);
        canvas.line(start, end, stroke);
        c += SPACING as f64;
    }
    canvas.stroke_rect(area, theme.muted, 0.4);

    let size = face.fit(CAPTION[0], label_size(area) * 1.3, w as f32 * 0.9);
    let (cx, cy) = area.center();
    let line = f64::from(face.height(size));
    face.draw(canvas, CAPTION[0], (cx, cy - line * 0.6), size, theme.accent, Anchor::Center);
    face.draw(canvas, CAPTION[1], (cx, cy + line * 0.6), size * 0.8, theme.muted, Anchor::Center);
}
