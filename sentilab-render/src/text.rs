//! Text drawing with the bundled DejaVu Sans face.

use crate::canvas::Canvas;
use ab_glyph::{point, Font, FontRef, GlyphId, PxScale, ScaleFont};
use image::Rgb;
use sentilab_core::SentimentError;

static DEJAVU_SANS: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Which point of the text box the draw position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    Center,
    CenterLeft,
    CenterRight,
    BottomRight,
}

pub struct Typeface {
    font: FontRef<'static>,
}

impl Typeface {
    pub fn embedded() -> Result<Self, SentimentError> {
        let font = FontRef::try_from_slice(DEJAVU_SANS)
            .map_err(|e| SentimentError::Storage(format!("load embedded font: {e}")))?;
        Ok(Self { font })
    }

    /// Advance width of one line at `size` pixels.
    pub fn width(&self, text: &str, size: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(size));
        let mut width = 0.0;
        let mut last: Option<GlyphId> = None;
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = last {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            last = Some(id);
        }
        width
    }

    /// Ascent to descent at `size` pixels.
    pub fn height(&self, size: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(size));
        scaled.ascent() - scaled.descent()
    }

    /// Largest size at which `text` fits `max_width`, capped at `size`.
    pub fn fit(&self, text: &str, size: f32, max_width: f32) -> f32 {
        let width = self.width(text, size);
        if width <= max_width || width <= 0.0 {
            size
        } else {
            size * max_width / width
        }
    }

    /// Draw one line of text placed by `anchor` at `at`.
    pub fn draw(
        &self,
        canvas: &mut Canvas,
        text: &str,
        at: (f64, f64),
        size: f32,
        color: Rgb<u8>,
        anchor: Anchor,
    ) {
        if size < 1.0 || text.is_empty() {
            return;
        }
        let scaled = self.font.as_scaled(PxScale::from(size));
        let (w, h) = (self.width(text, size), self.height(size));
        let (dx, dy) = match anchor {
            Anchor::TopLeft => (0.0, 0.0),
            Anchor::TopCenter => (w / 2.0, 0.0),
            Anchor::TopRight => (w, 0.0),
            Anchor::Center => (w / 2.0, h / 2.0),
            Anchor::CenterLeft => (0.0, h / 2.0),
            Anchor::CenterRight => (w, h / 2.0),
            Anchor::BottomRight => (w, h),
        };

        let mut caret = point(at.0 as f32 - dx, at.1 as f32 - dy + scaled.ascent());
        let mut last: Option<GlyphId> = None;
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = last {
                caret.x += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(size, caret);
            caret.x += scaled.h_advance(id);
            last = Some(id);

            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                let (ox, oy) = (bounds.min.x as i64, bounds.min.y as i64);
                outlined.draw(|gx, gy, coverage| {
                    canvas.blend(ox + gx as i64, oy + gy as i64, color, f64::from(coverage));
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    fn inked(canvas: &Canvas, x0: u32, x1: u32, y0: u32, y1: u32) -> usize {
        let mut n = 0;
        for y in y0..y1 {
            for x in x0..x1 {
                if canvas.pixel(x, y) != BLACK {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn wider_text_measures_wider() {
        let face = Typeface::embedded().unwrap();
        assert!(face.width("100", 20.0) > face.width("0", 20.0));
        assert!(face.width("Greed", 40.0) > face.width("Greed", 20.0));
        assert_eq!(face.width("", 20.0), 0.0);
    }

    #[test]
    fn fit_shrinks_only_when_needed() {
        let face = Typeface::embedded().unwrap();
        assert_eq!(face.fit("50", 20.0, 1000.0), 20.0);
        let size = face.fit("Market Statistics", 40.0, 50.0);
        assert!(size < 40.0);
        assert!(face.width("Market Statistics", size) <= 50.5);
    }

    #[test]
    fn centered_text_inks_around_anchor() {
        let face = Typeface::embedded().unwrap();
        let mut canvas = Canvas::new(200, 60, BLACK);
        face.draw(&mut canvas, "Fear", (100.0, 30.0), 24.0, WHITE, Anchor::Center);

        assert!(inked(&canvas, 70, 130, 15, 45) > 20);
        // Nothing near the far edges
        assert_eq!(inked(&canvas, 0, 40, 0, 60), 0);
        assert_eq!(inked(&canvas, 160, 200, 0, 60), 0);
    }

    #[test]
    fn right_anchor_keeps_text_left_of_point() {
        let face = Typeface::embedded().unwrap();
        let mut canvas = Canvas::new(200, 40, BLACK);
        face.draw(&mut canvas, "SentiLab", (190.0, 38.0), 14.0, WHITE, Anchor::BottomRight);
        assert!(inked(&canvas, 100, 191, 0, 40) > 10);
        assert_eq!(inked(&canvas, 192, 200, 0, 40), 0);
    }
}
