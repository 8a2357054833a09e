//! Raster drawing primitives on top of `image::RgbImage`.
//!
//! Coordinates are pixels with the origin at the top-left. Strokes are
//! anti-aliased by distance to the segment; every draw call alpha-blends
//! onto what is already there.

use image::{Rgb, RgbImage};

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (
            self.x as f64 + self.width as f64 / 2.0,
            self.y as f64 + self.height as f64 / 2.0,
        )
    }

    /// Shrink by `margin` on every side, never below zero size.
    pub fn inset(&self, margin: u32) -> Rect {
        let m = margin.min(self.width / 2).min(self.height / 2);
        Rect::new(self.x + m, self.y + m, self.width - 2 * m, self.height - 2 * m)
    }

    /// Split off a band of `height` pixels at the top.
    pub fn split_top(&self, height: u32) -> (Rect, Rect) {
        let h = height.min(self.height);
        (
            Rect::new(self.x, self.y, self.width, h),
            Rect::new(self.x, self.y + h, self.width, self.height - h),
        )
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Stroke style for lines and polylines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb<u8>,
    pub width: f64,
    pub alpha: f64,
    /// Dash length in pixels; `None` draws a solid line.
    pub dash: Option<f64>,
}

impl Stroke {
    pub fn solid(color: Rgb<u8>, width: f64) -> Self {
        Self {
            color,
            width,
            alpha: 1.0,
            dash: None,
        }
    }

    pub fn dashed(color: Rgb<u8>, width: f64, dash: f64) -> Self {
        Self {
            dash: Some(dash),
            ..Self::solid(color, width)
        }
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }
}

/// Blend `color` over `base` with opacity `alpha`.
pub fn mix(base: Rgb<u8>, color: Rgb<u8>, alpha: f64) -> Rgb<u8> {
    let a = alpha.clamp(0.0, 1.0);
    let channel = |b: u8, c: u8| ((1.0 - a) * b as f64 + a * c as f64).round() as u8;
    Rgb([
        channel(base.0[0], color.0[0]),
        channel(base.0[1], color.0[1]),
        channel(base.0[2], color.0[2]),
    ])
}

/// Drawing surface.
pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            img: RgbImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.img.get_pixel(x, y)
    }

    pub fn into_image(self) -> RgbImage {
        self.img
    }

    /// Alpha-blend one pixel; out-of-bounds coordinates are ignored.
    pub fn blend(&mut self, x: i64, y: i64, color: Rgb<u8>, alpha: f64) {
        if x < 0 || y < 0 || alpha <= 0.0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.img.width() || y >= self.img.height() {
            return;
        }
        let px = self.img.get_pixel_mut(x, y);
        *px = mix(*px, color, alpha);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgb<u8>, alpha: f64) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.blend(x as i64, y as i64, color, alpha);
            }
        }
    }

    /// One-pixel outline just inside `rect`.
    pub fn stroke_rect(&mut self, rect: Rect, color: Rgb<u8>, alpha: f64) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        let (l, t) = (rect.x as i64, rect.y as i64);
        let (r, b) = (rect.right() as i64 - 1, rect.bottom() as i64 - 1);
        for x in l..=r {
            self.blend(x, t, color, alpha);
            if b != t {
                self.blend(x, b, color, alpha);
            }
        }
        for y in (t + 1)..b {
            self.blend(l, y, color, alpha);
            if r != l {
                self.blend(r, y, color, alpha);
            }
        }
    }

    pub fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Rgb<u8>, alpha: f64) {
        let (cx, cy) = center;
        let x0 = (cx - radius - 1.0).floor() as i64;
        let x1 = (cx + radius + 1.0).ceil() as i64;
        let y0 = (cy - radius - 1.0).floor() as i64;
        let y1 = (cy + radius + 1.0).ceil() as i64;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = ((x as f64 + 0.5 - cx).powi(2) + (y as f64 + 0.5 - cy).powi(2)).sqrt();
                let coverage = (radius + 0.5 - d).clamp(0.0, 1.0);
                self.blend(x, y, color, alpha * coverage);
            }
        }
    }

    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), stroke: Stroke) {
        self.segment(from, to, stroke, 0.0);
    }

    /// Connected segments; dashes continue across joints.
    pub fn polyline(&mut self, points: &[(f64, f64)], stroke: Stroke) {
        let mut travelled = 0.0;
        for pair in points.windows(2) {
            self.segment(pair[0], pair[1], stroke, travelled);
            travelled += distance(pair[0], pair[1]);
        }
    }

    fn segment(&mut self, from: (f64, f64), to: (f64, f64), stroke: Stroke, offset: f64) {
        let half = stroke.width / 2.0;
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let len_sq = dx * dx + dy * dy;
        let len = len_sq.sqrt();

        let x0 = (from.0.min(to.0) - half - 1.0).floor() as i64;
        let x1 = (from.0.max(to.0) + half + 1.0).ceil() as i64;
        let y0 = (from.1.min(to.1) - half - 1.0).floor() as i64;
        let y1 = (from.1.max(to.1) + half + 1.0).ceil() as i64;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = (x as f64 + 0.5, y as f64 + 0.5);
                let t = if len_sq > 0.0 {
                    (((p.0 - from.0) * dx + (p.1 - from.1) * dy) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };

                if let Some(dash) = stroke.dash {
                    let along = offset + t * len;
                    if (along / dash).floor() as i64 % 2 == 1 {
                        continue;
                    }
                }

                let closest = (from.0 + t * dx, from.1 + t * dy);
                let coverage = (half + 0.5 - distance(p, closest)).clamp(0.0, 1.0);
                self.blend(x, y, stroke.color, stroke.alpha * coverage);
            }
        }
    }
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}
