//! Gauge of the latest reading.
//!
//! A 270° arc from 3π/4 (value 0) clockwise to −3π/4 (value 100), drawn as a
//! fading white band with a thin rim in the classification colors, labelled
//! tick marks at 0/25/50/75/100 and a glowing needle at the current value.
//! The value and its upstream label sit under the hub.

use crate::canvas::{Canvas, Rect, Stroke};
use crate::text::{Anchor, Typeface};
use crate::theme::Theme;
use sentilab_core::Observation;
use std::f64::consts::PI;

/// Angle of value 0.
pub const SWEEP_START: f64 = 3.0 * PI / 4.0;
/// Angular extent from 0 to 100.
pub const SWEEP: f64 = 3.0 * PI / 2.0;

const RADIUS: f64 = 0.8;
const GRADIENT_DEPTH: f64 = 80.0 * 0.003;
const RIM: f64 = 0.05;
const TICKS: [f64; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];
const TICK_LABEL_RADIUS: f64 = 1.06;

/// Needle angle (radians, counter-clockwise from east) for a value.
pub fn needle_angle(value: f64) -> f64 {
    SWEEP_START - value.clamp(0.0, 100.0) / 100.0 * SWEEP
}

/// Value pointed at by `angle`, or `None` outside the sweep.
pub fn angle_to_value(angle: f64) -> Option<f64> {
    if angle.abs() > SWEEP_START {
        return None;
    }
    Some((SWEEP_START - angle) / SWEEP * 100.0)
}

pub fn draw(canvas: &mut Canvas, area: Rect, latest: &Observation, face: &Typeface, theme: &Theme) {
    let (cx, cy) = area.center();
    // Pixels per gauge unit; the arc plus rim and ticks fit within ±1.
    let unit = area.width.min(area.height) as f64 / 2.0 * 0.85;
    if unit < 4.0 {
        return;
    }

    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            let dx = (x as f64 + 0.5 - cx) / unit;
            let dy = (cy - (y as f64 + 0.5)) / unit;
            let d = dx.hypot(dy);
            let Some(v) = angle_to_value(dy.atan2(dx)) else {
                continue;
            };

            let depth = RADIUS - d;
            if (0.0..GRADIENT_DEPTH).contains(&depth) {
                let alpha = 1.0 - depth / GRADIENT_DEPTH;
                canvas.blend(x as i64, y as i64, theme.foreground, alpha * 0.85);
            } else if d > RADIUS && d <= RADIUS + RIM {
                canvas.blend(x as i64, y as i64, theme.value_color(v), 0.9);
            }
        }
    }

    let at = |angle: f64, r: f64| (cx + r * unit * angle.cos(), cy - r * unit * angle.sin());
    let scale = (unit / 150.0).max(1.0);

    let tick_size = (0.1 * unit) as f32;
    for tick in TICKS {
        let a = needle_angle(tick);
        canvas.line(
            at(a, RADIUS + RIM + 0.03),
            at(a, RADIUS + RIM + 0.13),
            Stroke::solid(theme.accent, 2.0 * scale),
        );
        let label = format!("{tick:.0}");
        face.draw(canvas, &label, at(a, TICK_LABEL_RADIUS), tick_size, theme.accent, Anchor::Center);
    }

    // Glow: wide faint passes first, narrow opaque core last
    let a = needle_angle(f64::from(latest.value));
    for i in (0..5).rev() {
        let width = (1.0 + i as f64) * scale;
        let alpha = 1.0 - i as f64 / 5.0;
        canvas.line((cx, cy), at(a, RADIUS), Stroke::solid(theme.needle, width).with_alpha(alpha));
    }
    canvas.fill_circle((cx, cy), 0.04 * unit, theme.needle, 1.0);

    let band = theme.band_color(latest.classification);
    let value = latest.value.to_string();
    face.draw(canvas, &value, (cx, cy + 0.3 * unit), (0.22 * unit) as f32, band, Anchor::Center);
    let label = latest.classification.label();
    let size = face.fit(label, (0.1 * unit) as f32, (1.2 * unit) as f32);
    face.draw(canvas, label, (cx, cy + 0.55 * unit), size, band, Anchor::Center);
}
