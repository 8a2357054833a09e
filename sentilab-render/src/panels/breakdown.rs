//! Pie chart of classification frequencies, labelled outside the rim with
//! the band name and inside each wedge with its share.

use crate::canvas::{Canvas, Rect};
use crate::text::{Anchor, Typeface};
use crate::theme::Theme;
use sentilab_core::stats::ClassificationCounts;
use sentilab_core::Classification;
use std::f64::consts::TAU;

/// A pie wedge between two angles (radians, counter-clockwise from east).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub classification: Classification,
    pub start: f64,
    pub end: f64,
    /// Fraction of the series in this band.
    pub share: f64,
}

impl Slice {
    pub fn mid_angle(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Share as a percentage with one decimal, e.g. `62.5%`.
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.share * 100.0)
    }
}

/// Wedges ordered by descending count; equal counts keep canonical order.
pub fn slices(counts: &ClassificationCounts) -> Vec<Slice> {
    let total = counts.total();
    if total == 0 {
        return Vec::new();
    }
    let mut present: Vec<(Classification, usize)> = counts.iter().collect();
    // Stable sort keeps canonical order between ties
    present.sort_by(|a, b| b.1.cmp(&a.1));

    let mut start = 0.0;
    present
        .into_iter()
        .map(|(classification, n)| {
            let share = n as f64 / total as f64;
            let end = start + share * TAU;
            let slice = Slice {
                classification,
                start,
                end,
                share,
            };
            start = end;
            slice
        })
        .collect()
}

pub fn draw(
    canvas: &mut Canvas,
    area: Rect,
    counts: &ClassificationCounts,
    face: &Typeface,
    theme: &Theme,
) {
    let wedges = slices(counts);
    if wedges.is_empty() {
        return;
    }
    let center = area.center();
    // Room outside the rim for the band names
    let radius = area.width.min(area.height) as f64 / 2.0 * 0.62;
    fill_pie(canvas, area, center, radius, &wedges, theme);

    let size = (radius * 0.16).max(6.0) as f32;
    let side_room = (area.width as f64 / 2.0 - radius * 1.12).max(1.0) as f32;
    for wedge in &wedges {
        let a = wedge.mid_angle();
        let at = |r: f64| (center.0 + r * a.cos(), center.1 - r * a.sin());

        let name = wedge.classification.label();
        let anchor = if a.cos() > 0.2 {
            Anchor::CenterLeft
        } else if a.cos() < -0.2 {
            Anchor::CenterRight
        } else {
            Anchor::Center
        };
        let name_size = face.fit(name, size, side_room);
        face.draw(canvas, name, at(radius * 1.12), name_size, theme.foreground, anchor);

        // Slivers too thin to hold their share are left bare
        if wedge.share >= 0.04 {
            let percent = wedge.percent_label();
            face.draw(canvas, &percent, at(radius * 0.6), size * 0.9, theme.background, Anchor::Center);
        }
    }
}

/// Fill the wedges as a disc of `radius` around `center`, clipped to `area`.
pub fn fill_pie(
    canvas: &mut Canvas,
    area: Rect,
    center: (f64, f64),
    radius: f64,
    wedges: &[Slice],
    theme: &Theme,
) {
    let Some(last) = wedges.last() else {
        return;
    };
    let (cx, cy) = center;
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            let dx = x as f64 + 0.5 - cx;
            let dy = cy - (y as f64 + 0.5);
            let d = dx.hypot(dy);
            let coverage = (radius + 0.5 - d).clamp(0.0, 1.0);
            if coverage <= 0.0 {
                continue;
            }
            let angle = dy.atan2(dx).rem_euclid(TAU);
            let wedge = wedges.iter().find(|w| angle < w.end).unwrap_or(last);
            canvas.blend(
                x as i64,
                y as i64,
                theme.band_color(wedge.classification),
                coverage,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::series_of;
    use image::Rgb;
    use std::f64::consts::PI;
    use Classification::*;

    #[test]
    fn slices_ordered_by_count_then_canonical() {
        let series = series_of(&[
            (60, Greed),
            (10, ExtremeFear),
            (61, Greed),
            (50, Neutral),
            (30, Fear),
        ]);
        let counts = ClassificationCounts::from_series(&series);
        let order: Vec<_> = slices(&counts).iter().map(|s| s.classification).collect();
        assert_eq!(order, vec![Greed, ExtremeFear, Fear, Neutral]);

        let last = slices(&counts).last().copied().unwrap();
        assert!((last.end - TAU).abs() < 1e-12);
    }

    #[test]
    fn largest_slice_starts_east() {
        let theme = Theme::default();
        let series = series_of(&[(10, ExtremeFear), (90, ExtremeGreed), (91, ExtremeGreed), (92, ExtremeGreed)]);
        let counts = ClassificationCounts::from_series(&series);
        let area = Rect::new(0, 0, 100, 100);
        let mut canvas = Canvas::new(100, 100, Rgb([0, 0, 0]));
        fill_pie(&mut canvas, area, area.center(), 45.0, &slices(&counts), &theme);

        // Greed wedge covers 0..3π/2; fear covers the south-east quarter
        let color_at = |angle: f64| {
            let (x, y) = (50.0 + 25.0 * angle.cos(), 50.0 - 25.0 * angle.sin());
            canvas.pixel(x as u32, y as u32)
        };
        assert_eq!(color_at(PI / 4.0), theme.band_color(ExtremeGreed));
        assert_eq!(color_at(PI), theme.band_color(ExtremeGreed));
        assert_eq!(color_at(7.0 * PI / 4.0), theme.band_color(ExtremeFear));
        assert_eq!(canvas.pixel(0, 0), Rgb([0, 0, 0]));
    }

    #[test]
    fn shares_format_with_one_decimal() {
        let series = series_of(&[(60, Greed), (61, Greed), (62, Greed), (10, ExtremeFear), (20, ExtremeFear), (30, Fear), (31, Fear), (50, Neutral)]);
        let counts = ClassificationCounts::from_series(&series);
        let labels: Vec<_> = slices(&counts).iter().map(Slice::percent_label).collect();
        assert_eq!(labels, vec!["37.5%", "25.0%", "25.0%", "12.5%"]);
    }

    #[test]
    fn band_names_are_drawn_outside_the_rim() {
        let theme = Theme::default();
        let series = series_of(&[(10, ExtremeFear), (90, ExtremeGreed)]);
        let counts = ClassificationCounts::from_series(&series);
        let area = Rect::new(0, 0, 400, 200);
        let mut canvas = Canvas::new(400, 200, Rgb([0, 0, 0]));
        draw(&mut canvas, area, &counts, &Typeface::embedded().unwrap(), &theme);

        // Pie radius is 62 around (200, 100); both names sit beyond it
        let outside = (0..400u32)
            .flat_map(|x| (0..200u32).map(move |y| (x, y)))
            .filter(|&(x, y)| {
                let (dx, dy) = (x as f64 + 0.5 - 200.0, y as f64 + 0.5 - 100.0);
                dx.hypot(dy) > 64.0 && canvas.pixel(x, y) != Rgb([0, 0, 0])
            })
            .count();
        assert!(outside > 20, "only {outside} label pixels outside the pie");
    }
}
