//! Histogram of index values over a labelled 0..100 axis.

use crate::canvas::{Canvas, Rect};
use crate::panels::label_size;
use crate::text::{Anchor, Typeface};
use crate::theme::Theme;
use sentilab_core::stats::Histogram;

const AXIS_LABELS: [u32; 5] = [0, 25, 50, 75, 100];

/// Area left for the bars once the axis strip is taken off the bottom.
pub fn bar_area(area: Rect) -> Rect {
    let strip = (label_size(area) * 1.5).ceil() as u32;
    Rect::new(area.x, area.y, area.width, area.height.saturating_sub(strip))
}

pub fn draw(canvas: &mut Canvas, area: Rect, histogram: &Histogram, face: &Typeface, theme: &Theme) {
    let max = histogram.max_count();
    let bins = histogram.bins.len() as u32;
    if max == 0 || bins == 0 || area.width < bins {
        return;
    }

    let bars = bar_area(area);
    let slot = bars.width / bins;
    let gap = (slot / 8).min(2);
    for (i, bin) in histogram.bins.iter().enumerate() {
        if bin.count == 0 {
            continue;
        }
        let height = (bin.count as f64 / max as f64 * bars.height as f64).round() as u32;
        let bar = Rect::new(
            bars.x + i as u32 * slot + gap,
            bars.bottom() - height,
            slot - 2 * gap,
            height,
        );
        canvas.fill_rect(bar, theme.accent, 0.5);
        canvas.stroke_rect(bar, theme.accent, 0.9);
    }

    canvas.fill_rect(Rect::new(bars.x, bars.bottom(), slot * bins, 1), theme.muted, 0.6);
    let size = label_size(area);
    for value in AXIS_LABELS {
        let x = bars.x as f64 + f64::from(value) / 100.0 * f64::from(slot * bins);
        let anchor = match value {
            0 => Anchor::TopLeft,
            100 => Anchor::TopRight,
            _ => Anchor::TopCenter,
        };
        let at = (x, bars.bottom() as f64 + 2.0);
        face.draw(canvas, &value.to_string(), at, size, theme.muted, anchor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::series_from_values;
    use image::Rgb;
    use std::num::NonZeroU8;

    #[test]
    fn tallest_bin_reaches_the_top() {
        let theme = Theme::default();
        let series = series_from_values(&[2, 3, 4, 97]);
        let histogram = Histogram::from_series(&series, NonZeroU8::new(5).unwrap());
        let area = Rect::new(0, 0, 200, 100);
        let mut canvas = Canvas::new(200, 100, Rgb([0, 0, 0]));
        draw(&mut canvas, area, &histogram, &Typeface::embedded().unwrap(), &theme);

        // 20 bins of 10px; first bin holds 3 values, last bin holds 1
        let floor = bar_area(area).bottom() - 2;
        assert_ne!(canvas.pixel(5, 1), Rgb([0, 0, 0]));
        assert_eq!(canvas.pixel(195, 1), Rgb([0, 0, 0]));
        assert_ne!(canvas.pixel(195, floor), Rgb([0, 0, 0]));
        // Empty bins stay untouched
        assert_eq!(canvas.pixel(100, floor), Rgb([0, 0, 0]));
    }

    #[test]
    fn axis_labels_sit_below_the_bars() {
        let theme = Theme::default();
        let series = series_from_values(&[40, 60]);
        let histogram = Histogram::from_series(&series, NonZeroU8::new(5).unwrap());
        let area = Rect::new(0, 0, 200, 100);
        let mut canvas = Canvas::new(200, 100, Rgb([0, 0, 0]));
        draw(&mut canvas, area, &histogram, &Typeface::embedded().unwrap(), &theme);

        let strip_top = bar_area(area).bottom() + 1;
        let inked = |x0: u32, x1: u32| {
            (x0..x1).any(|x| (strip_top..100).any(|y| canvas.pixel(x, y) != Rgb([0, 0, 0])))
        };
        assert!(inked(0, 12), "missing 0 label");
        assert!(inked(90, 110), "missing 50 label");
        assert!(inked(180, 200), "missing 100 label");
    }
}
