//! Cyberpunk theme tokens for the dashboard image
//!
//! # Color Palette
//! - **Background**: Deep indigo (figure surface)
//! - **Panel**: Slightly lifted indigo (panel surface)
//! - **Accent**: Electric cyan (titles, tick labels, value line, histogram)
//! - **Short MA**: Yellow
//! - **Long MA**: Magenta
//! - **Needle**: Red
//! - **Band colors**: one per classification, fear red through greed green

use image::Rgb;
use sentilab_core::Classification;

/// Dashboard theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Figure background
    pub background: Rgb<u8>,
    /// Panel surface
    pub panel: Rgb<u8>,
    /// Electric cyan accent
    pub accent: Rgb<u8>,
    /// Short moving average line
    pub short_ma: Rgb<u8>,
    /// Long moving average line
    pub long_ma: Rgb<u8>,
    /// Gauge needle
    pub needle: Rgb<u8>,
    /// Gauge arc, volatility band, stat bar outlines
    pub foreground: Rgb<u8>,
    /// Grid lines, axis labels and watermark
    pub muted: Rgb<u8>,
    /// Classification colors in canonical order
    pub bands: [Rgb<u8>; 5],
}

impl Default for Theme {
    fn default() -> Self {
        Self::cyberpunk()
    }
}

impl Theme {
    pub fn cyberpunk() -> Self {
        Self {
            background: Rgb([33, 41, 70]),
            panel: Rgb([40, 50, 84]),
            accent: Rgb([0, 255, 255]),
            short_ma: Rgb([255, 255, 0]),
            long_ma: Rgb([255, 0, 255]),
            needle: Rgb([255, 0, 0]),
            foreground: Rgb([255, 255, 255]),
            muted: Rgb([128, 128, 128]),
            bands: [
                Rgb([0xFF, 0x27, 0x00]),
                Rgb([0xFF, 0x8E, 0x00]),
                Rgb([0xFF, 0xD7, 0x00]),
                Rgb([0x7C, 0xFF, 0x00]),
                Rgb([0x00, 0xFF, 0x00]),
            ],
        }
    }

    /// Color for a classification band
    pub fn band_color(&self, classification: Classification) -> Rgb<u8> {
        let idx = Classification::ALL
            .iter()
            .position(|c| *c == classification)
            .unwrap_or(0);
        self.bands[idx]
    }

    /// Color for an index value, via its band
    pub fn value_color(&self, value: f64) -> Rgb<u8> {
        let v = value.round().clamp(0.0, 100.0) as u8;
        self.band_color(Classification::from_value(v))
    }
}
