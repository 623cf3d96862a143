//! HSV color model
//!
//! Hue is in degrees with 360 wrapping to 0; saturation and value are unit
//! fractions. Conversions use the standard max/min-channel and sector
//! formulas. These are numeric paths: inputs are clamped, never rejected.

use super::rgb::Rgb;

/// HSV color: hue in degrees [0, 360), saturation and value in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue in degrees
    pub h: f64,
    /// Saturation
    pub s: f64,
    /// Value
    pub v: f64,
}

impl Hsv {
    /// Create a new HSV color
    ///
    /// Hue is reduced modulo 360; saturation and value are clamped to [0, 1].
    #[inline]
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 1.0),
            v: v.clamp(0.0, 1.0),
        }
    }

    /// Convert RGB to HSV
    ///
    /// Achromatic input (all channels equal) yields hue 0.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = rgb.r as f64 / 255.0;
        let g = rgb.g as f64 / 255.0;
        let b = rgb.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let diff = max - min;

        let h = if diff == 0.0 {
            0.0
        } else if max == r {
            (60.0 * ((g - b) / diff) + 360.0).rem_euclid(360.0)
        } else if max == g {
            (60.0 * ((b - r) / diff) + 120.0).rem_euclid(360.0)
        } else {
            (60.0 * ((r - g) / diff) + 240.0).rem_euclid(360.0)
        };

        let s = if max == 0.0 { 0.0 } else { diff / max };

        Self { h, s, v: max }
    }

    /// Convert HSV to RGB
    ///
    /// Hue is taken modulo 360 before sector selection, so 360 behaves
    /// exactly like 0. Channels are rounded to the nearest byte.
    pub fn to_rgb(&self) -> Rgb {
        let h = self.h.rem_euclid(360.0);
        let s = self.s.clamp(0.0, 1.0);
        let v = self.v.clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = v - c;

        let (r, g, b) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        let channel = |comp: f64| ((comp + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb::new(channel(r), channel(g), channel(b))
    }
}
