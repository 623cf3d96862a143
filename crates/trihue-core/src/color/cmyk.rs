//! CMYK color model
//!
//! CMYK values travel in two conventions depending on call context: device
//! bytes (0-255, what an ICC transform consumes) and percentages (0-100,
//! what sliders and print workflows show). Both are explicit types here and
//! the scaling between them is always named, never implied.
//!
//! The `*_fast` conversions are the profile-free approximations; for
//! print-accurate values go through [`crate::ProfileConverter`] instead.
//! The two can disagree noticeably and are deliberately kept apart.

use super::rgb::Rgb;

/// CMYK as device bytes, 0-255 per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cmyk {
    /// Cyan component
    pub c: u8,
    /// Magenta component
    pub m: u8,
    /// Yellow component
    pub y: u8,
    /// Key (black) component
    pub k: u8,
}

/// CMYK as integer percentages, 0-100 per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CmykPercent {
    /// Cyan percentage
    pub c: u8,
    /// Magenta percentage
    pub m: u8,
    /// Yellow percentage
    pub y: u8,
    /// Key (black) percentage
    pub k: u8,
}

/// Percentage (0-100) to device byte, rounded and clamped to [0, 255]
#[inline]
pub fn pct_to_byte(pct: f64) -> u8 {
    (pct * 255.0 / 100.0).round().clamp(0.0, 255.0) as u8
}

/// Device byte to percentage, rounded and clamped to [0, 100]
#[inline]
pub fn byte_to_pct(byte: u8) -> u8 {
    (byte as f64 * 100.0 / 255.0).round().clamp(0.0, 100.0) as u8
}

impl Cmyk {
    /// Create a new device-byte CMYK color
    #[inline]
    pub const fn new(c: u8, m: u8, y: u8, k: u8) -> Self {
        Self { c, m, y, k }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [u8; 4] {
        [self.c, self.m, self.y, self.k]
    }

    /// Create from an array
    #[inline]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self {
            c: arr[0],
            m: arr[1],
            y: arr[2],
            k: arr[3],
        }
    }

    /// Convert each channel to a percentage
    #[inline]
    pub fn to_percent(&self) -> CmykPercent {
        CmykPercent {
            c: byte_to_pct(self.c),
            m: byte_to_pct(self.m),
            y: byte_to_pct(self.y),
            k: byte_to_pct(self.k),
        }
    }
}

impl CmykPercent {
    /// Create a new percent CMYK color, each channel clamped to 100
    #[inline]
    pub fn new(c: u8, m: u8, y: u8, k: u8) -> Self {
        Self {
            c: c.min(100),
            m: m.min(100),
            y: y.min(100),
            k: k.min(100),
        }
    }

    /// Convert each channel to a device byte
    #[inline]
    pub fn to_bytes(&self) -> Cmyk {
        Cmyk {
            c: pct_to_byte(self.c as f64),
            m: pct_to_byte(self.m as f64),
            y: pct_to_byte(self.y as f64),
            k: pct_to_byte(self.k as f64),
        }
    }

    /// Approximate RGB to CMYK conversion, no profile involved
    ///
    /// Pure black maps exactly to (0, 0, 0, 100). Otherwise `k = 1 - max`
    /// and the chromatic channels are normalized by `1 - k`, truncated to
    /// whole percentages.
    pub fn from_rgb_fast(rgb: Rgb) -> Self {
        if rgb.r == 0 && rgb.g == 0 && rgb.b == 0 {
            return Self::new(0, 0, 0, 100);
        }

        let r = rgb.r as f64 / 255.0;
        let g = rgb.g as f64 / 255.0;
        let b = rgb.b as f64 / 255.0;

        let k = 1.0 - r.max(g).max(b);
        // k == 1 only for pure black, handled above; guard anyway
        let (c, m, y) = if (1.0 - k).abs() < f64::EPSILON {
            (0.0, 0.0, 0.0)
        } else {
            (
                (1.0 - r - k) / (1.0 - k),
                (1.0 - g - k) / (1.0 - k),
                (1.0 - b - k) / (1.0 - k),
            )
        };

        Self {
            c: (c * 100.0) as u8,
            m: (m * 100.0) as u8,
            y: (y * 100.0) as u8,
            k: (k * 100.0) as u8,
        }
    }

    /// Approximate CMYK to RGB conversion, no profile involved
    ///
    /// `r = 255 (1-c)(1-k)` and analogous for the other channels, truncated.
    pub fn to_rgb_fast(&self) -> Rgb {
        let c = (self.c.min(100)) as f64 / 100.0;
        let m = (self.m.min(100)) as f64 / 100.0;
        let y = (self.y.min(100)) as f64 / 100.0;
        let k = (self.k.min(100)) as f64 / 100.0;

        Rgb {
            r: (255.0 * (1.0 - c) * (1.0 - k)) as u8,
            g: (255.0 * (1.0 - m) * (1.0 - k)) as u8,
            b: (255.0 * (1.0 - y) * (1.0 - k)) as u8,
        }
    }
}
