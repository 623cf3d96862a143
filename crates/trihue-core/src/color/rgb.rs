//! RGB color primitives
//!
//! `Rgb` is the canonical model: every other representation in this crate
//! is derived from it or convertible back to it. Channels are 8-bit.

use super::hsv::Hsv;

/// RGB color with 8-bit channels (0-255)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create RGB from an array
    #[inline]
    pub const fn from_array(arr: [u8; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to HSV
    #[inline]
    pub fn to_hsv(&self) -> Hsv {
        Hsv::from_rgb(*self)
    }

    /// Convert from HSV
    #[inline]
    pub fn from_hsv(hsv: Hsv) -> Self {
        hsv.to_rgb()
    }

    /// Format as an uppercase `#RRGGBB` hex string
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Scale each channel to a unit fraction, rounded to 4 decimals
    #[inline]
    pub fn to_unit(&self) -> [f64; 3] {
        [unit(self.r), unit(self.g), unit(self.b)]
    }

    /// Build from unit fractions, each rounded to the nearest byte and clamped
    #[inline]
    pub fn from_unit(rgb: [f64; 3]) -> Self {
        Self {
            r: byte(rgb[0]),
            g: byte(rgb[1]),
            b: byte(rgb[2]),
        }
    }

    /// Attach an alpha byte
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

/// RGB plus an 8-bit alpha channel
///
/// The surrounding system also speaks a normalized 0.0-1.0 alpha; the
/// conversion between the two is always explicit ([`Rgba::alpha_unit`] /
/// [`Rgba::with_alpha_unit`]), never an implicit truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
    /// Alpha component (255 = opaque)
    pub a: u8,
}

impl Default for Rgba {
    fn default() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 255,
        }
    }
}

impl Rgba {
    /// Create a new RGBA color
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// The color channels without alpha
    #[inline]
    pub const fn rgb(&self) -> Rgb {
        Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }

    /// Alpha as a unit fraction, rounded to 4 decimals
    #[inline]
    pub fn alpha_unit(&self) -> f64 {
        unit(self.a)
    }

    /// Replace the alpha byte from a unit fraction (rounded, clamped)
    #[inline]
    pub fn with_alpha_unit(self, a: f64) -> Self {
        Self {
            a: byte(a),
            ..self
        }
    }

    /// Format as an uppercase `#RRGGBBAA` hex string
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// Scale all four channels to unit fractions, rounded to 4 decimals
    #[inline]
    pub fn to_unit(&self) -> [f64; 4] {
        [unit(self.r), unit(self.g), unit(self.b), unit(self.a)]
    }

    /// Build from four unit fractions, rounded and clamped per channel
    #[inline]
    pub fn from_unit(rgba: [f64; 4]) -> Self {
        Self {
            r: byte(rgba[0]),
            g: byte(rgba[1]),
            b: byte(rgba[2]),
            a: byte(rgba[3]),
        }
    }
}

impl From<Rgb> for Rgba {
    /// Opaque by default
    fn from(rgb: Rgb) -> Self {
        rgb.with_alpha(255)
    }
}

/// Byte to unit fraction, rounded to 4 decimals
#[inline]
fn unit(v: u8) -> f64 {
    (v as f64 / 255.0 * 10_000.0).round() / 10_000.0
}

/// Unit fraction to byte, rounded and clamped
#[inline]
fn byte(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Rgb::new(255, 128, 0).to_hex(), "#FF8000");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Rgba::new(255, 128, 0, 128).to_hex(), "#FF800080");
    }

    #[test]
    fn test_unit_scaling_roundtrip() {
        for v in [0u8, 1, 127, 128, 254, 255] {
            let rgb = Rgb::new(v, v, v);
            let back = Rgb::from_unit(rgb.to_unit());
            assert_eq!(back, rgb, "unit roundtrip failed at {}", v);
        }
    }

    #[test]
    fn test_unit_known_values() {
        let unit = Rgb::new(255, 128, 0).to_unit();
        assert_eq!(unit[0], 1.0);
        assert_eq!(unit[1], 0.502);
        assert_eq!(unit[2], 0.0);
    }

    #[test]
    fn test_alpha_unit_is_explicit() {
        let c = Rgba::new(10, 20, 30, 210);
        assert_eq!(c.alpha_unit(), 0.8235);
        let back = c.with_alpha_unit(c.alpha_unit());
        assert_eq!(back.a, 210);
    }
}
