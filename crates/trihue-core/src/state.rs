//! Canonical color state
//!
//! One struct holding the full (H,S,V), (R,G,B), (C,M,Y,K), A tuple a
//! picker displays. Every edit enters through a single "set from model X"
//! operation that recomputes the other models from the edited one in one
//! pass; no derived model ever feeds back into itself, so there is no
//! update cycle for a caller to suppress. Any feedback-gating a UI needs
//! stays in the UI.

use crate::blend;
use crate::color::{CmykPercent, Hsv, Rgb, Rgba};
use crate::convert::ProfileConverter;
use crate::error::Result;
use crate::parse::{HexColor, parse_hex};

/// The canonical color held by a picker caller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorState {
    hsv: Hsv,
    rgb: Rgb,
    cmyk: CmykPercent,
    alpha: u8,
}

impl Default for ColorState {
    /// Opaque black
    fn default() -> Self {
        Self::from_rgb(Rgb::new(0, 0, 0))
    }
}

impl ColorState {
    /// Build a state from an RGB color, deriving the other models
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hsv: Hsv::from_rgb(rgb),
            rgb,
            cmyk: CmykPercent::from_rgb_fast(rgb),
            alpha: 255,
        }
    }

    /// Build a state from an RGBA color
    pub fn from_rgba(rgba: Rgba) -> Self {
        let mut state = Self::from_rgb(rgba.rgb());
        state.alpha = rgba.a;
        state
    }

    /// Current HSV
    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// Current RGB
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Current CMYK percentages
    pub fn cmyk(&self) -> CmykPercent {
        self.cmyk
    }

    /// Current alpha byte
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Current color with alpha
    pub fn rgba(&self) -> Rgba {
        self.rgb.with_alpha(self.alpha)
    }

    /// Current color as `#RRGGBB`
    pub fn hex(&self) -> String {
        self.rgb.to_hex()
    }

    /// Set from RGB; HSV and CMYK are recomputed from it
    pub fn set_rgb(&mut self, rgb: Rgb) {
        self.rgb = rgb;
        self.hsv = Hsv::from_rgb(rgb);
        self.cmyk = CmykPercent::from_rgb_fast(rgb);
    }

    /// Set from HSV; RGB and CMYK are recomputed from it
    pub fn set_hsv(&mut self, hsv: Hsv) {
        self.hsv = hsv;
        self.rgb = hsv.to_rgb();
        self.cmyk = CmykPercent::from_rgb_fast(self.rgb);
    }

    /// Set from CMYK percentages; RGB and HSV are recomputed from it
    pub fn set_cmyk(&mut self, cmyk: CmykPercent) {
        self.cmyk = cmyk;
        self.rgb = cmyk.to_rgb_fast();
        self.hsv = Hsv::from_rgb(self.rgb);
    }

    /// Set from a strict hex string; 4/8-digit forms also set alpha
    pub fn set_hex(&mut self, hex: &str) -> Result<()> {
        match parse_hex(hex)? {
            HexColor::Rgb(rgb) => self.set_rgb(rgb),
            HexColor::Rgba(rgba) => {
                self.set_rgb(rgba.rgb());
                self.alpha = rgba.a;
            }
        }
        Ok(())
    }

    /// Set the alpha byte, independent of the color models
    pub fn set_alpha(&mut self, alpha: u8) {
        self.alpha = alpha;
    }

    /// Set from RGB with a profile-accurate CMYK leg
    ///
    /// Falls back to the fast approximation when the profile pair cannot
    /// be used (missing file, bad profile, transform failure).
    pub fn set_rgb_with(&mut self, converter: &ProfileConverter, rgb: Rgb) {
        self.rgb = rgb;
        self.hsv = Hsv::from_rgb(rgb);
        self.cmyk = converter
            .rgb_to_cmyk_bytes(rgb)
            .map(|cmyk| cmyk.to_percent())
            .unwrap_or_else(|_| CmykPercent::from_rgb_fast(rgb));
    }

    /// Set from CMYK with a profile-accurate RGB leg
    ///
    /// Falls back to the fast approximation when the profile pair cannot
    /// be used.
    pub fn set_cmyk_with(&mut self, converter: &ProfileConverter, cmyk: CmykPercent) {
        self.cmyk = cmyk;
        self.rgb = converter
            .cmyk_bytes_to_rgb(cmyk.to_bytes())
            .unwrap_or_else(|_| cmyk.to_rgb_fast());
        self.hsv = Hsv::from_rgb(self.rgb);
    }

    /// Set from HSV with a profile-accurate CMYK leg
    pub fn set_hsv_with(&mut self, converter: &ProfileConverter, hsv: Hsv) {
        self.hsv = hsv;
        self.rgb = hsv.to_rgb();
        self.cmyk = converter
            .rgb_to_cmyk_bytes(self.rgb)
            .map(|cmyk| cmyk.to_percent())
            .unwrap_or_else(|_| CmykPercent::from_rgb_fast(self.rgb));
    }

    /// Black or white, whichever reads against the current color
    pub fn contrast_text_color(&self) -> Rgb {
        blend::contrast_text_color(self.rgb)
    }
}
