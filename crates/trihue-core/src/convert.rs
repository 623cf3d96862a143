//! Profile-accurate CMYK↔RGB conversion
//!
//! `ProfileConverter` binds a [`ProfileRegistry`] to a CMYK device profile
//! and an RGB working profile, and converts single coordinates through the
//! cached transform pair. Input is the flexible string grammar print users
//! actually type; output is plain engine types.
//!
//! Profile failures surface so the caller can decide to fall back to the
//! fast approximate formulas ([`crate::ColorState`] does exactly that).
//! Parse failures also surface; malformed input never turns into a default
//! color.

use std::sync::Arc;

use crate::color::{Cmyk, CmykPercent, Rgb};
use crate::error::Result;
use crate::parse::{parse_cmyk_flexible, parse_rgb_flexible};
use crate::registry::{ProfileRegistry, SRGB_PROFILE};
use crate::transform::{Layout, RenderingIntent, TransformOptions};

/// Converter between a CMYK device profile and an RGB working profile
#[derive(Debug, Clone)]
pub struct ProfileConverter {
    registry: Arc<ProfileRegistry>,
    cmyk_profile: String,
    rgb_profile: String,
    options: TransformOptions,
}

impl ProfileConverter {
    /// Create a converter for the given CMYK device profile
    ///
    /// The RGB side defaults to the built-in sRGB profile, the intent to
    /// relative colorimetric with black point compensation, matching the
    /// usual print-proofing setup.
    pub fn new(registry: Arc<ProfileRegistry>, cmyk_profile: impl Into<String>) -> Self {
        Self {
            registry,
            cmyk_profile: cmyk_profile.into(),
            rgb_profile: SRGB_PROFILE.to_string(),
            options: TransformOptions {
                intent: RenderingIntent::RelativeColorimetric,
                black_point_compensation: true,
            },
        }
    }

    /// Use a different RGB working profile
    pub fn with_rgb_profile(mut self, rgb_profile: impl Into<String>) -> Self {
        self.rgb_profile = rgb_profile.into();
        self
    }

    /// Use different transform options
    pub fn with_options(mut self, options: TransformOptions) -> Self {
        self.options = options;
        self
    }

    /// The registry backing this converter
    pub fn registry(&self) -> &Arc<ProfileRegistry> {
        &self.registry
    }

    /// Convert a CMYK string to RGB through the profile pair
    ///
    /// Accepts `"10,65,85,5"`, `"cmyk(10%, 65%, 85%, 5%)"`, `"10 65 85 5"`
    /// and raw device bytes (any bare value above 100 flips the whole set
    /// to 0-255).
    pub fn cmyk_to_rgb(&self, input: &str) -> Result<Rgb> {
        let cmyk = parse_cmyk_flexible(input)?;
        self.cmyk_bytes_to_rgb(cmyk)
    }

    /// Convert CMYK device bytes to RGB through the profile pair
    pub fn cmyk_bytes_to_rgb(&self, cmyk: Cmyk) -> Result<Rgb> {
        let transform = self.registry.get_transform(
            &self.cmyk_profile,
            &self.rgb_profile,
            Layout::Rgba,
            Layout::Rgb,
            self.options,
        )?;
        transform.cmyk_to_rgb(cmyk)
    }

    /// Convert an RGB string to CMYK percentages through the profile pair
    ///
    /// Accepts `"rgb(12,34,56)"`, `"12 34 56"` and 6-digit hex.
    pub fn rgb_to_cmyk(&self, input: &str) -> Result<CmykPercent> {
        let rgb = parse_rgb_flexible(input)?;
        Ok(self.rgb_to_cmyk_bytes(rgb)?.to_percent())
    }

    /// Convert an RGB coordinate to CMYK device bytes through the profile pair
    pub fn rgb_to_cmyk_bytes(&self, rgb: Rgb) -> Result<Cmyk> {
        let transform = self.registry.get_transform(
            &self.rgb_profile,
            &self.cmyk_profile,
            Layout::Rgb,
            Layout::Rgba,
            self.options,
        )?;
        transform.rgb_to_cmyk(rgb)
    }
}
