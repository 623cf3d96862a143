//! ICC color profile handling
//!
//! A thin wrapper around `moxcms::ColorProfile`: the built-in sRGB profile
//! plus file-backed device profiles. Loading and caching by canonical key
//! lives in [`crate::registry`]; this type is just the parsed handle.

use std::path::Path;

use crate::error::{Error, Result};

/// A parsed ICC color profile
#[derive(Debug, Clone)]
pub struct ColorProfile {
    inner: moxcms::ColorProfile,
}

impl ColorProfile {
    /// The built-in sRGB profile
    pub fn new_srgb() -> Self {
        Self {
            inner: moxcms::ColorProfile::new_srgb(),
        }
    }

    /// Parse a profile from raw ICC data
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let inner = moxcms::ColorProfile::new_from_slice(data)
            .map_err(|e| Error::ProfileParse(format!("{e:?}")))?;
        Ok(Self { inner })
    }

    /// Read and parse a profile file
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Whether the profile's device space is CMYK
    pub fn is_cmyk(&self) -> bool {
        self.inner.color_space == moxcms::DataColorSpace::Cmyk
    }

    /// Whether the profile's device space is RGB
    pub fn is_rgb(&self) -> bool {
        self.inner.color_space == moxcms::DataColorSpace::Rgb
    }

    /// Access the underlying moxcms profile
    pub fn inner(&self) -> &moxcms::ColorProfile {
        &self.inner
    }
}
