//! Color transforms between profiles
//!
//! Wraps the moxcms 8-bit transform executors with the pixel layouts and
//! options this engine needs: single CMYK or RGB coordinates rather than
//! image buffers. Transforms are expensive to build and cheap to apply;
//! [`crate::registry::ProfileRegistry`] caches them by key tuple.

use crate::color::{Cmyk, Rgb};
use crate::error::{Error, Result};
use crate::profile::ColorProfile;

/// Rendering intent for profile-based conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderingIntent {
    /// Best for photographic images
    #[default]
    Perceptual,
    /// Preserves in-gamut colors, clips out-of-gamut
    RelativeColorimetric,
    /// Maintains saturation, may shift hue
    Saturation,
    /// Preserves white point
    AbsoluteColorimetric,
}

impl From<RenderingIntent> for moxcms::RenderingIntent {
    fn from(intent: RenderingIntent) -> Self {
        match intent {
            RenderingIntent::Perceptual => moxcms::RenderingIntent::Perceptual,
            RenderingIntent::RelativeColorimetric => moxcms::RenderingIntent::RelativeColorimetric,
            RenderingIntent::Saturation => moxcms::RenderingIntent::Saturation,
            RenderingIntent::AbsoluteColorimetric => moxcms::RenderingIntent::AbsoluteColorimetric,
        }
    }
}

/// Pixel layout of one side of a transform
///
/// moxcms carries CMYK data in its 4-channel `Rgba` layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// 3 channels
    Rgb,
    /// 4 channels (also used for CMYK device values)
    Rgba,
}

impl Layout {
    /// Number of channels for this layout
    pub fn channels(&self) -> usize {
        match self {
            Layout::Rgb => 3,
            Layout::Rgba => 4,
        }
    }
}

impl From<Layout> for moxcms::Layout {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Rgb => moxcms::Layout::Rgb,
            Layout::Rgba => moxcms::Layout::Rgba,
        }
    }
}

/// Options for transform creation
///
/// Black point compensation participates in the cache key and is carried
/// through to callers, but moxcms does not apply it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TransformOptions {
    /// Rendering intent
    pub intent: RenderingIntent,
    /// Enable black point compensation
    pub black_point_compensation: bool,
}

impl TransformOptions {
    /// Flag bits for the transform cache key
    pub fn flag_bits(&self) -> u32 {
        self.black_point_compensation as u32
    }
}

impl From<TransformOptions> for moxcms::TransformOptions {
    fn from(opts: TransformOptions) -> Self {
        moxcms::TransformOptions {
            rendering_intent: opts.intent.into(),
            ..Default::default()
        }
    }
}

/// A built 8-bit color transform between two profiles
pub struct Transform {
    inner: std::sync::Arc<moxcms::Transform8BitExecutor>,
    src_layout: Layout,
    dst_layout: Layout,
}

impl Transform {
    /// Build a new 8-bit transform
    pub fn new_8bit(
        src_profile: &ColorProfile,
        src_layout: Layout,
        dst_profile: &ColorProfile,
        dst_layout: Layout,
        options: TransformOptions,
    ) -> Result<Self> {
        let inner = src_profile
            .inner()
            .create_transform_8bit(
                src_layout.into(),
                dst_profile.inner(),
                dst_layout.into(),
                options.into(),
            )
            .map_err(|e| Error::Transform(format!("{e:?}")))?;

        Ok(Self {
            inner,
            src_layout,
            dst_layout,
        })
    }

    /// Source pixel layout
    pub fn src_layout(&self) -> Layout {
        self.src_layout
    }

    /// Destination pixel layout
    pub fn dst_layout(&self) -> Layout {
        self.dst_layout
    }

    /// Apply the transform to a buffer of pixels
    ///
    /// Buffer lengths must be whole pixels in the respective layouts and
    /// describe the same number of pixels.
    pub fn apply(&self, src: &[u8], dst: &mut [u8]) -> Result<()> {
        let src_ch = self.src_layout.channels();
        let dst_ch = self.dst_layout.channels();
        if src.len() % src_ch != 0 {
            return Err(Error::BufferSize {
                expected: src.len().div_ceil(src_ch) * src_ch,
                actual: src.len(),
            });
        }
        let pixels = src.len() / src_ch;
        if dst.len() != pixels * dst_ch {
            return Err(Error::BufferSize {
                expected: pixels * dst_ch,
                actual: dst.len(),
            });
        }
        self.inner
            .transform(src, dst)
            .map_err(|e| Error::Transform(format!("{e:?}")))
    }

    /// Convert a single CMYK device coordinate to RGB
    ///
    /// The transform must have been built CMYK (4-channel) to RGB. This is
    /// the one-swatch path the picker drives on every CMYK slider edit.
    pub fn cmyk_to_rgb(&self, cmyk: Cmyk) -> Result<Rgb> {
        let src = cmyk.to_array();
        let mut dst = [0u8; 3];
        self.apply(&src, &mut dst)?;
        Ok(Rgb::from_array(dst))
    }

    /// Convert a single RGB coordinate to CMYK device bytes
    pub fn rgb_to_cmyk(&self, rgb: Rgb) -> Result<Cmyk> {
        let src = rgb.to_array();
        let mut dst = [0u8; 4];
        self.apply(&src, &mut dst)?;
        Ok(Cmyk::from_array(dst))
    }
}

impl std::fmt::Debug for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transform")
            .field("src_layout", &self.src_layout)
            .field("dst_layout", &self.dst_layout)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_channels() {
        assert_eq!(Layout::Rgb.channels(), 3);
        assert_eq!(Layout::Rgba.channels(), 4);
    }

    #[test]
    fn test_flag_bits() {
        let mut opts = TransformOptions::default();
        assert_eq!(opts.flag_bits(), 0);
        opts.black_point_compensation = true;
        assert_eq!(opts.flag_bits(), 1);
    }

    #[test]
    fn test_srgb_identity_transform() {
        let srgb = ColorProfile::new_srgb();
        let transform = Transform::new_8bit(
            &srgb,
            Layout::Rgb,
            &srgb,
            Layout::Rgb,
            TransformOptions::default(),
        )
        .unwrap();

        let src = [255u8, 128, 64];
        let mut dst = [0u8; 3];
        transform.apply(&src, &mut dst).unwrap();
        for (a, b) in src.iter().zip(dst.iter()) {
            assert!(
                (*a as i32 - *b as i32).abs() <= 1,
                "sRGB->sRGB should be near-identity: {:?} -> {:?}",
                src,
                dst
            );
        }
    }

    #[test]
    fn test_apply_rejects_bad_buffer() {
        let srgb = ColorProfile::new_srgb();
        let transform = Transform::new_8bit(
            &srgb,
            Layout::Rgb,
            &srgb,
            Layout::Rgb,
            TransformOptions::default(),
        )
        .unwrap();

        let mut dst = [0u8; 4];
        assert!(matches!(
            transform.apply(&[0u8; 3], &mut dst),
            Err(Error::BufferSize { .. })
        ));
    }
}
