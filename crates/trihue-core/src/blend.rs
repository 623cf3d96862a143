//! Color blending and contrast helpers
//!
//! Derived display colors for theming callers: alpha compositing of two
//! colors and brightness-relative adjustment. Independent of the main
//! color state.

use crate::color::Rgb;
use crate::error::Result;
use crate::parse::parse_rgb_flexible;

/// Perceptual brightness of a color (0-255 scale)
///
/// The usual luma weights: `0.299 r + 0.587 g + 0.114 b`.
#[inline]
pub fn brightness(color: Rgb) -> f64 {
    0.299 * color.r as f64 + 0.587 * color.g as f64 + 0.114 * color.b as f64
}

/// Blend two colors by linear interpolation
///
/// `alpha` is the foreground weight, clamped to [0, 1]: 0 is fully
/// background, 1 fully foreground. Channels round to the nearest byte.
pub fn blend(fg: Rgb, bg: Rgb, alpha: f64) -> Rgb {
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |f: u8, b: u8| (alpha * f as f64 + (1.0 - alpha) * b as f64).round() as u8;
    Rgb {
        r: mix(fg.r, bg.r),
        g: mix(fg.g, bg.g),
        b: mix(fg.b, bg.b),
    }
}

/// Blend two colors given as RGB triples or 6-digit hex strings
pub fn blend_str(fg: &str, bg: &str, alpha: f64) -> Result<Rgb> {
    Ok(blend(
        parse_rgb_flexible(fg)?,
        parse_rgb_flexible(bg)?,
        alpha,
    ))
}

/// Adjust a color's brightness by a fixed or contrast-relative delta
///
/// With no background, `delta` is added to each channel (clamped to
/// 0-255). With a background, the foreground moves away from it: `+delta`
/// when the foreground is darker than the background, `-delta` otherwise.
pub fn adjust_for_contrast(fg: Rgb, bg: Option<Rgb>, delta: i32) -> Rgb {
    let delta = match bg {
        None => delta,
        Some(bg) => {
            if brightness(fg) < brightness(bg) {
                delta
            } else {
                -delta
            }
        }
    };

    let shift = |c: u8| (c as i32 + delta).clamp(0, 255) as u8;
    Rgb {
        r: shift(fg.r),
        g: shift(fg.g),
        b: shift(fg.b),
    }
}

/// Black or white, whichever reads against the given background
///
/// Pure black above the 186 brightness threshold, pure white below.
pub fn contrast_text_color(bg: Rgb) -> Rgb {
    if brightness(bg) > 186.0 {
        Rgb::new(0, 0, 0)
    } else {
        Rgb::new(255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_midpoint() {
        assert_eq!(
            blend(Rgb::new(255, 0, 0), Rgb::new(0, 0, 255), 0.5),
            Rgb::new(128, 0, 128)
        );
    }

    #[test]
    fn test_blend_extremes_and_clamp() {
        let fg = Rgb::new(10, 20, 30);
        let bg = Rgb::new(200, 100, 50);
        assert_eq!(blend(fg, bg, 1.0), fg);
        assert_eq!(blend(fg, bg, 0.0), bg);
        assert_eq!(blend(fg, bg, 7.5), fg);
        assert_eq!(blend(fg, bg, -1.0), bg);
    }

    #[test]
    fn test_blend_str_accepts_hex() {
        assert_eq!(
            blend_str("#FF0000", "0,0,255", 0.5).unwrap(),
            Rgb::new(128, 0, 128)
        );
        assert!(blend_str("nope", "0,0,255", 0.5).is_err());
    }

    #[test]
    fn test_adjust_without_background() {
        assert_eq!(
            adjust_for_contrast(Rgb::new(100, 200, 250), None, 30),
            Rgb::new(130, 230, 255)
        );
        assert_eq!(
            adjust_for_contrast(Rgb::new(10, 20, 30), None, -30),
            Rgb::new(0, 0, 0)
        );
    }

    #[test]
    fn test_adjust_moves_away_from_background() {
        let dark_fg = Rgb::new(40, 40, 40);
        let light_bg = Rgb::new(230, 230, 230);
        // darker foreground lightens
        assert_eq!(
            adjust_for_contrast(dark_fg, Some(light_bg), 30),
            Rgb::new(70, 70, 70)
        );
        // lighter foreground darkens
        assert_eq!(
            adjust_for_contrast(light_bg, Some(dark_fg), 30),
            Rgb::new(200, 200, 200)
        );
    }

    #[test]
    fn test_contrast_text_threshold() {
        assert_eq!(contrast_text_color(Rgb::new(255, 255, 255)), Rgb::new(0, 0, 0));
        assert_eq!(contrast_text_color(Rgb::new(0, 0, 0)), Rgb::new(255, 255, 255));
        // mid gray at 128 sits below the 186 threshold
        assert_eq!(
            contrast_text_color(Rgb::new(128, 128, 128)),
            Rgb::new(255, 255, 255)
        );
    }
}
