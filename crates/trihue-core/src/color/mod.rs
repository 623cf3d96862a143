//! Color model types and conversions
//!
//! This module provides:
//! - 8-bit RGB / RGBA primitives with hex formatting
//! - HSV (hue in degrees, saturation/value as unit fractions)
//! - CMYK in both device-byte (0-255) and percent (0-100) conventions
//!
//! All conversions here are pure functions of their inputs. Numeric paths
//! clamp out-of-range values; string parsing (see [`crate::parse`]) rejects
//! them instead.

pub mod cmyk;
pub mod hsv;
pub mod rgb;

pub use cmyk::{Cmyk, CmykPercent, byte_to_pct, pct_to_byte};
pub use hsv::Hsv;
pub use rgb::{Rgb, Rgba};
