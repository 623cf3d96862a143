//! String grammars for color input
//!
//! Parsing is the rejecting path of the engine: a string either matches one
//! of the accepted grammars exactly or the caller gets an error. Nothing in
//! here silently coerces malformed input to black, white, or a clamped
//! stand-in. (The numeric conversion paths in [`crate::color`] are the ones
//! that clamp.)
//!
//! Accepted grammars:
//! - Hex: optional `#`, then exactly 3, 4, 6 or 8 hex digits
//! - RGB: `rgb(r,g,b)` or bare `r,g,b` / `r g b`, each 0-255
//! - RGBA: `rgba(r,g,b,a)` with alpha 0/1 or a decimal in [0, 1]
//! - CMYK: optional `cmyk(...)` wrapper, four tokens, optional `%` suffixes

use crate::color::{Cmyk, Rgb, Rgba, pct_to_byte};
use crate::error::{Error, Result};

/// Result of parsing a hex string: short/6-digit forms carry no alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexColor {
    /// 3- or 6-digit form
    Rgb(Rgb),
    /// 4- or 8-digit form
    Rgba(Rgba),
}

impl HexColor {
    /// The color channels, dropping alpha if present
    #[inline]
    pub fn rgb(&self) -> Rgb {
        match self {
            HexColor::Rgb(rgb) => *rgb,
            HexColor::Rgba(rgba) => rgba.rgb(),
        }
    }

    /// The color with alpha, opaque for alpha-less forms
    #[inline]
    pub fn rgba(&self) -> Rgba {
        match self {
            HexColor::Rgb(rgb) => rgb.with_alpha(255),
            HexColor::Rgba(rgba) => *rgba,
        }
    }
}

/// Parse a hex color string
///
/// Accepts `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (leading `#` optional,
/// digits case-insensitive). Short forms decode by nibble doubling, exactly
/// reversing the lossy 2-digit-to-1 encoding. No other lengths parse.
pub fn parse_hex(input: &str) -> Result<HexColor> {
    let digits = input.trim().strip_prefix('#').unwrap_or(input.trim());
    let bytes = digits.as_bytes();

    let invalid = || Error::InvalidColorFormat(input.to_string());

    let nibble = |c: u8| -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    };
    // nibble doubling: 0xA -> 0xAA
    let wide = |c: u8| nibble(c).map(|n| n * 17);
    let pair = |hi: u8, lo: u8| match (nibble(hi), nibble(lo)) {
        (Some(h), Some(l)) => Some(h << 4 | l),
        _ => None,
    };

    match bytes.len() {
        3 => {
            let r = wide(bytes[0]).ok_or_else(invalid)?;
            let g = wide(bytes[1]).ok_or_else(invalid)?;
            let b = wide(bytes[2]).ok_or_else(invalid)?;
            Ok(HexColor::Rgb(Rgb::new(r, g, b)))
        }
        4 => {
            let r = wide(bytes[0]).ok_or_else(invalid)?;
            let g = wide(bytes[1]).ok_or_else(invalid)?;
            let b = wide(bytes[2]).ok_or_else(invalid)?;
            let a = wide(bytes[3]).ok_or_else(invalid)?;
            Ok(HexColor::Rgba(Rgba::new(r, g, b, a)))
        }
        6 => {
            let r = pair(bytes[0], bytes[1]).ok_or_else(invalid)?;
            let g = pair(bytes[2], bytes[3]).ok_or_else(invalid)?;
            let b = pair(bytes[4], bytes[5]).ok_or_else(invalid)?;
            Ok(HexColor::Rgb(Rgb::new(r, g, b)))
        }
        8 => {
            let r = pair(bytes[0], bytes[1]).ok_or_else(invalid)?;
            let g = pair(bytes[2], bytes[3]).ok_or_else(invalid)?;
            let b = pair(bytes[4], bytes[5]).ok_or_else(invalid)?;
            let a = pair(bytes[6], bytes[7]).ok_or_else(invalid)?;
            Ok(HexColor::Rgba(Rgba::new(r, g, b, a)))
        }
        _ => Err(invalid()),
    }
}

/// Parse a strict RGB string: `rgb(r,g,b)` or bare `r,g,b` / `r g b`
///
/// Components are validated, not clamped: 256 is an error here.
pub fn parse_rgb(input: &str) -> Result<Rgb> {
    let body = strip_wrapper(input, "rgb").ok_or_else(|| invalid(input))?;
    let toks = split_components(body);
    if toks.len() != 3 {
        return Err(invalid(input));
    }

    let mut out = [0u8; 3];
    for (i, (tok, name)) in toks.iter().zip(["red", "green", "blue"]).enumerate() {
        out[i] = parse_channel(tok, name, input)?;
    }
    Ok(Rgb::from_array(out))
}

/// Parse a strict RGBA string: `rgba(r,g,b,a)`
///
/// Alpha is an integer 0/1 or a decimal in [0, 1], stored as a rounded byte.
pub fn parse_rgba(input: &str) -> Result<Rgba> {
    let trimmed = input.trim();
    if !trimmed.to_ascii_lowercase().starts_with("rgba") {
        return Err(invalid(input));
    }
    let body = strip_wrapper(trimmed, "rgba").ok_or_else(|| invalid(input))?;
    let toks = split_components(body);
    if toks.len() != 4 {
        return Err(invalid(input));
    }

    let r = parse_channel(toks[0], "red", input)?;
    let g = parse_channel(toks[1], "green", input)?;
    let b = parse_channel(toks[2], "blue", input)?;

    let a: f64 = toks[3].parse().map_err(|_| invalid(input))?;
    if !(0.0..=1.0).contains(&a) {
        return Err(Error::ValueOutOfRange {
            component: "alpha",
            value: a,
            min: 0.0,
            max: 1.0,
        });
    }

    Ok(Rgba::new(r, g, b, (a * 255.0).round() as u8))
}

/// Parse a flexible CMYK string into device bytes
///
/// Accepts `"10,65,85,5"`, `"cmyk(10,65,85,5)"`, `"10% 65% 85% 5%"` and the
/// like. If any token carries a `%`, or all values fit in 0-100, the four
/// are percentages; if any bare value exceeds 100 the whole set is read as
/// raw 0-255 device bytes. Wrong token count or an unparseable number is an
/// error, never a default color.
pub fn parse_cmyk_flexible(input: &str) -> Result<Cmyk> {
    let body = strip_wrapper(input, "cmyk").ok_or_else(|| invalid(input))?;
    let toks = split_components(body);
    if toks.len() != 4 {
        return Err(invalid(input));
    }

    let mut saw_pct = false;
    let mut nums = [0.0f64; 4];
    for (i, tok) in toks.iter().enumerate() {
        let (digits, pct) = match tok.strip_suffix('%') {
            Some(d) => (d, true),
            None => (*tok, false),
        };
        saw_pct |= pct;
        nums[i] = digits.trim().parse().map_err(|_| invalid(input))?;
    }

    let vals = if !saw_pct && nums.iter().any(|&v| v > 100.0) {
        // already 0-255 device values
        nums.map(|v| v.round().clamp(0.0, 255.0) as u8)
    } else {
        nums.map(|v| pct_to_byte(v.clamp(0.0, 100.0)))
    };

    Ok(Cmyk::from_array(vals))
}

/// Parse a flexible RGB string, additionally accepting 6-digit hex
///
/// Profile-converter input path: `"rgb(12,34,56)"`, `"12 34 56"`,
/// `"#0C2238"`. Out-of-range integers clamp here (device-value convention),
/// unlike the strict [`parse_rgb`].
pub fn parse_rgb_flexible(input: &str) -> Result<Rgb> {
    let trimmed = input.trim();

    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Ok(parse_hex(digits)?.rgb());
    }

    let body = strip_wrapper(trimmed, "rgb").ok_or_else(|| invalid(input))?;
    let toks = split_components(body);
    if toks.len() != 3 {
        return Err(invalid(input));
    }

    let mut out = [0u8; 3];
    for (i, tok) in toks.iter().enumerate() {
        let v: i64 = tok.parse().map_err(|_| invalid(input))?;
        out[i] = v.clamp(0, 255) as u8;
    }
    Ok(Rgb::from_array(out))
}

/// Strip an optional `name(...)` wrapper, case-insensitively
///
/// Returns the inner component text, or the input unchanged when no wrapper
/// is present. `None` when a wrapper opens but never closes.
fn strip_wrapper<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix(name) {
        if rest.trim_start().starts_with('(') {
            let open = trimmed.find('(')?;
            let close = trimmed.rfind(')')?;
            if close < open {
                return None;
            }
            return Some(&trimmed[open + 1..close]);
        }
    }
    Some(trimmed)
}

/// Split component text on commas and/or whitespace
fn split_components(body: &str) -> Vec<&str> {
    body.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Parse one 0-255 integer channel, rejecting out-of-range values
fn parse_channel(tok: &str, name: &'static str, input: &str) -> Result<u8> {
    let v: i64 = tok.parse().map_err(|_| invalid(input))?;
    if !(0..=255).contains(&v) {
        return Err(Error::ValueOutOfRange {
            component: name,
            value: v as f64,
            min: 0.0,
            max: 255.0,
        });
    }
    Ok(v as u8)
}

fn invalid(input: &str) -> Error {
    Error::InvalidColorFormat(input.to_string())
}
