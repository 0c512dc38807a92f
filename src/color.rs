//! Packed RGBA colors and CSS-like color string parsing.
//!
//! A pixel travels through the pipeline as a `u32` with the channels in
//! big-endian order: `0xRRGGBBAA`. Plain `&`, `|` and `<<` on the packed value
//! are how the stroke and fill engines mask channels, e.g.
//! `color & 0xFFFF_FF00` keeps the RGB part and `color & 0xFF` the alpha.

use crate::error::{CanvasError, CanvasResult};
use crate::named_colors::named_color;

/// Mask selecting the RGB channels of a packed color.
pub const RGB_MASK: u32 = 0xFFFF_FF00;
/// Mask selecting the alpha channel of a packed color.
pub const ALPHA_MASK: u32 = 0x0000_00FF;

/// Fully transparent black.
pub const TRANSPARENT: u32 = 0x0000_0000;
/// Opaque black, the default fill and stroke color.
pub const BLACK: u32 = 0x0000_00FF;
/// Opaque white.
pub const WHITE: u32 = 0xFFFF_FFFF;

// ============================================================================
// Packing helpers
// ============================================================================

/// Pack four channels into `0xRRGGBBAA`.
#[inline]
pub fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    u32::from_be_bytes([r, g, b, a])
}

/// Split `0xRRGGBBAA` into `[r, g, b, a]`.
#[inline]
pub fn unpack_rgba(c: u32) -> [u8; 4] {
    c.to_be_bytes()
}

/// Alpha channel of a packed color.
#[inline]
pub fn alpha(c: u32) -> u8 {
    (c & ALPHA_MASK) as u8
}

/// Replace the alpha channel of a packed color.
#[inline]
pub fn with_alpha(c: u32, a: u8) -> u32 {
    (c & RGB_MASK) | a as u32
}

// ============================================================================
// Rgba8
// ============================================================================

/// RGBA color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn new_opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn from_u32(c: u32) -> Self {
        let [r, g, b, a] = unpack_rgba(c);
        Self { r, g, b, a }
    }

    pub fn to_u32(self) -> u32 {
        pack_rgba(self.r, self.g, self.b, self.a)
    }

    /// Channel-wise interpolation towards `c` by `k`, floored like the
    /// integer conversion in the stop lookup.
    pub fn gradient(&self, c: &Rgba8, k: f64) -> Rgba8 {
        let mix = |p: u8, q: u8| -> u8 {
            let v = p as f64 + (q as f64 - p as f64) * k;
            v.floor().clamp(0.0, 255.0) as u8
        };
        Rgba8 {
            r: mix(self.r, c.r),
            g: mix(self.g, c.g),
            b: mix(self.b, c.b),
            a: mix(self.a, c.a),
        }
    }
}

impl From<u32> for Rgba8 {
    fn from(c: u32) -> Self {
        Rgba8::from_u32(c)
    }
}

impl From<Rgba8> for u32 {
    fn from(c: Rgba8) -> Self {
        c.to_u32()
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Convert a color string to its packed `0xRRGGBBAA` value.
///
/// Accepts `#RRGGBB`, `#RGB`, `rgb(r,g,b)`, `rgba(r,g,b,a)` with `a` in
/// `[0, 1]`, and the named colors table. An empty string yields `0`
/// (transparent black, not opaque black). The alpha byte is
/// `floor(a * 255)`.
pub fn color_string_to_u32(s: &str) -> CanvasResult<u32> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(TRANSPARENT);
    }
    let accepted = if let Some(hex) = s.strip_prefix('#') {
        matches!(hex.len(), 3 | 6)
    } else if let Some(args) = function_args(s, "rgba") {
        args.split(',').count() == 4
    } else if let Some(args) = function_args(s, "rgb") {
        args.split(',').count() == 3
    } else {
        return named_color(s).ok_or_else(|| unknown(s));
    };
    if !accepted {
        return Err(unknown(s));
    }

    let parsed = csscolorparser::parse(s).map_err(|e| {
        log::debug!(target: "canvas", "color parse failed for {:?}: {}", s, e);
        unknown(s)
    })?;
    // Channels truncate; the small bias absorbs the f32 round trip of
    // integer inputs.
    let channel = |v: f32| (v as f64 * 255.0 + 1e-3).floor().clamp(0.0, 255.0) as u8;
    let a = (parsed.a as f64 * 255.0).floor().clamp(0.0, 255.0) as u8;
    Ok(pack_rgba(channel(parsed.r), channel(parsed.g), channel(parsed.b), a))
}

fn unknown(s: &str) -> CanvasError {
    CanvasError::UnknownColorFormat(s.to_string())
}

/// Body between the parentheses of `name(...)`, if `s` has that shape.
fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    let rest = s.strip_prefix(name)?.trim_start();
    let rest = rest.strip_prefix('(')?;
    rest.trim_end().strip_suffix(')')
}

// ============================================================================
// Tests
// ============================================================================
