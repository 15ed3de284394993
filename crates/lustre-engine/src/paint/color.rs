use std::fmt;
use std::str::FromStr;

/// Blend weight used by [`Color::tint`] when deriving accent colors
/// (default-button and colored mouse-over tables).
pub const DEFAULT_TINT_FACTOR: f64 = 0.2;

/// Opaque 8-bit sRGB color.
///
/// Invariant:
/// - immutable value type; every derived color is a new value.
///
/// Shading math works in `f64` and rounds back to bytes, so a color produced by
/// the engine is always a valid byte triple (clamped, never wrapped).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Failure to parse a `#rrggbb` color literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("expected 6 hex digits, got {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Builds a color from floating channels in `0..=255`, rounding and clamping.
    #[inline]
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        Self::new(to_byte(r), to_byte(g), to_byte(b))
    }

    /// Builds a color from unit-range channels (`0.0..=1.0`).
    #[inline]
    pub(crate) fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::from_f64(r * 255.0, g * 255.0, b * 255.0)
    }

    #[inline]
    pub(crate) fn to_unit(self) -> (f64, f64, f64) {
        (self.r as f64 / 255.0, self.g as f64 / 255.0, self.b as f64 / 255.0)
    }

    /// Integer luma in `0..=255` (Rec. 601 weights).
    ///
    /// Used for ordering colors by perceived brightness, e.g. to check that a ramp
    /// darkens monotonically.
    #[inline]
    pub fn luma(self) -> u32 {
        (self.r as u32 * 299 + self.g as u32 * 587 + self.b as u32 * 114) / 1000
    }

    /// Per-channel average of `self` and `other * factor`, clamped.
    ///
    /// With `factor == 1.0` this is the plain midpoint; border and etch lines use it
    /// to approximate antialiasing against the surrounding fill.
    pub fn mid(self, other: Color, factor: f64) -> Color {
        let ch = |a: u8, b: u8| (a as f64 + (b as f64 * factor).clamp(0.0, 255.0)) / 2.0;
        Color::from_f64(ch(self.r, other.r), ch(self.g, other.g), ch(self.b, other.b))
    }

    /// Weighted blend `(self + factor * other) / (1 + factor)`.
    ///
    /// Derives accent colors such as the default-button tint from a button and a
    /// highlight color.
    pub fn tint(self, other: Color, factor: f64) -> Color {
        let factor = factor.max(0.0);
        let ch = |a: u8, b: u8| (a as f64 + factor * b as f64) / (1.0 + factor);
        Color::from_f64(ch(self.r, other.r), ch(self.g, other.g), ch(self.b, other.b))
    }

    /// Linear mix towards `other`; `t == 0` is `self`, `t == 1` is `other`.
    pub fn mix(self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| a as f64 + (b as f64 - a as f64) * t;
        Color::from_f64(ch(self.r, other.r), ch(self.g, other.g), ch(self.b, other.b))
    }

    /// Parses `#rrggbb` or `rrggbb`.
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(ParseColorError::BadLength(s.to_string()));
        }
        let byte = |i: usize| {
            digits
                .get(i..i + 2)
                .and_then(|d| u8::from_str_radix(d, 16).ok())
                .ok_or_else(|| ParseColorError::BadDigit(s.to_string()))
        };
        Ok(Self::new(byte(0)?, byte(2)?, byte(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[inline]
fn to_byte(v: f64) -> u8 {
    if v.is_nan() {
        0
    } else {
        v.round().clamp(0.0, 255.0) as u8
    }
}
