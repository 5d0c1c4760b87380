//! RGBA colors and linear channel blending

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fraction::Fraction;

/// 8-bit RGBA color (straight alpha).
///
/// Serialized as a hex string: `#RRGGBB` or `#AARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Create a color from all four channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Same color with another alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Parse `#RRGGBB` or `#AARRGGBB` (leading `#` optional)
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(hex.to_string()));
        }
        let byte = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorError::InvalidHex(hex.to_string()))
        };
        match digits.len() {
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::new(byte(2)?, byte(4)?, byte(6)?, byte(0)?)),
            _ => Err(ColorError::InvalidHex(hex.to_string())),
        }
    }

    /// Per-channel linear blend from `self` to `other`
    pub fn lerp(self, other: Rgba, fraction: Fraction) -> Rgba {
        let channel = |a: u8, b: u8| fraction.mix(a as f32, b as f32).round() as u8;
        Rgba::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
            channel(self.a, other.a),
        )
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.a, self.r, self.g, self.b
            )
        }
    }
}

impl TryFrom<String> for Rgba {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

/// Color parsing errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ColorError {
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgba::from_hex("#3B76AA").unwrap(), Rgba::rgb(0x3B, 0x76, 0xAA));
        assert_eq!(
            Rgba::from_hex("#1AFFFFFF").unwrap(),
            Rgba::new(255, 255, 255, 0x1A)
        );
        assert_eq!(Rgba::from_hex("f1c429").unwrap(), Rgba::rgb(0xF1, 0xC4, 0x29));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Rgba::from_hex("#12345").is_err());
        assert!(Rgba::from_hex("#GGGGGG").is_err());
        assert!(Rgba::from_hex("").is_err());
        assert!(Rgba::from_hex("#ééé").is_err());
        assert!(Rgba::from_hex("#+1+2+3").is_err());
        assert!(Rgba::from_hex("+1+2+3+4").is_err());
    }

    #[test]
    fn test_display_round_trips_alpha() {
        assert_eq!(Rgba::rgb(0x1D, 0x1E, 0x2B).to_string(), "#1D1E2B");
        assert_eq!(Rgba::new(0, 0, 0, 0x80).to_string(), "#80000000");
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let day = Rgba::rgb(0, 100, 200);
        let night = Rgba::new(100, 0, 200, 55);
        assert_eq!(day.lerp(night, Fraction::DAY), day);
        assert_eq!(day.lerp(night, Fraction::NIGHT), night);
        assert_eq!(day.lerp(night, Fraction::new(0.5)), Rgba::new(50, 50, 200, 155));
    }
}
