//! RGB color
//!
//! The UI collaborator's color picker speaks `#rrggbb` hex strings, so
//! [`Color`] parses those. Channels are f32 in nominal `[0,1]`; the per-point
//! jitter applied by the field may push displayed values above 1.0, which the
//! renderer owns (additive blending saturates anyway).

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

/// RGB color, one f32 per channel, layout-compatible with GPU color buffers.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };
    /// The default particle color (`#00ffff`).
    pub const CYAN: Self = Self { r: 0.0, g: 1.0, b: 1.0 };

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string (leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError::new(hex));
        }

        let channel = |range: std::ops::Range<usize>| -> Result<f32, ColorParseError> {
            let byte = u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::new(hex))?;
            Ok(byte as f32 / 255.0)
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Channels as an array (for buffer interop).
    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Error for a malformed hex color string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorParseError {
    input: String,
}

impl ColorParseError {
    fn new(input: &str) -> Self {
        Self { input: input.to_string() }
    }
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid hex color '{}', expected #rrggbb", self.input)
    }
}

impl std::error::Error for ColorParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_cyan() {
        let c = Color::from_hex("#00ffff").unwrap();
        assert_eq!(c, Color::CYAN);
    }

    #[test]
    fn test_from_hex_no_prefix() {
        let c = Color::from_hex("ff0000").unwrap();
        assert_eq!(c, Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_from_hex_mid_value() {
        let c = Color::from_hex("#808080").unwrap();
        assert!((c.r - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Color::from_hex("#zzzzzz").is_err());
        assert!(Color::from_hex("#fff").is_err());
        assert!(Color::from_hex("").is_err());
    }
}
