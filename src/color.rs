//! RGBA colors
//!
//! Channels are normalized floats in [0, 1]. Colors are immutable values; every
//! transform returns a new color.

use std::fmt;
use std::str::FromStr;

/// Error returned when a string is not a `#RRGGBB` color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    input: String,
}

impl ColorParseError {
    /// The string that failed to parse
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not parse {:?} as a #RRGGBB color", self.input)
    }
}

impl std::error::Error for ColorParseError {}

/// An RGBA color with normalized channels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a `#RRGGBB` string (hex digits in either case). Alpha is 1.0.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError {
            input: hex.to_string(),
        };

        let digits = hex.strip_prefix('#').ok_or_else(err)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| err())
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, 1.0))
    }

    /// Copy with the alpha channel replaced
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Flatten to the darkest channel (not luminance weighted)
    pub fn grayscale(self) -> Self {
        let v = self.r.min(self.g).min(self.b);
        Self::new(v, v, v, self.a)
    }

    pub fn invert(self) -> Self {
        Self::new(1.0 - self.r, 1.0 - self.g, 1.0 - self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// CSS `rgba()` form. RGB is rounded to integers in 0-255, alpha stays in 0-1.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(
            f,
            "rgba({}, {}, {}, {})",
            byte(self.r),
            byte(self.g),
            byte(self.b),
            self.a
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1.0 / 255.0;

    fn unit() -> impl Strategy<Value = f32> {
        0.0f32..=1.0
    }

    fn any_color() -> impl Strategy<Value = Color> {
        (unit(), unit(), unit(), unit()).prop_map(|(r, g, b, a)| Color::new(r, g, b, a))
    }

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex("#72b1e5").unwrap();
        assert!((c.r - 0.447).abs() < EPS);
        assert!((c.g - 0.694).abs() < EPS);
        assert!((c.b - 0.898).abs() < EPS);
        assert_eq!(c.a, 1.0);

        let upper: Color = "#72B1E5".parse().unwrap();
        assert_eq!(upper, c);
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        for bad in ["bad", "", "#", "72b1e5", "#72b1e", "#72b1e5a", "#72g1e5", "#ggggggg"] {
            let err = Color::from_hex(bad).unwrap_err();
            assert_eq!(err.input(), bad);
            assert!(err.to_string().contains("#RRGGBB"));
        }
    }

    #[test]
    fn test_display_keeps_alpha_unscaled() {
        let c = Color::new(1.0, 0.0, 0.5, 0.5);
        assert_eq!(c.to_string(), "rgba(255, 0, 128, 0.5)");
    }

    #[test]
    fn test_display_rounds_channels() {
        let c = Color::new(0.447, 0.5, 0.1, 0.3);
        assert_eq!(c.to_string(), "rgba(114, 128, 26, 0.3)");

        let palette = Color::from_hex("#72b1e5").unwrap();
        assert_eq!(palette.to_string(), "rgba(114, 177, 229, 1)");
        // Grayscale of a palette color stays integral
        assert_eq!(palette.grayscale().to_string(), "rgba(114, 114, 114, 1)");
    }

    #[test]
    fn test_with_alpha_leaves_source_untouched() {
        let c = Color::WHITE;
        let faded = c.with_alpha(0.25);
        assert_eq!(faded.a, 0.25);
        assert_eq!(c.a, 1.0);
        assert_eq!((faded.r, faded.g, faded.b), (1.0, 1.0, 1.0));
    }

    proptest! {
        #[test]
        fn grayscale_uses_min_channel(c in any_color()) {
            let g = c.grayscale();
            let min = c.r.min(c.g).min(c.b);
            prop_assert_eq!(g.r, min);
            prop_assert_eq!(g.g, min);
            prop_assert_eq!(g.b, min);
            prop_assert_eq!(g.a, c.a);
        }

        #[test]
        fn invert_is_an_involution(c in any_color()) {
            let back = c.invert().invert();
            prop_assert!((back.r - c.r).abs() < 1e-6);
            prop_assert!((back.g - c.g).abs() < 1e-6);
            prop_assert!((back.b - c.b).abs() < 1e-6);
            prop_assert_eq!(back.a, c.a);
        }
    }
}
