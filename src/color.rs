//! Marker fill colors.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::{MarkerError, Result};
use crate::template::FILL_TOKEN;

/// Characters that would end or escape an SVG attribute value.
const ATTRIBUTE_BREAKERS: [char; 5] = ['"', '\'', '<', '>', '&'];

/// A CSS color string used as the marker fill.
///
/// The string is passed through to the document verbatim. Use
/// [`MarkerColor::checked`] when the color comes from untrusted input.
///
/// # Example
///
/// ```
/// use shuttle_marker::MarkerColor;
///
/// let color = MarkerColor::from_rgb(255, 128, 0);
/// assert_eq!(color.as_str(), "#ff8000");
/// assert!(MarkerColor::checked("red\" onload=\"x").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct MarkerColor(String);

impl MarkerColor {
    /// Wraps a color string without inspecting it.
    pub fn new(color: impl Into<String>) -> Self {
        Self(color.into())
    }

    /// Wraps a color string, rejecting values that cannot safely sit
    /// inside an SVG attribute.
    pub fn checked(color: impl Into<String>) -> Result<Self> {
        let color = color.into();
        if color.trim().is_empty() {
            return Err(MarkerError::EmptyColor);
        }
        if let Some(ch) = color.chars().find(|c| ATTRIBUTE_BREAKERS.contains(c)) {
            return Err(MarkerError::UnsafeColor { color, ch });
        }
        Ok(Self(color))
    }

    /// Builds a lowercase `#rrggbb` color.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{:02x}{:02x}{:02x}", r, g, b))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the color as `#rgb`, `#rrggbb`, or a CSS color keyword.
    ///
    /// Returns `None` for anything else (`rgb()` functions, `hsl()`, etc.).
    pub fn to_rgb(&self) -> Option<Srgb<u8>> {
        let value = self.0.trim();
        if value.starts_with('#') {
            return Srgb::<u8>::from_str(value).ok();
        }
        palette::named::from_str(&value.to_ascii_lowercase())
    }
}

impl Default for MarkerColor {
    fn default() -> Self {
        Self(FILL_TOKEN.to_string())
    }
}

impl AsRef<str> for MarkerColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MarkerColor {
    fn from(color: &str) -> Self {
        Self::new(color)
    }
}

impl From<String> for MarkerColor {
    fn from(color: String) -> Self {
        Self(color)
    }
}

impl From<Srgb<u8>> for MarkerColor {
    fn from(rgb: Srgb<u8>) -> Self {
        Self::from_rgb(rgb.red, rgb.green, rgb.blue)
    }
}

impl fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_template_fill() {
        assert_eq!(MarkerColor::default().as_str(), "#33A7FF");
    }

    #[test]
    fn new_passes_anything_through() {
        let color = MarkerColor::new("not a color <>");
        assert_eq!(color.as_str(), "not a color <>");
    }

    #[test]
    fn checked_accepts_css_colors() {
        for color in ["#fff", "#FF0000", "red", "rgb(0, 128, 255)", "hsl(120 50% 50%)"] {
            assert!(MarkerColor::checked(color).is_ok(), "{color} should be accepted");
        }
    }

    #[test]
    fn checked_rejects_empty() {
        assert!(matches!(MarkerColor::checked(""), Err(MarkerError::EmptyColor)));
        assert!(matches!(MarkerColor::checked("   "), Err(MarkerError::EmptyColor)));
    }

    #[test]
    fn checked_rejects_attribute_breakers() {
        match MarkerColor::checked("red\"/><script>") {
            Err(MarkerError::UnsafeColor { ch, .. }) => assert_eq!(ch, '"'),
            other => panic!("expected UnsafeColor, got {other:?}"),
        }
        assert!(MarkerColor::checked("a&b").is_err());
        assert!(MarkerColor::checked("it's").is_err());
    }

    #[test]
    fn from_rgb_formats_lowercase_hex() {
        assert_eq!(MarkerColor::from_rgb(0x33, 0xA7, 0xFF).as_str(), "#33a7ff");
        assert_eq!(MarkerColor::from_rgb(0, 0, 0).as_str(), "#000000");
    }

    #[test]
    fn to_rgb_parses_hex() {
        let rgb = MarkerColor::new("#33A7FF").to_rgb().unwrap();
        assert_eq!((rgb.red, rgb.green, rgb.blue), (0x33, 0xA7, 0xFF));

        let short = MarkerColor::new("#0f0").to_rgb().unwrap();
        assert_eq!((short.red, short.green, short.blue), (0, 255, 0));
    }

    #[test]
    fn to_rgb_parses_keywords() {
        let rgb = MarkerColor::new("Red").to_rgb().unwrap();
        assert_eq!((rgb.red, rgb.green, rgb.blue), (255, 0, 0));
    }

    #[test]
    fn to_rgb_rejects_unknown() {
        assert!(MarkerColor::new("#12345").to_rgb().is_none());
        assert!(MarkerColor::new("rgb(1, 2, 3)").to_rgb().is_none());
        assert!(MarkerColor::new("notacolor").to_rgb().is_none());
    }
}
