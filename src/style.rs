//! Serializable marker style.
//!
//! A [`MarkerStyle`] describes one marker in a JSON-friendly shape so it can
//! be sent between a tracking backend and a map frontend.
//!
//! # Example
//!
//! ```
//! use shuttle_marker::MarkerStyle;
//!
//! let style = MarkerStyle::from_json(r##"{ "color": "#FF0000", "heading": 90 }"##).unwrap();
//! assert!(style.data_uri().starts_with("data:image/svg+xml;base64,"));
//!
//! let json = style.to_json().unwrap();
//! let restored = MarkerStyle::from_json(&json).unwrap();
//! assert_eq!(restored.heading.degrees(), 90.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::color::MarkerColor;
use crate::error::Result;
use crate::heading::Heading;
use crate::marker::MarkerIcon;

/// A marker's color, heading, and optional bitmap size.
///
/// # JSON Format
///
/// ```json
/// {
///   "color": "#33A7FF",
///   "heading": 45.0,
///   "size": 52
/// }
/// ```
///
/// Every field is optional when deserializing: `color` defaults to the
/// template blue, `heading` to north, and `size` to none (SVG output).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify))]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    /// CSS color used for the marker body.
    #[serde(default)]
    #[cfg_attr(feature = "tsify", tsify(type = "string"))]
    pub color: MarkerColor,

    /// Heading in degrees, clockwise from north.
    #[serde(default)]
    #[cfg_attr(feature = "tsify", tsify(type = "number | \"NaN\" | \"Infinity\" | \"-Infinity\""))]
    pub heading: Heading,

    /// Bitmap size in pixels. `None` renders SVG.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl MarkerStyle {
    pub fn new(color: impl Into<MarkerColor>, heading: impl Into<Heading>) -> Self {
        Self {
            color: color.into(),
            heading: heading.into(),
            size: None,
        }
    }

    /// Sets the bitmap size.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Builds the icon described by this style.
    pub fn icon(&self) -> MarkerIcon {
        MarkerIcon::new(self.color.clone(), self.heading)
    }

    /// Returns the SVG data URI for this style, ignoring `size`.
    pub fn data_uri(&self) -> String {
        self.icon().data_uri()
    }

    /// Returns a PNG data URI when `size` is set, otherwise the SVG data URI.
    pub fn render(&self) -> Result<String> {
        match self.size {
            Some(size) => self.icon().png_data_uri(size),
            None => Ok(self.data_uri()),
        }
    }

    /// Serializes the style to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the style to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a style from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&MarkerIcon> for MarkerStyle {
    fn from(icon: &MarkerIcon) -> Self {
        Self::new(icon.color.clone(), icon.heading)
    }
}

// ============================================================================
// Tests
// ============================================================================
