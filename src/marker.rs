//! Marker icon rendering.
//!
//! [`render_marker_icon`] is the entry point used by map clients: it fills in
//! the template's color and heading and returns an SVG data URI. [`MarkerIcon`]
//! exposes the intermediate document and bitmap variants.

use base64::{engine::general_purpose, Engine};
use image::RgbaImage;

use crate::color::MarkerColor;
use crate::error::{MarkerError, Result};
use crate::heading::Heading;
use crate::raster::{encode_png, rasterize};
use crate::template::MarkerTemplate;

/// Prefix of every SVG marker URI.
pub const SVG_DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// Prefix of every rasterized marker URI.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Encodes bytes as a base64 data URI with the given MIME type.
pub(crate) fn data_url(data: &[u8], mime_type: &str) -> String {
    let encoded = general_purpose::STANDARD.encode(data);

    format!("data:{};base64,{encoded}", mime_type)
}

/// Renders the shuttle marker in `color`, rotated by `angle` degrees, as an
/// SVG data URI.
///
/// Neither input is validated. The color is inserted verbatim and the angle
/// is inserted without normalization, so `360.0` yields `rotate(360)` and NaN
/// yields `rotate(NaN)`.
///
/// # Example
///
/// ```
/// use shuttle_marker::render_marker_icon;
///
/// let uri = render_marker_icon("#FF0000", 45.0);
/// assert!(uri.starts_with("data:image/svg+xml;base64,"));
/// ```
pub fn render_marker_icon(color: &str, angle: f64) -> String {
    let svg = MarkerTemplate::shuttle().substitute(color, &Heading::new(angle).to_string());
    data_url(svg.as_bytes(), "image/svg+xml")
}

// ============================================================================
// MarkerIcon
// ============================================================================

/// A marker with a color and heading, not yet rendered.
///
/// # Example
///
/// ```
/// use shuttle_marker::{render_marker_icon, MarkerIcon};
///
/// let icon = MarkerIcon::new("green", 90.0);
/// assert!(icon.svg().contains("rotate(90)"));
/// assert_eq!(icon.data_uri(), render_marker_icon("green", 90.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerIcon {
    pub color: MarkerColor,
    pub heading: Heading,
    template: MarkerTemplate,
}

impl MarkerIcon {
    /// Creates a marker using the built-in shuttle template.
    pub fn new(color: impl Into<MarkerColor>, heading: impl Into<Heading>) -> Self {
        Self {
            color: color.into(),
            heading: heading.into(),
            template: MarkerTemplate::shuttle(),
        }
    }

    /// Replaces the template (builder style).
    pub fn with_template(mut self, template: MarkerTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn template(&self) -> &MarkerTemplate {
        &self.template
    }

    /// Returns the substituted SVG document.
    pub fn svg(&self) -> String {
        self.template
            .substitute(self.color.as_str(), &self.heading.to_string())
    }

    /// Returns the SVG document as a base64 data URI.
    pub fn data_uri(&self) -> String {
        data_url(self.svg().as_bytes(), "image/svg+xml")
    }

    /// Renders the marker to an RGBA bitmap `size` pixels wide.
    ///
    /// Returns `None` if the substituted document is not valid SVG.
    pub fn rasterize(&self, size: u32) -> Option<RgbaImage> {
        rasterize(&self.svg(), size)
    }

    /// Renders the marker to a PNG data URI.
    pub fn png_data_uri(&self, size: u32) -> Result<String> {
        let image = self
            .rasterize(size)
            .ok_or(MarkerError::Rasterize { size })?;
        let png = encode_png(&image)?;
        Ok(data_url(&png, "image/png"))
    }
}

impl Default for MarkerIcon {
    fn default() -> Self {
        Self::new(MarkerColor::default(), Heading::NORTH)
    }
}

// ============================================================================
// Tests
// ============================================================================
