//! shuttle-marker: rotated, colored vehicle markers for map UIs
//!
//! This crate fills a compiled-in SVG arrow with a color and a heading and
//! returns it as a data URI that map libraries accept as an icon URL.
//!
//! # Example
//!
//! ```
//! use shuttle_marker::render_marker_icon;
//!
//! let uri = render_marker_icon("#FF0000", 45.0);
//! assert!(uri.starts_with("data:image/svg+xml;base64,"));
//! ```
//!
//! # Caching and Bitmaps
//!
//! A live map re-renders markers on every position update. [`MarkerCache`]
//! memoizes the URI per (color, heading), and [`MarkerIcon`] can rasterize
//! to PNG for clients that cannot draw SVG markers:
//!
//! ```
//! use shuttle_marker::{MarkerCache, MarkerIcon};
//!
//! let mut cache = MarkerCache::new();
//! let svg_uri = cache.get_or_render("#33A7FF", 270.0).to_string();
//!
//! let png_uri = MarkerIcon::new("#33A7FF", 270.0).png_data_uri(26).unwrap();
//! assert!(png_uri.starts_with("data:image/png;base64,"));
//! ```

mod cache;
mod color;
mod error;
mod heading;
mod marker;
mod raster;
mod style;
mod template;

#[cfg(feature = "tsify")]
mod wasm;

pub use cache::{CacheKey, MarkerCache, DEFAULT_CACHE_CAPACITY};
pub use color::MarkerColor;
pub use error::{MarkerError, Result};
pub use heading::{CardinalPoint, Heading};
pub use marker::{render_marker_icon, MarkerIcon, PNG_DATA_URI_PREFIX, SVG_DATA_URI_PREFIX};
pub use raster::{encode_png, rasterize};
pub use style::MarkerStyle;
pub use template::{MarkerTemplate, FILL_TOKEN, HEADING_TOKEN, SHUTTLE_SVG};

#[cfg(feature = "tsify")]
pub use wasm::{render_marker_icon_js, render_marker_style, MarkerRenderer};
