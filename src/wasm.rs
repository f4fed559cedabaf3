//! JavaScript bindings for browser map clients.
//!
//! This module is only available with the `tsify` feature enabled:
//!
//! ```toml
//! [dependencies]
//! shuttle-marker = { version = "0.1", features = ["tsify"] }
//! ```
//!
//! # Example (JavaScript/TypeScript)
//!
//! ```javascript
//! import init, { renderMarkerIcon, MarkerRenderer } from 'shuttle-marker';
//!
//! await init();
//!
//! // One-off render
//! const url = renderMarkerIcon('#FF0000', vehicle.heading);
//! L.marker(latlng, { icon: L.icon({ iconUrl: url, iconSize: [26, 26] }) });
//!
//! // Cached renders for a live map
//! const renderer = new MarkerRenderer();
//! const iconUrl = renderer.render(route.color, vehicle.heading);
//! ```

use wasm_bindgen::prelude::*;

use crate::cache::MarkerCache;
use crate::marker::render_marker_icon;
use crate::style::MarkerStyle;

/// Renders the marker as an SVG data URI.
#[wasm_bindgen(js_name = "renderMarkerIcon")]
pub fn render_marker_icon_js(color: &str, angle: f64) -> String {
    render_marker_icon(color, angle)
}

/// Renders a marker from a style object: `{ color, heading, size? }`.
///
/// Returns a PNG data URI when `size` is set, otherwise an SVG data URI.
#[wasm_bindgen(js_name = "renderMarkerStyle")]
pub fn render_marker_style(style: JsValue) -> Result<String, JsError> {
    let style: MarkerStyle = serde_wasm_bindgen::from_value(style)
        .map_err(|e| JsError::new(&format!("Failed to parse marker style: {}", e)))?;
    style
        .render()
        .map_err(|e| JsError::new(&format!("Failed to render marker: {}", e)))
}

// ============================================================================
// MarkerRenderer
// ============================================================================

/// A caching renderer exposed to JavaScript.
///
/// Wraps [`MarkerCache`] so a map redrawing many vehicles reuses recently
/// encoded (color, heading) pairs. The cache is bounded; old pairs are evicted.
#[wasm_bindgen]
#[derive(Default)]
pub struct MarkerRenderer {
    cache: MarkerCache,
}

#[wasm_bindgen]
impl MarkerRenderer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> MarkerRenderer {
        Self::default()
    }

    /// Creates a renderer caching at most `capacity` markers.
    #[wasm_bindgen(js_name = "withCapacity")]
    pub fn with_capacity(capacity: usize) -> MarkerRenderer {
        Self {
            cache: MarkerCache::with_capacity(capacity),
        }
    }

    /// Returns the SVG data URI for the marker, rendering it on first use.
    pub fn render(&mut self, color: &str, angle: f64) -> String {
        self.cache.get_or_render(color, angle).to_string()
    }

    /// Number of cached markers.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.cache.len()
    }

    /// Drops all cached markers.
    #[wasm_bindgen(js_name = "clearCache")]
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
