//! SVG rasterization using resvg/usvg.
//!
//! Map libraries that cannot display SVG markers (or that render markers
//! into a canvas) need a bitmap. This module renders a marker document to an
//! RGBA image and encodes it as PNG.

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Size, Tree};

use crate::error::Result;

/// Renders an SVG string to an RGBA image at the specified size.
///
/// The SVG is scaled to fit within `size x size` pixels while preserving
/// aspect ratio (the larger dimension will be `size`).
///
/// Returns `None` if the SVG cannot be parsed or `size` is zero.
pub fn rasterize(svg_data: &str, size: u32) -> Option<RgbaImage> {
    if size == 0 {
        return None;
    }

    let tree = match Tree::from_str(svg_data, &Options::default()) {
        Ok(tree) => tree,
        Err(err) => {
            log::warn!("marker SVG did not parse: {}", err);
            return None;
        }
    };

    let (width, height, scale) = fit_within(tree.size(), size);
    let mut pixmap = Pixmap::new(width, height)?;
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    Some(pixmap_to_rgba_image(&pixmap))
}

/// Pixel dimensions and scale factor that fit `doc` into a `size` square.
fn fit_within(doc: Size, size: u32) -> (u32, u32, f32) {
    let scale = size as f32 / doc.width().max(doc.height());
    let width = (doc.width() * scale).ceil() as u32;
    let height = (doc.height() * scale).ceil() as u32;
    (width, height, scale)
}

/// Encodes an RGBA image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());

    // tiny_skia stores premultiplied alpha
    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let color = src.demultiply();
        dst.0 = [color.red(), color.green(), color.blue(), color.alpha()];
    }

    img
}

// ============================================================================
// Tests
// ============================================================================
