//! Error type for the fallible marker APIs.
//!
//! The core renderer never fails. Errors only arise from the opt-in paths:
//! checked colors, rasterization, and style (de)serialization.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarkerError {
    #[error("marker color is empty")]
    EmptyColor,

    #[error("marker color {color:?} contains {ch:?}, which cannot appear in an SVG attribute")]
    UnsafeColor { color: String, ch: char },

    #[error("failed to rasterize marker at {size}px")]
    Rasterize { size: u32 },

    #[error("failed to encode marker image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("invalid marker style: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = MarkerError> = std::result::Result<T, E>;
