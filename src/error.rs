use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the extraction pipeline.
///
/// A failing image yields no document at all; only the two external-engine
/// stages and the crop geometry can fail hard. Dictionary failures are
/// returned by the adapters but downgraded to "word not recognized" by the
/// repair and normalization stages.
#[derive(Debug, Error)]
pub enum TelelexError {
    #[error("failed to load image {}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("degenerate crop area ({left},{top})-({right},{bottom}) for {width}x{height} frame")]
    Geometry {
        left: u32,
        top: u32,
        right: u32,
        bottom: u32,
        width: u32,
        height: u32,
    },

    #[error("OCR engine unavailable: {reason}")]
    OcrUnavailable { reason: String },

    #[error("dictionary service failure: {reason}")]
    Dictionary { reason: String },
}

pub type Result<T> = std::result::Result<T, TelelexError>;
