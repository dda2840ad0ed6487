pub mod tesseract;

pub use tesseract::TesseractOcr;

use image::DynamicImage;

use crate::error::Result;

/// An external engine turning a prepared image into raw text.
///
/// The pipeline never retries a failed engine call; retry policy belongs to
/// the caller.
pub trait OcrEngine {
    fn recognize(&self, image: &DynamicImage) -> Result<String>;
}
