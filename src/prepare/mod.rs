//! Image preparation for the OCR engine.
//!
//! Teletext frames are broadcast light-on-dark and carry page chrome around
//! the headline band. The engine reads dark-on-light text, so each frame is
//! binarized and inverted, then cropped down to the band before recognition.

use image::{imageops, DynamicImage, GrayImage, Luma};
use tracing::warn;

use crate::core::geometry::CropArea;
use crate::error::Result;

pub const EXPECTED_WIDTH: u32 = 480;
pub const EXPECTED_HEIGHT: u32 = 360;

/// Global threshold separating text pixels from background.
const BINARIZE_THRESHOLD: u8 = 128;

/// Prepare one frontpage frame for recognition.
///
/// Deterministic for identical input pixels. A frame that differs from the
/// expected 480×360 size is processed anyway with a warning; only a frame too
/// small to contain the headline band is an error.
pub fn prepare(image: &DynamicImage) -> Result<DynamicImage> {
    let binarized = binarize(image, BINARIZE_THRESHOLD);
    let inverted = invert(&binarized);

    let width = inverted.width();
    let height = inverted.height();
    if width != EXPECTED_WIDTH || height != EXPECTED_HEIGHT {
        warn!(
            width,
            height,
            expected_width = EXPECTED_WIDTH,
            expected_height = EXPECTED_HEIGHT,
            "frame size differs from expected teletext frame, crop area may be off"
        );
    }

    let area = CropArea::headline_band(width, height)?;
    let cropped = crop(&inverted, &area);

    // 1:1 resample; every OCR input goes through the same resampling step
    // regardless of crop size.
    let resampled = cropped.resize_exact(
        cropped.width(),
        cropped.height(),
        imageops::FilterType::Nearest,
    );
    Ok(resampled)
}

/// Reduce to two tones with a fixed global threshold, then re-expand to RGB
/// so the engine sees the channel layout it was trained on.
fn binarize(image: &DynamicImage, threshold: u8) -> DynamicImage {
    let gray = image.to_luma8();
    let two_tone = GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        if gray.get_pixel(x, y)[0] >= threshold {
            Luma([255])
        } else {
            Luma([0])
        }
    });
    DynamicImage::ImageRgb8(DynamicImage::ImageLuma8(two_tone).to_rgb8())
}

fn invert(image: &DynamicImage) -> DynamicImage {
    let mut rgb = image.to_rgb8();
    imageops::invert(&mut rgb);
    DynamicImage::ImageRgb8(rgb)
}

fn crop(image: &DynamicImage, area: &CropArea) -> DynamicImage {
    let rgb = image.to_rgb8();
    let view = imageops::crop_imm(&rgb, area.left, area.top, area.width(), area.height());
    DynamicImage::ImageRgb8(view.to_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use pretty_assertions::assert_eq;

    fn flat_frame(width: u32, height: u32, value: u8) -> DynamicImage {
        DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            width,
            height,
            Rgb([value, value, value]),
        ))
    }

    #[test]
    fn prepares_expected_frame_to_band_size() {
        let prepared = prepare(&flat_frame(480, 360, 40)).unwrap();
        assert_eq!((prepared.width(), prepared.height()), (430, 170));
    }

    #[test]
    fn size_mismatch_warns_but_still_crops() {
        let prepared = prepare(&flat_frame(500, 360, 40)).unwrap();
        assert_eq!((prepared.width(), prepared.height()), (450, 170));
    }

    #[test]
    fn frame_without_headline_rows_is_an_error() {
        assert!(prepare(&flat_frame(480, 150, 40)).is_err());
    }

    #[test]
    fn binarize_splits_on_threshold() {
        let dark = binarize(&flat_frame(4, 4, 100), 128).to_rgb8();
        let light = binarize(&flat_frame(4, 4, 200), 128).to_rgb8();
        assert_eq!(dark.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(light.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn invert_flips_luminance() {
        let inverted = invert(&flat_frame(4, 4, 0)).to_rgb8();
        assert_eq!(inverted.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn light_on_dark_text_comes_out_dark_on_light() {
        // a dark frame with one bright "text" pixel inside the headline band
        let mut frame = image::RgbImage::from_pixel(480, 360, Rgb([30, 30, 30]));
        frame.put_pixel(100, 100, Rgb([220, 220, 220]));
        let prepared = prepare(&DynamicImage::ImageRgb8(frame)).unwrap();
        let rgb = prepared.to_rgb8();
        // band origin is (50, 80), so the text pixel lands at (50, 20)
        assert_eq!(rgb.get_pixel(50, 20), &Rgb([0, 0, 0]));
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn prepare_is_deterministic() {
        let frame = flat_frame(480, 360, 77);
        let a = prepare(&frame).unwrap();
        let b = prepare(&frame).unwrap();
        assert_eq!(a.to_rgb8().as_raw(), b.to_rgb8().as_raw());
    }
}
