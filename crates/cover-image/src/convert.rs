//! Color mode conversion to JPEG-compatible RGB.

use image::{DynamicImage, RgbImage};
use tracing::debug;

/// Convert any decoded image to 8-bit RGB.
///
/// Grayscale is replicated across the three channels and alpha is dropped
/// without compositing. Deeper sample types are scaled down to 8 bits.
pub fn to_rgb(img: &DynamicImage) -> RgbImage {
    match img {
        DynamicImage::ImageRgb8(rgb) => {
            debug!(
                width = rgb.width(),
                height = rgb.height(),
                "Image already RGB8, skipping conversion"
            );
            rgb.clone()
        }
        other => {
            debug!(
                width = other.width(),
                height = other.height(),
                color = ?other.color(),
                "Converting image to RGB8"
            );
            other.to_rgb8()
        }
    }
}
