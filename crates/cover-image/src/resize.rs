//! Exact-size resizing for cover output.
//!
//! Covers are stretched to the target dimensions; aspect ratio is not preserved.

use image::RgbImage;
use image::imageops::{self, FilterType};
use tracing::debug;

use crate::{CoverError, KDP_HEIGHT, KDP_WIDTH};

/// Output dimensions in pixels. Both sides are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSize {
    width: u32,
    height: u32,
}

impl TargetSize {
    /// KDP recommended cover size (1600x2560).
    pub const KDP: TargetSize = TargetSize {
        width: KDP_WIDTH,
        height: KDP_HEIGHT,
    };

    pub fn new(width: u32, height: u32) -> Result<Self, CoverError> {
        if width == 0 || height == 0 {
            return Err(CoverError::InvalidSize { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Default for TargetSize {
    fn default() -> Self {
        Self::KDP
    }
}

/// Resize an RGB image to exactly `size`.
///
/// Returns the original image unchanged if it already has the target size.
pub fn resize_exact(img: &RgbImage, size: TargetSize, filter: FilterType) -> RgbImage {
    let (orig_w, orig_h) = img.dimensions();

    if (orig_w, orig_h) == (size.width, size.height) {
        debug!(
            width = orig_w,
            height = orig_h,
            "Image already at target size, skipping resize"
        );
        return img.clone();
    }

    debug!(
        orig_w,
        orig_h,
        new_width = size.width,
        new_height = size.height,
        ?filter,
        "Resizing image to target size"
    );

    imageops::resize(img, size.width, size.height, filter)
}
