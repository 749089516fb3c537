//! Cover image processing for publishing submission.
//!
//! Decodes a cover, converts it to 8-bit RGB, stretches it to the exact
//! KDP target size with Lanczos3 filtering and re-encodes it as JPEG.

use std::path::PathBuf;

pub mod convert;
pub mod decode;
pub mod encode;
pub mod job;
pub mod resize;

// Re-exports for convenience
pub use convert::to_rgb;
pub use decode::open_cover;
pub use encode::{encode_jpeg, save_jpeg};
pub use job::{CoverJob, CoverReport};
pub use resize::{TargetSize, resize_exact};

/// KDP recommended cover width in pixels.
pub const KDP_WIDTH: u32 = 1600;

/// KDP recommended cover height in pixels.
pub const KDP_HEIGHT: u32 = 2560;

/// Default JPEG quality for the resized cover.
pub const JPEG_QUALITY: u8 = 95;

/// Errors that can occur while resizing a cover.
#[derive(Debug, thiserror::Error)]
pub enum CoverError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("JPEG encode error: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Invalid target size {width}x{height}: both sides must be non-zero")]
    InvalidSize { width: u32, height: u32 },

    #[error("Invalid JPEG quality {0}: must be between 1 and 100")]
    InvalidQuality(u8),
}
