//! Fixed cover configuration.

use std::path::PathBuf;

use cover_image::{CoverJob, JPEG_QUALITY, KDP_HEIGHT, KDP_WIDTH, TargetSize};

/// Input path, relative to the working directory.
pub const DEFAULT_INPUT: &str = "ebook_assets/cover.jpg";

/// Output path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "ebook_assets/cover_kdp.jpg";

/// Configuration for a single cover resize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub quality: u8,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.into(),
            output: DEFAULT_OUTPUT.into(),
            width: KDP_WIDTH,
            height: KDP_HEIGHT,
            quality: JPEG_QUALITY,
        }
    }
}

impl CoverConfig {
    /// Build the resize job for this configuration.
    pub fn job(&self) -> Result<CoverJob, anyhow::Error> {
        let size = TargetSize::new(self.width, self.height)?;
        Ok(CoverJob::new(&self.input, &self.output)
            .with_size(size)
            .with_quality(self.quality))
    }
}
