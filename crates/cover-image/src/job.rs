//! The open → convert → resize → save pipeline for a single cover.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use tracing::{debug, info};

use crate::resize::TargetSize;
use crate::{CoverError, JPEG_QUALITY, convert, decode, encode, resize};

/// A single cover resize, from input path to output path.
#[derive(Debug, Clone)]
pub struct CoverJob {
    input: PathBuf,
    output: PathBuf,
    size: TargetSize,
    quality: u8,
    filter: FilterType,
}

/// Summary of a finished [`CoverJob`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverReport {
    pub output: PathBuf,
    pub source_width: u32,
    pub source_height: u32,
    pub width: u32,
    pub height: u32,
    pub bytes_written: u64,
}

impl CoverJob {
    /// New job with KDP size, quality 95 and Lanczos3 filtering.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            size: TargetSize::KDP,
            quality: JPEG_QUALITY,
            filter: FilterType::Lanczos3,
        }
    }

    pub fn with_size(mut self, size: TargetSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn size(&self) -> TargetSize {
        self.size
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Run the job. Stops at the first failing step.
    pub fn run(&self) -> Result<CoverReport, CoverError> {
        // Reject bad quality before touching any file
        if !(1..=100).contains(&self.quality) {
            return Err(CoverError::InvalidQuality(self.quality));
        }

        let img = decode::open_cover(&self.input)?;
        let (source_width, source_height) = (img.width(), img.height());

        let rgb = convert::to_rgb(&img);
        drop(img);

        let resized = resize::resize_exact(&rgb, self.size, self.filter);
        debug!(
            width = resized.width(),
            height = resized.height(),
            "Cover resized"
        );

        let bytes_written = encode::save_jpeg(&resized, &self.output, self.quality)?;

        info!(
            input = %self.input.display(),
            output = %self.output.display(),
            source_width,
            source_height,
            width = resized.width(),
            height = resized.height(),
            quality = self.quality,
            bytes_written,
            "Cover resized for KDP"
        );

        Ok(CoverReport {
            output: self.output.clone(),
            source_width,
            source_height,
            width: resized.width(),
            height: resized.height(),
            bytes_written,
        })
    }
}
