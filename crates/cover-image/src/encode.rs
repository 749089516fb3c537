//! JPEG encoding and output writing.

use std::io::Write;
use std::path::Path;

use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::CoverError;

/// Encode an RGB image as baseline JPEG at `quality` (1-100).
pub fn encode_jpeg(img: &RgbImage, quality: u8) -> Result<Vec<u8>, CoverError> {
    if !(1..=100).contains(&quality) {
        return Err(CoverError::InvalidQuality(quality));
    }

    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    img.write_with_encoder(encoder)?;

    debug!(
        width = img.width(),
        height = img.height(),
        quality,
        bytes = buf.len(),
        "Encoded JPEG"
    );
    Ok(buf)
}

/// Encode `img` and write it to `path`, replacing any existing file.
///
/// Encoding finishes in memory, then the bytes go to a temporary file in the
/// same directory that is renamed over `path`. A failure at any point leaves
/// the previous output untouched. Returns the number of bytes written.
pub fn save_jpeg(img: &RgbImage, path: impl AsRef<Path>, quality: u8) -> Result<u64, CoverError> {
    let path = path.as_ref();
    let bytes = encode_jpeg(img, quality)?;

    let io_err = |source| CoverError::Io {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(&bytes).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    debug!(path = %path.display(), bytes = bytes.len(), "Wrote JPEG");
    Ok(bytes.len() as u64)
}
