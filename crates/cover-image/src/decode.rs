//! Cover decoding with content-based format detection.

use std::path::Path;

use image::{DynamicImage, ImageReader};
use tracing::debug;

use crate::CoverError;

/// Open and decode the image at `path`.
///
/// The format is sniffed from the file contents, so a PNG saved as `.jpg`
/// still decodes. The file handle is released before returning.
pub fn open_cover(path: impl AsRef<Path>) -> Result<DynamicImage, CoverError> {
    let path = path.as_ref();
    let io_err = |source| CoverError::Io {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(io_err)?
        .with_guessed_format()
        .map_err(io_err)?;
    let format = reader.format();

    let img = reader.decode().map_err(|source| CoverError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        ?format,
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "Decoded cover image"
    );
    Ok(img)
}
