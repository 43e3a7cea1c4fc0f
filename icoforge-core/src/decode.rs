//! Source image decoding.

use std::path::Path;

use image::{DynamicImage, GenericImageView};
use tracing::debug;

use crate::error::IconError;

/// Read and decode the image at `path`.
///
/// The format is guessed from the file content rather than its extension.
pub fn decode_file(path: &Path) -> crate::Result<DynamicImage> {
    let bytes = std::fs::read(path).map_err(|source| IconError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    decode_bytes(&bytes)
}

/// Decode an in-memory encoded image.
pub fn decode_bytes(bytes: &[u8]) -> crate::Result<DynamicImage> {
    let image = image::load_from_memory(bytes).map_err(IconError::Decode)?;
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(IconError::EmptySource { width, height });
    }
    debug!("Decoded {width}×{height} {:?} image", image.color());
    Ok(image)
}
