//! Decoding and encoding of grayscale image files.

use std::io::ErrorKind;
use std::path::Path;

use image::{GrayImage, ImageError};
use log::debug;
use ndarray::{Array2, ArrayView2};

use crate::error::EqualizeError;

/// Loads any image format the `image` crate understands as an 8-bit luma
/// array of shape `(height, width)`. Color images are converted to luma.
pub fn load_grayscale<P: AsRef<Path>>(path: P) -> Result<Array2<u8>, EqualizeError> {
    let path = path.as_ref();
    let luma = match image::open(path) {
        Ok(decoded) => decoded.into_luma8(),
        Err(ImageError::IoError(e)) if e.kind() == ErrorKind::NotFound => {
            return Err(EqualizeError::ImageNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    let (w, h) = (luma.width() as usize, luma.height() as usize);
    debug!("loaded {} as {}x{} grayscale", path.display(), w, h);
    Ok(Array2::from_shape_vec((h, w), luma.into_raw())?)
}

/// Writes `image` to `path`; the format follows the file extension.
pub fn save_grayscale<P: AsRef<Path>>(path: P, image: &ArrayView2<u8>) -> Result<(), EqualizeError> {
    let path = path.as_ref();
    let (h, w) = image.dim();
    let (width, height) = (w as u32, h as u32);
    let raw: Vec<u8> = image.iter().copied().collect();
    let buffer =
        GrayImage::from_raw(width, height, raw).ok_or(EqualizeError::BufferSize { width, height })?;
    buffer.save(path)?;
    debug!("saved {}x{} grayscale to {}", w, h, path.display());
    Ok(())
}
