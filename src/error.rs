use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the equalization pipeline and its image adapters.
#[derive(Debug, Error)]
pub enum EqualizeError {
    /// The image has no pixels, so the scaling factor is undefined.
    #[error("image has no pixels ({rows}x{cols})")]
    EmptyImage { rows: usize, cols: usize },

    /// A cumulative histogram with a zero total was handed to the map builder.
    #[error("histogram is empty, cannot normalize by zero pixels")]
    EmptyHistogram,

    /// The histogram and cumulative histogram do not describe the same image.
    #[error("histogram total {histogram} does not match cumulative total {cumulative}")]
    HistogramMismatch { histogram: u64, cumulative: u64 },

    #[error("images differ in shape: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("could not find image {0}")]
    ImageNotFound(PathBuf),

    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("pixel buffer does not fit a {width}x{height} image")]
    BufferSize { width: u32, height: u32 },
}
