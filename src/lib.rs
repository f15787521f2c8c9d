//! Histogram equalization for 8-bit grayscale images.
//!
//! The pipeline runs four stages over an in-memory buffer: per-level
//! [`Histogram`], its [`CumulativeHistogram`], the [`EqualizationMap`] derived
//! from it, and the [`remap`] of every pixel through that map.
//!
//! ```
//! use histeq_gray::{equalize, EqualizeParams};
//! use ndarray::array;
//!
//! let img = array![[0u8, 85], [170, 255]];
//! let result = equalize(&img.view(), &EqualizeParams::default()).unwrap();
//! assert_eq!(result.image, array![[64u8, 128], [191, 255]]);
//! ```

use log::debug;
use ndarray::{Array2, ArrayView2};

pub mod equalization_map;
pub mod error;
pub mod histogram;
pub mod intensity;
pub mod io;
pub mod reference;
pub mod remap;

pub use equalization_map::EqualizationMap;
pub use error::EqualizeError;
pub use histogram::{CumulativeHistogram, Histogram};
pub use intensity::{saturate_cast, LEVELS, MAX_INTENSITY};
pub use remap::{remap, remap_par};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Execution {
    Sequential,
    #[default]
    Parallel,
}

/// Tuning for [`equalize`]. The number of levels is fixed at [`LEVELS`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EqualizeParams {
    execution: Execution,
}

impl EqualizeParams {
    pub fn new(execution: Execution) -> Self {
        EqualizeParams { execution }
    }

    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    pub fn execution(&self) -> Execution {
        self.execution
    }
}

/// Equalized image together with every intermediate table.
#[derive(Clone, Debug)]
pub struct Equalization {
    pub image: Array2<u8>,
    pub histogram: Histogram,
    pub cumulative: CumulativeHistogram,
    pub map: EqualizationMap,
}

/// Runs the full equalization pipeline over `image`.
///
/// Returns [`EqualizeError::EmptyImage`] if the image has no pixels.
pub fn equalize(
    image: &ArrayView2<u8>,
    params: &EqualizeParams,
) -> Result<Equalization, EqualizeError> {
    let (rows, cols) = image.dim();
    if image.is_empty() {
        return Err(EqualizeError::EmptyImage { rows, cols });
    }
    debug!("equalizing {}x{} image ({:?})", rows, cols, params.execution);

    let histogram = match params.execution {
        Execution::Sequential => Histogram::from_image(image),
        Execution::Parallel => Histogram::from_image_par(image),
    };
    let cumulative = CumulativeHistogram::from_histogram(&histogram);
    let map = EqualizationMap::new(&histogram, &cumulative)?;
    let equalized = match params.execution {
        Execution::Sequential => remap(image, &map),
        Execution::Parallel => remap_par(image, &map),
    };

    Ok(Equalization {
        image: equalized,
        histogram,
        cumulative,
        map,
    })
}

/// Equalizes `image` with default parameters, discarding the intermediate tables.
pub fn equalize_image(image: &ArrayView2<u8>) -> Result<Array2<u8>, EqualizeError> {
    equalize(image, &EqualizeParams::default()).map(|eq| eq.image)
}
