//! Conventional `cdf_min` equalizer, kept only to compare results against.
//!
//! This is the formulation most imaging libraries ship:
//! `lut[i] = round((C[i] - C_min) * 255 / (N - C_min))`, where `C_min` is the
//! cumulative count at the first populated level. It stretches the darkest
//! populated level to 0, whereas [`crate::EqualizationMap`] maps it to
//! `round(C_min * 255 / N)`.

use itertools::Itertools;
use log::debug;
use ndarray::{Array2, ArrayView2, Zip};
use ndarray_stats::QuantileExt;

use crate::error::EqualizeError;
use crate::histogram::{CumulativeHistogram, Histogram};
use crate::intensity::{saturate_cast, LEVELS, MAX_INTENSITY};

/// Builds the reference lookup table. Single-valued images map through the
/// identity table.
pub fn reference_lut(histogram: &Histogram) -> Result<[u8; LEVELS], EqualizeError> {
    let cumulative = CumulativeHistogram::from_histogram(histogram);
    let total = cumulative.total();
    let (first, _) = histogram
        .counts()
        .iter()
        .find_position(|&&c| c > 0)
        .ok_or(EqualizeError::EmptyHistogram)?;
    let cdf_min = cumulative.values()[first];

    let mut lut = [0u8; LEVELS];
    if total == cdf_min {
        lut.iter_mut()
            .zip(0..=MAX_INTENSITY)
            .for_each(|(v, level)| *v = level);
        return Ok(lut);
    }

    let scale = f64::from(MAX_INTENSITY) / (total - cdf_min) as f64;
    for (v, &c) in lut.iter_mut().zip(cumulative.values().iter()) {
        *v = saturate_cast(c.saturating_sub(cdf_min) as f64 * scale);
    }
    Ok(lut)
}

/// Equalizes `image` with the reference formulation.
pub fn equalize_reference(image: &ArrayView2<u8>) -> Result<Array2<u8>, EqualizeError> {
    let (rows, cols) = image.dim();
    if image.is_empty() {
        return Err(EqualizeError::EmptyImage { rows, cols });
    }
    let lut = reference_lut(&Histogram::from_image(image))?;
    Ok(image.mapv(|v| lut[usize::from(v)]))
}

/// Pixelwise difference between two equally sized images.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Comparison {
    pub max_abs_diff: u8,
    pub mean_abs_diff: f64,
    pub differing_pixels: usize,
}

pub fn compare(left: &ArrayView2<u8>, right: &ArrayView2<u8>) -> Result<Comparison, EqualizeError> {
    if left.dim() != right.dim() {
        return Err(EqualizeError::ShapeMismatch {
            left: left.dim(),
            right: right.dim(),
        });
    }
    let (rows, cols) = left.dim();
    if left.is_empty() {
        return Err(EqualizeError::EmptyImage { rows, cols });
    }

    let diff: Array2<u8> = Zip::from(left)
        .and(right)
        .map_collect(|&a, &b| a.abs_diff(b));
    let max_abs_diff = diff.max().map(|v| *v).unwrap_or(0);
    let differing_pixels = diff.iter().filter(|&&d| d > 0).count();
    let mean_abs_diff = diff.iter().map(|&d| f64::from(d)).sum::<f64>() / diff.len() as f64;

    debug!(
        "compared {}x{} images: max={}, mean={:.4}, differing={}",
        rows, cols, max_abs_diff, mean_abs_diff, differing_pixels
    );
    Ok(Comparison {
        max_abs_diff,
        mean_abs_diff,
        differing_pixels,
    })
}
