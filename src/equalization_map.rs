//! Equalization lookup table derived from a cumulative histogram.
//!
//! The table `Sk` maps each input level to `round(C[i] * 255 / N)`. Several
//! input levels may scale onto the same output level; their probability mass is
//! summed into that output bucket (`Ps`), which in turn yields the expected
//! shape of the equalized histogram (`Final = round(Ps * 255)`). Only `Sk` is
//! ever used to remap pixels.

use log::debug;
use more_asserts::debug_assert_le;

use crate::error::EqualizeError;
use crate::histogram::{CumulativeHistogram, Histogram};
use crate::intensity::{saturate_cast, scale_level, LEVELS, MAX_INTENSITY};

#[derive(Clone, Debug, PartialEq)]
pub struct EqualizationMap {
    lut: [u8; LEVELS],
    probabilities: [f64; LEVELS],
    accumulated: [f64; LEVELS],
    equalized_histogram: [u8; LEVELS],
    pixel_count: u64,
}

impl EqualizationMap {
    /// Builds the map for the image described by `histogram` and `cumulative`.
    ///
    /// Fails with [`EqualizeError::EmptyHistogram`] when no pixels were counted
    /// and with [`EqualizeError::HistogramMismatch`] when the two tables come
    /// from different images.
    pub fn new(
        histogram: &Histogram,
        cumulative: &CumulativeHistogram,
    ) -> Result<Self, EqualizeError> {
        let pixel_count = cumulative.total();
        if pixel_count == 0 {
            return Err(EqualizeError::EmptyHistogram);
        }
        let histogram_total = histogram.total();
        if histogram_total != pixel_count {
            return Err(EqualizeError::HistogramMismatch {
                histogram: histogram_total,
                cumulative: pixel_count,
            });
        }

        let n = pixel_count as f64;
        let alpha = f64::from(MAX_INTENSITY) / n;

        let mut probabilities = [0f64; LEVELS];
        for (p, &count) in probabilities.iter_mut().zip(histogram.counts().iter()) {
            *p = count as f64 / n;
        }

        let mut lut = [0u8; LEVELS];
        for (sk, &c) in lut.iter_mut().zip(cumulative.values().iter()) {
            let scaled = scale_level(c, pixel_count);
            debug_assert_le!(scaled, u64::from(MAX_INTENSITY));
            *sk = u8::try_from(scaled).unwrap_or(MAX_INTENSITY);
        }

        // Colliding input levels share one output bucket.
        let mut accumulated = [0f64; LEVELS];
        for (&sk, &p) in lut.iter().zip(probabilities.iter()) {
            accumulated[usize::from(sk)] += p;
        }

        let mut equalized_histogram = [0u8; LEVELS];
        for (f, &ps) in equalized_histogram.iter_mut().zip(accumulated.iter()) {
            *f = saturate_cast(ps * f64::from(MAX_INTENSITY));
        }

        debug!(
            "equalization map over {} pixels: alpha={:.6}, lut[0]={}, lut[255]={}",
            pixel_count,
            alpha,
            lut[0],
            lut[LEVELS - 1]
        );

        Ok(EqualizationMap {
            lut,
            probabilities,
            accumulated,
            equalized_histogram,
            pixel_count,
        })
    }

    /// Output intensity for input intensity `level` (`Sk[level]`).
    #[inline]
    pub fn lookup(&self, level: u8) -> u8 {
        self.lut[usize::from(level)]
    }

    pub fn lut(&self) -> &[u8; LEVELS] {
        &self.lut
    }

    /// Normalized frequency of each input level (`Pr`).
    pub fn probabilities(&self) -> &[f64; LEVELS] {
        &self.probabilities
    }

    /// Probability mass landing on each output level (`Ps`).
    pub fn accumulated_probabilities(&self) -> &[f64; LEVELS] {
        &self.accumulated
    }

    /// Expected histogram shape of the remapped image, scaled to `[0, 255]`.
    /// Informational only.
    pub fn equalized_histogram(&self) -> &[u8; LEVELS] {
        &self.equalized_histogram
    }

    pub fn pixel_count(&self) -> u64 {
        self.pixel_count
    }
}
