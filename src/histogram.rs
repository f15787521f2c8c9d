//! Per-level pixel counts and their running sums.

use ndarray::parallel::prelude::*;
use ndarray::{ArrayView2, Axis};

use crate::intensity::LEVELS;

/// Pixel count for each of the 256 intensity levels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; LEVELS],
}

impl Histogram {
    /// Counts every pixel of `image` into its intensity bin.
    pub fn from_image(image: &ArrayView2<u8>) -> Self {
        let mut counts = [0u64; LEVELS];
        image.for_each(|&v| counts[usize::from(v)] += 1);
        Histogram { counts }
    }

    /// Same result as [`Histogram::from_image`], built from per-row partial
    /// histograms merged by addition.
    pub fn from_image_par(image: &ArrayView2<u8>) -> Self {
        let counts = image
            .axis_iter(Axis(0))
            .into_par_iter()
            .fold(
                || [0u64; LEVELS],
                |mut partial, row| {
                    row.for_each(|&v| partial[usize::from(v)] += 1);
                    partial
                },
            )
            .reduce(|| [0u64; LEVELS], merge_counts);
        Histogram { counts }
    }

    pub fn from_counts(counts: [u64; LEVELS]) -> Self {
        Histogram { counts }
    }

    #[inline]
    pub fn count(&self, level: u8) -> u64 {
        self.counts[usize::from(level)]
    }

    pub fn counts(&self) -> &[u64; LEVELS] {
        &self.counts
    }

    /// Total number of pixels counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

fn merge_counts(mut acc: [u64; LEVELS], other: [u64; LEVELS]) -> [u64; LEVELS] {
    acc.iter_mut().zip(other.iter()).for_each(|(a, b)| *a += b);
    acc
}

/// Prefix sums over a [`Histogram`]: entry `i` counts pixels with intensity `<= i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CumulativeHistogram {
    values: [u64; LEVELS],
}

impl CumulativeHistogram {
    pub fn from_histogram(histogram: &Histogram) -> Self {
        let mut values = [0u64; LEVELS];
        values[0] = histogram.counts[0];
        for i in 1..LEVELS {
            values[i] = histogram.counts[i] + values[i - 1];
        }
        CumulativeHistogram { values }
    }

    #[inline]
    pub fn get(&self, level: u8) -> u64 {
        self.values[usize::from(level)]
    }

    pub fn values(&self) -> &[u64; LEVELS] {
        &self.values
    }

    /// Total pixel count, i.e. the last entry.
    pub fn total(&self) -> u64 {
        self.values[LEVELS - 1]
    }
}
