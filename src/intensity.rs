use std::cmp::Ordering;

use num_traits::{clamp, ToPrimitive};

/// Number of discrete grayscale levels in an 8-bit image.
pub const LEVELS: usize = 256;

/// Highest representable intensity.
pub const MAX_INTENSITY: u8 = u8::MAX;

/// Rounds half to even, the rounding used throughout the equalizer.
#[inline]
pub fn round_level(value: f64) -> f64 {
    value.round_ties_even()
}

/// Rounds and clamps `value` into `[0, 255]`. NaN saturates to 0.
#[inline]
pub fn saturate_cast(value: f64) -> u8 {
    clamp(round_level(value), 0.0, f64::from(MAX_INTENSITY))
        .to_u8()
        .unwrap_or(0)
}

/// `round(count * 255 / total)` computed exactly in integers, ties to even.
/// `total` must be non-zero.
#[inline]
pub fn scale_level(count: u64, total: u64) -> u64 {
    let numerator = count * u64::from(MAX_INTENSITY);
    let (q, r) = (numerator / total, numerator % total);
    match (2 * r).cmp(&total) {
        Ordering::Greater => q + 1,
        Ordering::Equal if q % 2 == 1 => q + 1,
        _ => q,
    }
}
