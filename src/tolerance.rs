//! Fixed numeric tolerances shared by the clipping algorithms.
//!
//! Normalization round-off is absorbed in two ways: an absolute epsilon for
//! the parametric clippers, and an 8-decimal quantization for coordinate
//! equality. Both are fixed constants, not caller-supplied.

use num_traits::Float;

/// Absolute tolerance for floating-point comparisons on normalized
/// coordinates.
pub const EPSILON: f64 = 1e-14;

/// Returns [`EPSILON`] materialized in the working scalar type.
#[inline]
pub fn epsilon<F: Float>() -> F {
    F::from(EPSILON).unwrap()
}

/// Compares two coordinates for equality at 8 decimal places.
///
/// Both operands are quantized (scaled by 1e8 and rounded) before the
/// comparison, so values within half a quantum of each other compare equal.
#[inline]
pub fn coords_eq<F: Float>(a: F, b: F) -> bool {
    let scale = F::from(1e8).unwrap();
    (a * scale).round() == (b * scale).round()
}
