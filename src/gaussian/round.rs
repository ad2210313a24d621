//! Rounding of complex numbers onto the Gaussian integer lattice

use super::integer::GaussianInt;
use crate::traits::GaussianError;
use num_complex::Complex64;
use num_traits::FromPrimitive;

/// Euclidean distance between two points on the complex plane
#[inline]
pub fn complex_distance(z1: &Complex64, z2: &Complex64) -> f64 {
    (z1 - z2).norm()
}

/// Round a complex number to the nearest Gaussian integer.
///
/// The candidates are the four lattice points obtained by independently taking the
/// floor and the ceiling of both parts. When several candidates are equally close,
/// the one with the lexicographically smallest `(re, im)` is returned, e.g.
/// `1.5 + 1.5i` is rounded to `1 + i`.
///
/// Fails with [GaussianError::Unrepresentable] if a part is not finite or the
/// result doesn't fit in `T`.
pub fn round_complex<T: FromPrimitive>(z: Complex64) -> Result<GaussianInt<T>, GaussianError> {
    if !z.re.is_finite() || !z.im.is_finite() {
        return Err(GaussianError::Unrepresentable);
    }

    let (re_lo, re_hi) = (z.re.floor(), z.re.ceil());
    let (im_lo, im_hi) = (z.im.floor(), z.im.ceil());

    // listed in lexicographic order, so that only a strictly closer point replaces the best one
    let candidates = [
        Complex64::new(re_lo, im_lo),
        Complex64::new(re_lo, im_hi),
        Complex64::new(re_hi, im_lo),
        Complex64::new(re_hi, im_hi),
    ];
    let mut best = candidates[0];
    let mut best_dist = complex_distance(&z, &best);
    for c in &candidates[1..] {
        let dist = complex_distance(&z, c);
        if dist < best_dist {
            best = *c;
            best_dist = dist;
        }
    }

    let re = T::from_f64(best.re).ok_or(GaussianError::Unrepresentable)?;
    let im = T::from_f64(best.im).ok_or(GaussianError::Unrepresentable)?;
    Ok(GaussianInt::new(re, im))
}
