//! This module contains predefined Gaussian integer constants

use crate::gaussian::GaussianInt;

pub const GAUSS_ZERO: GaussianInt<i64> = GaussianInt::new(0, 0);
pub const GAUSS_ONE: GaussianInt<i64> = GaussianInt::new(1, 0);
pub const GAUSS_I: GaussianInt<i64> = GaussianInt::new(0, 1);

/// The units `1, -1, i, -i`
pub const GAUSS_UNITS: [GaussianInt<i64>; 4] = [
    GaussianInt::new(1, 0),
    GaussianInt::new(-1, 0),
    GaussianInt::new(0, 1),
    GaussianInt::new(0, -1),
];
