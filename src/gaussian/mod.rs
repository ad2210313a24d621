//! Data structures and algorithms implementations related to
//! Gaussian integers (complex numbers `a + bi` with integer `a`, `b`).
//!
//! The ring is Euclidean under the norm `a² + b²`: the quotient of a division
//! is the lattice point nearest to the exact complex quotient (see [round_complex]),
//! so the remainder always has a norm of at most half of the divisor's.
//!
//! # References:
//! - <https://en.wikipedia.org/wiki/Gaussian_integer>
//! - <https://crypto.stanford.edu/pbc/notes/numbertheory/gaussint.html>
//!

mod integer;
mod prime;
mod round;

pub use integer::*;
pub use prime::*;
pub use round::*;

use num_integer::Integer;
use num_traits::{FromPrimitive, NumRef, Signed, ToPrimitive};

/// A helper trait to define valid type that can be used for GaussianInt
pub trait GaussianIntBase:
    Integer + NumRef + Clone + Signed + ToPrimitive + FromPrimitive
{
}
impl<T: Integer + NumRef + Clone + Signed + ToPrimitive + FromPrimitive> GaussianIntBase for T {}
