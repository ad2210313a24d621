//! Primality test for Gaussian integers.
//!
//! A Gaussian integer `a + bi` is prime iff one of the following holds:
//! 1. one of `a`, `b` is zero and the absolute value of the other is a
//!    rational prime of the form `4n + 3`
//! 2. both `a`, `b` are nonzero and the norm `a² + b²` is a rational prime
//!
//! Zero and the units satisfy neither of them.

use super::integer::GaussianInt;
use super::GaussianIntBase;
use num_integer::Integer;
use num_traits::{RefNum, Zero};
use std::collections::HashMap;
use std::hash::Hash;

/// Test if an integer is a rational prime by trial division.
///
/// Integers less than two (including all negative integers) are not prime.
pub fn is_real_prime<T: Integer + Clone>(n: &T) -> bool
where
    for<'r> &'r T: RefNum<T>,
{
    if n <= &T::one() {
        return false;
    }

    let mut d = T::one() + T::one();
    while d <= n / &d {
        if n.is_multiple_of(&d) {
            return false;
        }
        d = d + T::one();
    }
    true
}

// one part is zero, the other is p or -p with p prime and p ≡ 3 (mod 4)
fn is_axis_prime<T: GaussianIntBase>(z: &GaussianInt<T>) -> bool
where
    for<'r> &'r T: RefNum<T>,
{
    let two = T::one() + T::one();
    let three = &two + T::one();
    let four = &two + &two;

    let criterion = |zero: &T, other: &T| {
        if !zero.is_zero() {
            return false;
        }
        let p = other.abs();
        is_real_prime::<T>(&p) && p.mod_floor(&four) == three
    };
    let (re, im) = z.parts();
    criterion(re, im) || criterion(im, re)
}

// both parts are nonzero and the norm is prime
fn is_norm_prime<T: GaussianIntBase>(z: &GaussianInt<T>) -> bool
where
    for<'r> &'r T: RefNum<T>,
{
    !z.re().is_zero() && !z.im().is_zero() && is_real_prime::<T>(&z.norm())
}

/// Test if a Gaussian integer is a Gaussian prime
#[inline]
pub fn is_prime<T: GaussianIntBase>(z: &GaussianInt<T>) -> bool
where
    for<'r> &'r T: RefNum<T>,
{
    is_axis_prime::<T>(z) || is_norm_prime::<T>(z)
}

impl<T: GaussianIntBase> GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    /// Test if the number is a Gaussian prime, see [is_prime]
    #[inline]
    pub fn is_prime(&self) -> bool {
        is_prime::<T>(self)
    }
}

/// Memoized primality test results, keyed by the tested value
#[derive(Clone, Debug, Default)]
pub struct PrimalityCache<T> {
    known: HashMap<GaussianInt<T>, bool>,
}

impl<T: GaussianIntBase + Hash> PrimalityCache<T>
where
    for<'r> &'r T: RefNum<T>,
{
    #[inline]
    pub fn new() -> Self {
        PrimalityCache {
            known: HashMap::new(),
        }
    }

    /// Test if `z` is a Gaussian prime, reusing the result of an earlier query
    pub fn is_prime(&mut self, z: &GaussianInt<T>) -> bool {
        if let Some(&result) = self.known.get(z) {
            return result;
        }
        let result = is_prime::<T>(z);
        self.known.insert(z.clone(), result);
        result
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.known.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.known.clear()
    }
}
