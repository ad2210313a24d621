//! Fixed-length arrays of Gaussian integers with element-wise arithmetic

use crate::gaussian::{GaussianInt, GaussianIntBase};
use crate::traits::GaussianError;
use core::iter::FromIterator;
use core::ops::{Index, Neg};
use num_complex::Complex64;
use num_traits::{RefNum, Zero};
use std::fmt;

#[cfg(feature = "rand")]
use rand::{distributions::uniform::SampleUniform, Rng, SeedableRng};
#[cfg(feature = "rand")]
use rand_chacha::ChaCha8Rng;

/// A one dimensional array of Gaussian integers.
///
/// The length is fixed at construction, elements can be replaced by [GaussianArray::set]
/// but never inserted or removed. Binary operations are applied index by index and
/// require operands of the same length.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct GaussianArray<T> {
    elems: Vec<GaussianInt<T>>,
}

impl<T> GaussianArray<T> {
    #[inline]
    pub fn new(elems: Vec<GaussianInt<T>>) -> Self {
        GaussianArray { elems }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Get the element at `index`
    #[inline]
    pub fn get(&self, index: usize) -> Result<&GaussianInt<T>, GaussianError> {
        self.elems
            .get(index)
            .ok_or(GaussianError::IndexOutOfRange(index))
    }

    /// Replace the element at `index`, the array is left untouched on failure
    pub fn set(&mut self, index: usize, value: GaussianInt<T>) -> Result<(), GaussianError> {
        match self.elems.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(GaussianError::IndexOutOfRange(index)),
        }
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, GaussianInt<T>> {
        self.elems.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[GaussianInt<T>] {
        &self.elems[..]
    }

    #[inline]
    pub fn into_vec(self) -> Vec<GaussianInt<T>> {
        self.elems
    }

    // Apply `op` to each pair of elements at the same index
    fn zip_with<U, F>(&self, other: &Self, mut op: F) -> Result<Vec<U>, GaussianError>
    where
        F: FnMut(&GaussianInt<T>, &GaussianInt<T>) -> Result<U, GaussianError>,
    {
        if self.len() != other.len() {
            return Err(GaussianError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        self.elems
            .iter()
            .zip(other.elems.iter())
            .map(|(l, r)| op(l, r))
            .collect()
    }
}

impl<T: PartialEq> GaussianArray<T> {
    /// Count the elements equal to `value`
    pub fn count(&self, value: &GaussianInt<T>) -> usize {
        self.elems.iter().filter(|&z| z == value).count()
    }

    /// Find the first index of `value`, `None` if it's absent
    pub fn index_of(&self, value: &GaussianInt<T>) -> Option<usize> {
        self.elems.iter().position(|z| z == value)
    }

    #[inline]
    pub fn contains(&self, value: &GaussianInt<T>) -> bool {
        self.elems.contains(value)
    }
}

impl<T: Clone> GaussianArray<T> {
    #[inline]
    pub fn to_vec(&self) -> Vec<GaussianInt<T>> {
        self.elems.clone()
    }
}

impl<T: GaussianIntBase> GaussianArray<T>
where
    for<'r> &'r T: RefNum<T>,
{
    /// An array of `n` zeros
    pub fn zeros(n: usize) -> Self {
        GaussianArray::new(vec![GaussianInt::<T>::zero(); n])
    }

    /// Element-wise addition
    pub fn try_add(&self, other: &Self) -> Result<Self, GaussianError> {
        self.zip_with(other, |l, r| Ok(l + r)).map(GaussianArray::new)
    }

    /// Element-wise subtraction
    pub fn try_sub(&self, other: &Self) -> Result<Self, GaussianError> {
        self.zip_with(other, |l, r| Ok(l - r)).map(GaussianArray::new)
    }

    /// Element-wise multiplication
    pub fn try_mul(&self, other: &Self) -> Result<Self, GaussianError> {
        self.zip_with(other, |l, r| Ok(l * r)).map(GaussianArray::new)
    }

    /// Element-wise [GaussianInt::true_div], the quotients are floating complex numbers
    pub fn true_div(&self, other: &Self) -> Result<Vec<Complex64>, GaussianError> {
        self.zip_with(other, GaussianInt::<T>::true_div)
    }

    /// Element-wise [GaussianInt::floor_div]
    pub fn floor_div(&self, other: &Self) -> Result<Self, GaussianError> {
        self.zip_with(other, GaussianInt::<T>::floor_div)
            .map(GaussianArray::new)
    }

    /// Element-wise [GaussianInt::modulo]
    pub fn modulo(&self, other: &Self) -> Result<Self, GaussianError> {
        self.zip_with(other, GaussianInt::<T>::modulo)
            .map(GaussianArray::new)
    }

    /// Raise every element to the power `exp`
    pub fn powi(&self, exp: i64) -> Result<Self, GaussianError> {
        self.elems.iter().map(|z| z.powi(exp)).collect()
    }

    /// Conjugate every element
    pub fn conj(&self) -> Self {
        self.elems.iter().map(GaussianInt::<T>::conj).collect()
    }

    /// The norms of the elements
    pub fn norms(&self) -> Vec<T> {
        self.elems.iter().map(GaussianInt::<T>::norm).collect()
    }
}

#[cfg(feature = "rand")]
impl<T: GaussianIntBase + SampleUniform> GaussianArray<T>
where
    for<'r> &'r T: RefNum<T>,
{
    /// An array of `n` random elements drawn one after another from `rng`,
    /// see [GaussianInt::random]
    pub fn random<R: Rng>(n: usize, min: &T, max: &T, rng: &mut R) -> Result<Self, GaussianError> {
        (0..n)
            .map(|_| GaussianInt::<T>::random(&mut *rng, min, max))
            .collect()
    }

    /// Same as [GaussianArray::random], with a single private generator seeded by `seed`.
    ///
    /// All elements are drawn from the same stream, so they are not identical copies.
    pub fn random_seeded(n: usize, min: &T, max: &T, seed: u64) -> Result<Self, GaussianError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::random(n, min, max, &mut rng)
    }
}

impl<T: GaussianIntBase> Neg for GaussianArray<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = GaussianArray<T>;
    #[inline]
    fn neg(self) -> GaussianArray<T> {
        self.elems.into_iter().map(Neg::neg).collect()
    }
}

impl<'a, T: GaussianIntBase> Neg for &'a GaussianArray<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = GaussianArray<T>;
    #[inline]
    fn neg(self) -> GaussianArray<T> {
        self.elems.iter().map(Neg::neg).collect()
    }
}

impl<T> Index<usize> for GaussianArray<T> {
    type Output = GaussianInt<T>;
    #[inline]
    fn index(&self, index: usize) -> &GaussianInt<T> {
        &self.elems[index]
    }
}

impl<T> From<Vec<GaussianInt<T>>> for GaussianArray<T> {
    #[inline]
    fn from(elems: Vec<GaussianInt<T>>) -> Self {
        GaussianArray::new(elems)
    }
}

impl<T> FromIterator<GaussianInt<T>> for GaussianArray<T> {
    fn from_iter<I: IntoIterator<Item = GaussianInt<T>>>(iter: I) -> Self {
        GaussianArray::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for GaussianArray<T> {
    type Item = GaussianInt<T>;
    type IntoIter = std::vec::IntoIter<GaussianInt<T>>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elems.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a GaussianArray<T> {
    type Item = &'a GaussianInt<T>;
    type IntoIter = std::slice::Iter<'a, GaussianInt<T>>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elems.iter()
    }
}

impl<T: num_traits::Signed + fmt::Display> fmt::Display for GaussianArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, z) in self.elems.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", z)?;
        }
        write!(f, "]")
    }
}
