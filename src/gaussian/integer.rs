//! Implementation of Gaussian integers

use super::round::round_complex;
use super::GaussianIntBase;
use crate::traits::GaussianError;
use core::convert::TryFrom;
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};
use core::str::FromStr;
use num_complex::{Complex, Complex64};
use num_rational::Ratio;
use num_traits::{CheckedDiv, CheckedRem, One, Pow, RefNum, Signed, ToPrimitive, Zero};
use std::fmt;

#[cfg(feature = "rand")]
use rand::{distributions::uniform::SampleUniform, Rng, SeedableRng};
#[cfg(feature = "rand")]
use rand_chacha::ChaCha8Rng;

/// A Gaussian integer `re + im·i`.
///
/// The value is immutable once constructed, every operation returns a new value.
/// Two Gaussian integers are equal iff both of their components are equal.
#[derive(PartialEq, Eq, Hash, Clone, Debug, Copy, Default)]
pub struct GaussianInt<T> {
    re: T,
    im: T,
}

impl<T> GaussianInt<T> {
    /// Create a Gaussian integer `re + im·i`
    #[inline]
    pub const fn new(re: T, im: T) -> Self {
        GaussianInt { re, im }
    }

    /// Get the real part
    #[inline]
    pub const fn re(&self) -> &T {
        &self.re
    }

    /// Get the imaginary part
    #[inline]
    pub const fn im(&self) -> &T {
        &self.im
    }

    /// Get return-only references to the components `(re, im)`
    #[inline]
    pub const fn parts(&self) -> (&T, &T) {
        (&self.re, &self.im)
    }
}

#[inline]
fn to_f64<T: ToPrimitive>(v: &T) -> Result<f64, GaussianError> {
    v.to_f64().ok_or(GaussianError::Unrepresentable)
}

impl<T: GaussianIntBase> GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    /// The imaginary unit `i`
    #[inline]
    pub fn i() -> Self {
        GaussianInt::new(T::zero(), T::one())
    }

    /// The four units `[1, -1, i, -i]` of the ring
    pub fn units() -> [Self; 4] {
        [
            GaussianInt::new(T::one(), T::zero()),
            GaussianInt::new(-T::one(), T::zero()),
            GaussianInt::new(T::zero(), T::one()),
            GaussianInt::new(T::zero(), -T::one()),
        ]
    }

    /// Return the conjugate `re - im·i`
    #[inline]
    pub fn conj(&self) -> Self {
        GaussianInt::new(self.re.clone(), -self.im.clone())
    }

    /// Get the norm `re² + im²` (the squared magnitude).
    ///
    /// The norm is multiplicative and it's zero only for the zero element.
    #[inline]
    pub fn norm(&self) -> T {
        &self.re * &self.re + &self.im * &self.im
    }

    /// Test if the number is one of the units `1, -1, i, -i`
    #[inline]
    pub fn is_unit(&self) -> bool {
        (self.re.abs().is_one() && self.im.is_zero())
            || (self.re.is_zero() && self.im.abs().is_one())
    }

    /// Returns the other three associates `(-z, i·z, -i·z)`
    pub fn associated(&self) -> (Self, Self, Self) {
        (
            GaussianInt::new(-self.re.clone(), -self.im.clone()),
            GaussianInt::new(-self.im.clone(), self.re.clone()),
            GaussianInt::new(self.im.clone(), -self.re.clone()),
        )
    }

    /// Test if `other` equals `self` multiplied by a unit
    pub fn is_associate(&self, other: &Self) -> bool {
        if self == other {
            return true;
        }
        let (neg, left, right) = self.associated();
        &neg == other || &left == other || &right == other
    }

    /// Raise to a non-negative integer power, where `z⁰ = 1`.
    pub fn powi(&self, exp: i64) -> Result<Self, GaussianError> {
        if exp < 0 {
            return Err(GaussianError::NegativeExponent);
        }
        let exp = usize::try_from(exp).map_err(|_| GaussianError::Unrepresentable)?;
        Ok(num_traits::pow(self.clone(), exp))
    }

    /// Divide into a floating complex quotient (which is generally not a Gaussian integer).
    ///
    /// Pure real and pure imaginary divisors are handled by a direct division of the
    /// components, other divisors are multiplied by the conjugate first.
    pub fn true_div(&self, rhs: &Self) -> Result<Complex64, GaussianError> {
        if rhs.is_zero() {
            return Err(GaussianError::DivideByZero);
        }

        let (re, im) = if rhs.im.is_zero() {
            let d = to_f64(&rhs.re)?;
            (to_f64(&self.re)? / d, to_f64(&self.im)? / d)
        } else if rhs.re.is_zero() {
            // (a + bi) / ci = (b - ai) / c
            let d = to_f64(&rhs.im)?;
            (to_f64(&self.im)? / d, -to_f64(&self.re)? / d)
        } else {
            let numer = self * &rhs.conj();
            let d = to_f64(&rhs.norm())?;
            (to_f64(&numer.re)? / d, to_f64(&numer.im)? / d)
        };
        Ok(Complex64::new(re, im))
    }

    /// Divide into an exact rational complex quotient
    pub fn true_div_exact(&self, rhs: &Self) -> Result<Complex<Ratio<T>>, GaussianError> {
        if rhs.is_zero() {
            return Err(GaussianError::DivideByZero);
        }

        let numer = self * &rhs.conj();
        let d = rhs.norm();
        Ok(Complex::new(
            Ratio::new(numer.re, d.clone()),
            Ratio::new(numer.im, d),
        ))
    }

    /// Quotient of the Euclidean division: the lattice point nearest to `self / rhs`.
    ///
    /// Ties between equidistant lattice points are broken as in [round_complex].
    #[inline]
    pub fn floor_div(&self, rhs: &Self) -> Result<Self, GaussianError> {
        round_complex(self.true_div(rhs)?)
    }

    /// Remainder of the Euclidean division, `self - rhs * self.floor_div(rhs)`
    #[inline]
    pub fn modulo(&self, rhs: &Self) -> Result<Self, GaussianError> {
        Ok(self.div_rem(rhs)?.1)
    }

    /// Returns `(quotient, remainder)` such that `self == rhs * quotient + remainder`
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), GaussianError> {
        let quo = self.floor_div(rhs)?;
        let rem = self - &(rhs * &quo);
        Ok((quo, rem))
    }

    /// Greatest common divisor by the Euclidean algorithm.
    ///
    /// The result is determined up to a unit.
    pub fn gcd(&self, other: &Self) -> Result<Self, GaussianError> {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let r = a.modulo(&b)?;
            a = b;
            b = r;
        }
        Ok(a)
    }

    /// Convert to a floating complex number
    #[inline]
    pub fn to_complex64(&self) -> Option<Complex64> {
        Some(Complex64::new(self.re.to_f64()?, self.im.to_f64()?))
    }

    /// Convert from a floating complex number whose both parts are integers
    pub fn from_complex64(z: Complex64) -> Result<Self, GaussianError> {
        if !z.re.is_finite() || !z.im.is_finite() || z.re.fract() != 0. || z.im.fract() != 0. {
            return Err(GaussianError::NotIntegral);
        }
        let re = T::from_f64(z.re).ok_or(GaussianError::Unrepresentable)?;
        let im = T::from_f64(z.im).ok_or(GaussianError::Unrepresentable)?;
        Ok(GaussianInt::new(re, im))
    }
}

#[cfg(feature = "rand")]
impl<T: GaussianIntBase + SampleUniform> GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    /// Draw the real and imaginary parts independently and uniformly from `[min, max]`
    pub fn random<R: Rng>(rng: &mut R, min: &T, max: &T) -> Result<Self, GaussianError> {
        if min > max {
            return Err(GaussianError::EmptyRange);
        }
        let re = rng.gen_range(min.clone()..=max.clone());
        let im = rng.gen_range(min.clone()..=max.clone());
        Ok(GaussianInt::new(re, im))
    }

    /// Same as [GaussianInt::random], with a private generator seeded by `seed`
    #[inline]
    pub fn random_seeded(min: &T, max: &T, seed: u64) -> Result<Self, GaussianError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::random(&mut rng, min, max)
    }
}

impl<T> From<T> for GaussianInt<T>
where
    T: Zero,
{
    /// Create a `GaussianInt` lying on the real axis
    #[inline]
    fn from(t: T) -> Self {
        GaussianInt::new(t, T::zero())
    }
}

impl<T> From<(T, T)> for GaussianInt<T> {
    #[inline]
    fn from((re, im): (T, T)) -> Self {
        GaussianInt::new(re, im)
    }
}

impl<T> Into<(T, T)> for GaussianInt<T> {
    /// Deconstruct the Gaussian integer `re + im·i` into tuple `(re, im)`
    #[inline]
    fn into(self) -> (T, T) {
        (self.re, self.im)
    }
}

impl<T: Signed + fmt::Display> fmt::Display for GaussianInt<T> {
    /// Formats as `"3 + 4j"` or `"3 - 4j"`. A zero imaginary part is printed with
    /// the minus sign (`"3 - 0j"`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im.is_positive() { '+' } else { '-' };
        write!(f, "{} {} {}j", self.re, sign, self.im.abs())
    }
}

impl<T: GaussianIntBase + FromStr> FromStr for GaussianInt<T> {
    type Err = GaussianError;

    /// Parse from the format produced by [fmt::Display], like `"3 + 4j"` or `"-3 - 4j"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || GaussianError::Parse(s.to_string());
        let body = s.trim().strip_suffix('j').ok_or_else(err)?;

        // the separating sign is the last one surrounded by spaces
        let (pos, negative) = match (body.rfind(" + "), body.rfind(" - ")) {
            (Some(p), Some(m)) if p > m => (p, false),
            (_, Some(m)) => (m, true),
            (Some(p), None) => (p, false),
            (None, None) => return Err(err()),
        };

        let re = body[..pos].trim().parse::<T>().map_err(|_| err())?;
        let im = body[pos + 3..].trim().parse::<T>().map_err(|_| err())?;
        if im.is_negative() {
            return Err(err());
        }
        Ok(GaussianInt::new(re, if negative { -im } else { im }))
    }
}

macro_rules! forward_binop {
    (impl $imp:ident, $method:ident) => {
        impl<'a, T: GaussianIntBase> $imp<&'a GaussianInt<T>> for GaussianInt<T>
        where
            for<'r> &'r T: RefNum<T>,
        {
            type Output = GaussianInt<T>;
            #[inline]
            fn $method(self, rhs: &'a GaussianInt<T>) -> GaussianInt<T> {
                (&self).$method(rhs)
            }
        }

        impl<'a, T: GaussianIntBase> $imp<GaussianInt<T>> for &'a GaussianInt<T>
        where
            for<'r> &'r T: RefNum<T>,
        {
            type Output = GaussianInt<T>;
            #[inline]
            fn $method(self, rhs: GaussianInt<T>) -> GaussianInt<T> {
                self.$method(&rhs)
            }
        }

        impl<T: GaussianIntBase> $imp<GaussianInt<T>> for GaussianInt<T>
        where
            for<'r> &'r T: RefNum<T>,
        {
            type Output = GaussianInt<T>;
            #[inline]
            fn $method(self, rhs: GaussianInt<T>) -> GaussianInt<T> {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! arith_impl {
    (impl $imp:ident, $method:ident) => {
        // (a + bi) `op` (c + di) = (a `op` c) + (b `op` d)i
        impl<'a, 'b, T: GaussianIntBase> $imp<&'b GaussianInt<T>> for &'a GaussianInt<T>
        where
            for<'r> &'r T: RefNum<T>,
        {
            type Output = GaussianInt<T>;
            #[inline]
            fn $method(self, rhs: &'b GaussianInt<T>) -> GaussianInt<T> {
                GaussianInt::new((&self.re).$method(&rhs.re), (&self.im).$method(&rhs.im))
            }
        }
        forward_binop!(impl $imp, $method);

        // (a + bi) `op` c = (a `op` c) + bi
        impl<T: GaussianIntBase> $imp<T> for GaussianInt<T>
        where
            for<'r> &'r T: RefNum<T>,
        {
            type Output = GaussianInt<T>;
            #[inline]
            fn $method(self, rhs: T) -> GaussianInt<T> {
                GaussianInt::new(self.re.$method(rhs), self.im)
            }
        }
    };
}

arith_impl!(impl Add, add);
arith_impl!(impl Sub, sub);

impl<'a, 'b, T: GaussianIntBase> Mul<&'b GaussianInt<T>> for &'a GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = GaussianInt<T>;
    #[inline]
    fn mul(self, rhs: &'b GaussianInt<T>) -> GaussianInt<T> {
        GaussianInt::new(
            &self.re * &rhs.re - &self.im * &rhs.im,
            &self.re * &rhs.im + &self.im * &rhs.re,
        )
    }
}
forward_binop!(impl Mul, mul);

impl<T: GaussianIntBase> Mul<T> for GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = GaussianInt<T>;
    #[inline]
    fn mul(self, rhs: T) -> GaussianInt<T> {
        GaussianInt::new(self.re * &rhs, self.im * rhs)
    }
}

// The operator form panics on a zero divisor like the primitive integers do,
// use `floor_div`/`modulo` or `CheckedDiv`/`CheckedRem` to get the error instead.
impl<'a, 'b, T: GaussianIntBase> Div<&'b GaussianInt<T>> for &'a GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = GaussianInt<T>;
    #[inline]
    fn div(self, rhs: &'b GaussianInt<T>) -> GaussianInt<T> {
        match self.floor_div(rhs) {
            Ok(q) => q,
            Err(e) => panic!("{}", e),
        }
    }
}
forward_binop!(impl Div, div);

impl<'a, 'b, T: GaussianIntBase> Rem<&'b GaussianInt<T>> for &'a GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = GaussianInt<T>;
    #[inline]
    fn rem(self, rhs: &'b GaussianInt<T>) -> GaussianInt<T> {
        match self.modulo(rhs) {
            Ok(r) => r,
            Err(e) => panic!("{}", e),
        }
    }
}
forward_binop!(impl Rem, rem);

impl<T: GaussianIntBase> CheckedDiv for GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    #[inline]
    fn checked_div(&self, v: &Self) -> Option<Self> {
        self.floor_div(v).ok()
    }
}

impl<T: GaussianIntBase> CheckedRem for GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    #[inline]
    fn checked_rem(&self, v: &Self) -> Option<Self> {
        self.modulo(v).ok()
    }
}

impl<T: GaussianIntBase> Neg for GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = GaussianInt<T>;
    #[inline]
    fn neg(self) -> GaussianInt<T> {
        GaussianInt::new(-self.re, -self.im)
    }
}

impl<'a, T: GaussianIntBase> Neg for &'a GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = GaussianInt<T>;
    #[inline]
    fn neg(self) -> GaussianInt<T> {
        GaussianInt::new(-self.re.clone(), -self.im.clone())
    }
}

impl<T: GaussianIntBase> Pow<u32> for GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = GaussianInt<T>;
    #[inline]
    fn pow(self, rhs: u32) -> GaussianInt<T> {
        num_traits::pow(self, rhs as usize)
    }
}

impl<'a, T: GaussianIntBase> Pow<u32> for &'a GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = GaussianInt<T>;
    #[inline]
    fn pow(self, rhs: u32) -> GaussianInt<T> {
        num_traits::pow(self.clone(), rhs as usize)
    }
}

impl<T: GaussianIntBase> Zero for GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    #[inline]
    fn zero() -> Self {
        GaussianInt::new(T::zero(), T::zero())
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }
}

impl<T: GaussianIntBase> One for GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    #[inline]
    fn one() -> Self {
        GaussianInt::new(T::one(), T::zero())
    }
    #[inline]
    fn is_one(&self) -> bool {
        self.re.is_one() && self.im.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    pub const Z3_4: GaussianInt<i64> = GaussianInt::new(3, 4);
    pub const Z1_2: GaussianInt<i64> = GaussianInt::new(1, 2);
    pub const ONE_I: GaussianInt<i64> = GaussianInt::new(1, 1);

    #[test]
    fn property_test() {
        // conjugate
        assert_eq!(Z3_4.conj(), GaussianInt::new(3, -4));
        assert_eq!(Z3_4.conj().conj(), Z3_4);

        // norm
        assert_eq!(Z3_4.norm(), 25);
        assert_eq!(GaussianInt::<i64>::zero().norm(), 0);
        assert_eq!(GaussianInt::new(-2i64, -1).norm(), 5);

        // units
        for u in GaussianInt::<i64>::units().iter() {
            assert!(u.is_unit());
        }
        assert!(!ONE_I.is_unit());
        assert!(!GaussianInt::<i64>::zero().is_unit());
        assert!(!GaussianInt::new(i64::MAX, 0).is_unit());
        assert!(!GaussianInt::new(i64::MIN + 1, 1).is_unit());
        assert!(!GaussianInt::new(0, i8::MAX).is_unit());

        // associates
        let (neg, left, right) = Z1_2.associated();
        assert_eq!(neg, GaussianInt::new(-1, -2));
        assert_eq!(left, Z1_2 * GaussianInt::<i64>::i());
        assert_eq!(right, Z1_2 * -GaussianInt::<i64>::i());
        assert!(Z1_2.is_associate(&GaussianInt::new(-2, 1)));
        assert!(Z1_2.is_associate(&Z1_2));
        assert!(!Z1_2.is_associate(&GaussianInt::new(2, 1)));
    }

    #[test]
    fn hash_test() {
        use std::collections::HashSet;

        let set: HashSet<_> = [Z3_4, Z1_2, GaussianInt::new(3, 4), Z3_4.conj().conj()]
            .iter()
            .cloned()
            .collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&GaussianInt::new(1, 2)));
        assert!(!set.contains(&GaussianInt::new(4, 3)));
    }

    #[test]
    fn arithmic_test() {
        // add & sub
        assert_eq!(Z3_4 + Z1_2, GaussianInt::new(4, 6));
        assert_eq!(&Z3_4 - &Z1_2, GaussianInt::new(2, 2));
        assert_eq!(Z3_4 + 2, GaussianInt::new(5, 4));
        assert_eq!(Z3_4 - 2, GaussianInt::new(1, 4));
        assert_eq!(-Z3_4, GaussianInt::new(-3, -4));
        assert_eq!(-&Z3_4, GaussianInt::new(-3, -4));

        // mul
        assert_eq!(Z3_4 * Z1_2, GaussianInt::new(-5, 10));
        assert_eq!(Z3_4 * 2, GaussianInt::new(6, 8));
        assert_eq!(
            GaussianInt::<i64>::i() * GaussianInt::<i64>::i(),
            -GaussianInt::<i64>::one()
        );
        assert!((Z3_4 * GaussianInt::<i64>::one()) == Z3_4);

        // pow
        assert_eq!(ONE_I.powi(0), Ok(GaussianInt::<i64>::one()));
        assert_eq!(ONE_I.powi(1), Ok(ONE_I));
        assert_eq!(ONE_I.powi(2), Ok(GaussianInt::new(0, 2)));
        assert_eq!(ONE_I.powi(4), Ok(GaussianInt::new(-4, 0)));
        assert_eq!(GaussianInt::<i64>::i().powi(4), Ok(GaussianInt::<i64>::one()));
        assert_eq!(ONE_I.powi(-1), Err(GaussianError::NegativeExponent));
        assert_eq!(ONE_I.pow(3u32), GaussianInt::new(-2, 2));
        assert_eq!((&Z3_4).pow(0u32), GaussianInt::<i64>::one());
    }

    #[test]
    fn division_test() {
        // true division
        let q = Z1_2.true_div(&Z3_4).unwrap();
        assert!((q.re - 0.44).abs() < 1e-12 && (q.im - 0.08).abs() < 1e-12);
        assert_eq!(
            Z3_4.true_div(&GaussianInt::new(2, 0)),
            Ok(Complex64::new(1.5, 2.))
        );
        assert_eq!(
            Z3_4.true_div(&GaussianInt::new(0, 2)),
            Ok(Complex64::new(2., -1.5))
        );
        assert_eq!(
            Z3_4.true_div(&GaussianInt::<i64>::zero()),
            Err(GaussianError::DivideByZero)
        );
        assert_eq!(
            Z1_2.true_div_exact(&Z3_4),
            Ok(Complex::new(Ratio::new(11, 25), Ratio::new(2, 25)))
        );

        // euclidean division
        let a = GaussianInt::new(7i64, 2);
        let b = GaussianInt::new(2i64, 1);
        assert_eq!(a.floor_div(&b), Ok(GaussianInt::new(3, -1)));
        assert_eq!(a.modulo(&b), Ok(GaussianInt::new(0, 1)));
        assert_eq!(a.div_rem(&b), Ok((GaussianInt::new(3, -1), GaussianInt::new(0, 1))));
        assert_eq!(a / b, GaussianInt::new(3, -1));
        assert_eq!(a % b, GaussianInt::new(0, 1));

        // 3 / 2 = 1.5 is a tie, the smaller quotient is chosen
        let three = GaussianInt::from(3i64);
        let two = GaussianInt::from(2i64);
        assert_eq!(three.floor_div(&two), Ok(GaussianInt::<i64>::one()));
        assert_eq!(three.modulo(&two), Ok(GaussianInt::<i64>::one()));

        // division by zero
        assert_eq!(a.floor_div(&GaussianInt::<i64>::zero()), Err(GaussianError::DivideByZero));
        assert_eq!(a.modulo(&GaussianInt::<i64>::zero()), Err(GaussianError::DivideByZero));
        assert_eq!(a.checked_div(&GaussianInt::<i64>::zero()), None);
        assert_eq!(a.checked_rem(&GaussianInt::<i64>::zero()), None);
        assert_eq!(a.checked_div(&b), Some(GaussianInt::new(3, -1)));
    }

    #[test]
    #[should_panic]
    fn division_by_zero_panics() {
        let _ = Z3_4 / GaussianInt::<i64>::zero();
    }

    #[test]
    fn gcd_test() {
        let g = GaussianInt::from(5i64).gcd(&GaussianInt::new(3, 1)).unwrap();
        assert!(g.is_associate(&GaussianInt::new(2, -1)));

        let g = GaussianInt::new(4i64, 2).gcd(&GaussianInt::<i64>::zero()).unwrap();
        assert_eq!(g, GaussianInt::new(4, 2));
    }

    #[test]
    fn conversion_test() {
        assert_eq!(GaussianInt::from(5i32), GaussianInt::new(5, 0));
        assert_eq!(GaussianInt::<i32>::from((1, -1)), GaussianInt::new(1, -1));
        let parts: (i32, i32) = GaussianInt::new(1, -1).into();
        assert_eq!(parts, (1, -1));
        assert_eq!(Z3_4.to_complex64(), Some(Complex64::new(3., 4.)));

        assert_eq!(
            GaussianInt::<i64>::from_complex64(Complex64::new(3., -4.)),
            Ok(GaussianInt::new(3, -4))
        );
        assert_eq!(
            GaussianInt::<i64>::from_complex64(Complex64::new(3.5, 4.)),
            Err(GaussianError::NotIntegral)
        );
        assert_eq!(
            GaussianInt::<i64>::from_complex64(Complex64::new(f64::NAN, 0.)),
            Err(GaussianError::NotIntegral)
        );
        assert_eq!(
            GaussianInt::<i8>::from_complex64(Complex64::new(300., 0.)),
            Err(GaussianError::Unrepresentable)
        );
    }

    #[test]
    fn formatting_test() {
        assert_eq!(format!("{}", Z3_4), "3 + 4j");
        assert_eq!(format!("{}", GaussianInt::new(3, -4)), "3 - 4j");
        assert_eq!(format!("{}", GaussianInt::new(-1, 1)), "-1 + 1j");
        assert_eq!(format!("{}", GaussianInt::new(5, 0)), "5 - 0j");
        assert_eq!(format!("{}", GaussianInt::new(0, 0)), "0 - 0j");
    }

    #[test]
    fn parse_test() {
        assert_eq!("3 + 4j".parse::<GaussianInt<i64>>(), Ok(Z3_4));
        assert_eq!("-3 - 4j".parse::<GaussianInt<i64>>(), Ok(GaussianInt::new(-3, -4)));
        assert_eq!(" 5 - 0j ".parse::<GaussianInt<i64>>(), Ok(GaussianInt::new(5, 0)));
        for s in ["3 + 4", "3+4j", "3 + -4j", "a + 4j", "j"].iter() {
            assert!(matches!(
                s.parse::<GaussianInt<i64>>(),
                Err(GaussianError::Parse(_))
            ));
        }

        for z in [Z3_4, Z1_2.conj(), GaussianInt::new(-7, 0)].iter() {
            assert_eq!(z.to_string().parse::<GaussianInt<i64>>().as_ref(), Ok(z));
        }
    }

    #[cfg(feature = "rand")]
    #[test]
    fn random_test() {
        let a = GaussianInt::<i64>::random_seeded(&-10, &10, 42).unwrap();
        let b = GaussianInt::<i64>::random_seeded(&-10, &10, 42).unwrap();
        assert_eq!(a, b);
        assert!((-10..=10).contains(a.re()) && (-10..=10).contains(a.im()));

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let z = GaussianInt::<i32>::random(&mut rng, &0, &3).unwrap();
            assert!((0..=3).contains(z.re()) && (0..=3).contains(z.im()));
        }
        assert_eq!(
            GaussianInt::<i64>::random_seeded(&1, &0, 42),
            Err(GaussianError::EmptyRange)
        );
        assert_eq!(
            GaussianInt::<i64>::random_seeded(&5, &5, 1),
            Ok(GaussianInt::new(5, 5))
        );
    }

    #[cfg(feature = "num-bigint")]
    #[test]
    fn bigint_test() {
        use num_bigint::BigInt;

        let a = GaussianInt::new(BigInt::from(i64::MAX), BigInt::from(1));
        let sq = &a * &a;
        assert_eq!(sq.norm(), a.norm() * a.norm());

        // the floating quotient loses precision at this magnitude, the exact one doesn't
        let (re, im): (BigInt, BigInt) = a.clone().into();
        assert_eq!(
            sq.true_div_exact(&a),
            Ok(Complex::new(Ratio::from(re), Ratio::from(im)))
        );
    }

    fn small() -> impl Strategy<Value = GaussianInt<i64>> {
        (-1000i64..1000, -1000i64..1000).prop_map(|(re, im)| GaussianInt::new(re, im))
    }

    proptest! {
        #[test]
        fn division_identity(a in small(), b in small()) {
            prop_assume!(!b.is_zero());
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(&b * &q + &r, a);
            prop_assert!(r.norm() * 2 <= b.norm());
        }

        #[test]
        fn norm_laws(a in small(), b in small()) {
            prop_assert_eq!(a.norm(), a.conj().norm());
            prop_assert!(a.norm() >= 0);
            prop_assert_eq!(a.norm() == 0, a.is_zero());
            prop_assert_eq!((&a * &b).norm(), a.norm() * b.norm());
        }

        #[test]
        fn associates_share_norm(a in small()) {
            let (x, y, z) = a.associated();
            prop_assert_eq!(x.norm(), a.norm());
            prop_assert_eq!(y.norm(), a.norm());
            prop_assert_eq!(z.norm(), a.norm());
        }
    }
}
