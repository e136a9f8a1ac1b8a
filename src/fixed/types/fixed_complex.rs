use super::fixed::Fixed;
use num_complex::Complex64;

/// Complex number with fixed-point real and imaginary parts.
/// Arithmetic follows the saturating policy of [`Fixed`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct ComplexFixed<const FRAC: u32> {
    pub re: Fixed<FRAC>,
    pub im: Fixed<FRAC>,
}

/// Agnostic square root, native with std and libm otherwise.
#[inline]
fn sqrt(value: f64) -> f64 {
    #[cfg(feature = "std")]
    return value.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrt(value);
}

impl<const FRAC: u32> ComplexFixed<FRAC> {
    pub const ZERO: Self = Self::new(Fixed::ZERO, Fixed::ZERO);

    #[inline]
    pub const fn new(re: Fixed<FRAC>, im: Fixed<FRAC>) -> Self {
        Self { re, im }
    }

    pub fn from_f64(re: f64, im: f64) -> Self {
        Self::new(Fixed::from_f64(re), Fixed::from_f64(im))
    }

    pub fn from_complex64(value: Complex64) -> Self {
        Self::from_f64(value.re, value.im)
    }

    pub fn to_complex64(self) -> Complex64 {
        Complex64::new(self.re.to_f64(), self.im.to_f64())
    }

    /// Euclidean magnitude, evaluated in f64.
    pub fn magnitude(self) -> f64 {
        let (re, im) = (self.re.to_f64(), self.im.to_f64());
        sqrt(re * re + im * im)
    }
}

use core::ops::{Add, Mul, Sub};

impl<const FRAC: u32> Add for ComplexFixed<FRAC> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<const FRAC: u32> Sub for ComplexFixed<FRAC> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

// Multiplication: ComplexFixed<F1> * ComplexFixed<F2> -> ComplexFixed<F1>
impl<const F1: u32, const F2: u32> Mul<ComplexFixed<F2>> for ComplexFixed<F1> {
    type Output = ComplexFixed<F1>;

    #[inline]
    fn mul(self, rhs: ComplexFixed<F2>) -> Self::Output {
        // (ac - bd)
        let re = (self.re * rhs.re) - (self.im * rhs.im);
        // (ad + bc)
        let im = (self.re * rhs.im) + (self.im * rhs.re);

        ComplexFixed { re, im }
    }
}
