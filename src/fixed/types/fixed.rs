// src/fixed/types/fixed.rs

/// Generic fixed-point structure based on the number of fractional bits (FRAC).
/// The internal value is stored as a signed 32-bit integer, so a `Fixed<FRAC>`
/// covers `[-2^(31-FRAC), 2^(31-FRAC))` with a resolution of `2^-FRAC`.
///
/// # Overflow policy
///
/// Every operation saturates to `[i32::MIN, i32::MAX]` instead of wrapping:
/// - `+`, `-` and unary `-` use the saturating integer primitives.
/// - `*` forms the full 64-bit product, rounds half up at the first dropped
///   bit, shifts right by the right-hand operand's fractional bits and then
///   clamps to the i32 range.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Fixed<const FRAC: u32>(i32);

#[inline]
const fn saturate(value: i64) -> i32 {
    if value > i32::MAX as i64 {
        i32::MAX
    } else if value < i32::MIN as i64 {
        i32::MIN
    } else {
        value as i32
    }
}

/// Agnostic rounding helper, native with std and libm otherwise.
#[inline]
fn round(value: f64) -> f64 {
    #[cfg(feature = "std")]
    return value.round();

    #[cfg(not(feature = "std"))]
    return libm::round(value);
}

impl<const FRAC: u32> Fixed<FRAC> {
    const FRAC_FITS: () = assert!(FRAC <= 31, "FRAC cannot be greater than 31 bits for i32");

    pub const ZERO: Self = Self(0);

    /// Creates a Fixed from the raw integer value (without shift).
    #[inline]
    pub const fn from_bits(bits: i32) -> Self {
        let () = Self::FRAC_FITS;
        Self(bits)
    }

    /// Creates a Fixed from an integer, applying the necessary shift.
    /// E.g.: Fixed::<8>::from_int(1) will result in internal value 256.
    /// Integers outside the representable range saturate.
    #[inline]
    pub const fn from_int(value: i32) -> Self {
        Self::from_bits(saturate((value as i64) << FRAC))
    }

    /// Converts an f64 to Fixed, rounding to the nearest step.
    /// Out-of-range values saturate and NaN maps to zero.
    pub fn from_f64(value: f64) -> Self {
        let scaling_factor = (1u64 << FRAC) as f64;
        Self::from_bits(round(value * scaling_factor) as i32)
    }

    /// Returns the stored raw value.
    #[inline]
    pub const fn to_bits(self) -> i32 {
        self.0
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / (1u64 << FRAC) as f64
    }
}

use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

impl<const FRAC: u32> Add for Fixed<FRAC> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl<const FRAC: u32> AddAssign for Fixed<FRAC> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const FRAC: u32> Sub for Fixed<FRAC> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl<const FRAC: u32> SubAssign for Fixed<FRAC> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const FRAC: u32> Neg for Fixed<FRAC> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(self.0.saturating_neg())
    }
}

// The result keeps the left operand's format, which lets a Q15 sample be
// multiplied by a Q31 twiddle without losing the twiddle's precision.
impl<const F1: u32, const F2: u32> Mul<Fixed<F2>> for Fixed<F1> {
    type Output = Fixed<F1>;

    #[inline]
    fn mul(self, rhs: Fixed<F2>) -> Self::Output {
        let product = self.0 as i64 * rhs.0 as i64;

        // If F2 > 0, add 2^(F2-1) for rounding
        let rounded = if F2 > 0 {
            let offset = 1i64 << (F2 - 1);
            (product + offset) >> F2
        } else {
            product
        };

        Fixed::from_bits(saturate(rounded))
    }
}

use core::fmt;

impl<const FRAC: u32> fmt::Display for Fixed<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f64())
    }
}

impl<const FRAC: u32> fmt::Debug for Fixed<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // In Debug, show both the decimal value and the raw value in parentheses
        write!(f, "{:.6} (raw: {})", self.to_f64(), self.0)
    }
}
