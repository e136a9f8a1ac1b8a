use super::types::ComplexFixed;
use crate::common::FftNum;
use crate::fft::Fft32;
use crate::tables::{twiddle_q31, TWIDDLE_FRAC};

/// Fixed-point 32-point FFT for samples with `FRAC` fractional bits.
///
/// The twiddle factors are always Q31, so the same kernel serves any
/// sample format (Q15, Q20, ...). Pick `FRAC` so that the integer part has
/// room for 5 bits of growth: a block whose samples stay within `[-1, 1]`
/// can reach a magnitude of 32 in the DC bin.
pub type CplxFft<const FRAC: u32> = Fft32<ComplexFixed<FRAC>>;

/// Q15 samples stored in 32-bit words, leaving 16 integer bits of headroom.
pub type Q15 = ComplexFixed<15>;

impl<const FRAC: u32> FftNum for ComplexFixed<FRAC> {
    type Twiddle = ComplexFixed<TWIDDLE_FRAC>;

    const ZERO: Self = ComplexFixed::ZERO;

    #[inline]
    fn twiddle(k: usize) -> ComplexFixed<TWIDDLE_FRAC> {
        twiddle_q31(k)
    }

    #[inline]
    fn butterfly(upper: Self, lower: Self, w: ComplexFixed<TWIDDLE_FRAC>) -> (Self, Self) {
        // Product keeps the sample format, rounded once per partial product
        let product = lower * w;
        (upper + product, upper - product)
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
