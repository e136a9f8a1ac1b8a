use crate::common::FftNum;
use crate::fft::Fft32;
use crate::tables::twiddle_f32;
use num_complex::Complex32; // Complex<f32>

/// Single-precision 32-point FFT.
pub type CplxFft = Fft32<Complex32>;

impl FftNum for Complex32 {
    type Twiddle = Complex32;

    const ZERO: Self = Complex32::new(0.0, 0.0);

    #[inline]
    fn twiddle(k: usize) -> Complex32 {
        twiddle_f32(k)
    }

    #[inline]
    fn butterfly(upper: Self, lower: Self, w: Complex32) -> (Self, Self) {
        let product = w * lower;
        (upper + product, upper - product)
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
