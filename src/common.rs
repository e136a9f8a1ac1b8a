// src/common.rs

use crate::tables::N;

/// One transform's worth of samples, in time or frequency order.
pub type Block<T> = [T; N];

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    SizeMismatch { expected: usize, actual: usize },
}

use core::fmt;

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::SizeMismatch { expected, actual } => write!(
                f,
                "Data buffer size does not match FFT size (expected {}, got {})",
                expected, actual
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// A complex sample the 32-point kernel can operate on.
///
/// Each implementation carries its own twiddle precision, so the kernel
/// never has to know whether it is running on floats or fixed-point words.
pub trait FftNum: Copy + Send + Sync + 'static {
    type Twiddle: Copy + Send + Sync + 'static;

    const ZERO: Self;

    /// Twiddle factor `e^{-2πik/N}` for `k` in `[0, N/2)`.
    fn twiddle(k: usize) -> Self::Twiddle;

    /// Returns `(upper + w * lower, upper - w * lower)`.
    fn butterfly(upper: Self, lower: Self, w: Self::Twiddle) -> (Self, Self);
}

pub trait FftProcess<T> {
    /// Transforms a caller-supplied slice, which must hold exactly `N` samples.
    fn process(&self, input: &[T]) -> Result<Block<T>, FftError>;
}
