// src/fft.rs

use crate::common::{Block, FftError, FftNum, FftProcess};
use crate::kernel::fft32;
use crate::tables::N;
use core::marker::PhantomData;

/// Handle for the 32-point forward FFT over samples of type `T`.
///
/// All tables are process-wide constants, so the handle carries no data:
/// it is free to create, `Copy`, and safe to share between threads.
pub struct Fft32<T> {
    _sample: PhantomData<fn() -> T>,
}

impl<T: FftNum> Fft32<T> {
    pub const fn new() -> Self {
        Self { _sample: PhantomData }
    }

    /// Transforms one time-domain block into its spectrum in natural order
    /// (DC at index 0).
    pub fn transform(&self, input: &Block<T>) -> Block<T> {
        fft32(input)
    }

    /// Like [`transform`](Self::transform), for callers holding a slice.
    pub fn process(&self, input: &[T]) -> Result<Block<T>, FftError> {
        let block = as_block(input)?;
        Ok(self.transform(block))
    }

    /// Replaces the contents of `buffer` with its spectrum.
    pub fn process_in_place(&self, buffer: &mut [T]) -> Result<(), FftError> {
        let spectrum = self.process(buffer)?;
        buffer.copy_from_slice(&spectrum);
        Ok(())
    }
}

fn as_block<T>(input: &[T]) -> Result<&Block<T>, FftError> {
    input.try_into().map_err(|_| {
        log::debug!("rejecting block of {} samples, expected {}", input.len(), N);
        FftError::SizeMismatch { expected: N, actual: input.len() }
    })
}

impl<T: FftNum> Default for Fft32<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Fft32<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Fft32<T> {}

impl<T> core::fmt::Debug for Fft32<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Fft32").field("len", &N).finish()
    }
}

// Implement FftProcess for every sample precision, so host code can stay
// generic over the format it feeds in.
impl<T: FftNum> FftProcess<T> for Fft32<T> {
    fn process(&self, input: &[T]) -> Result<Block<T>, FftError> {
        Fft32::process(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::Q15;
    use num_complex::Complex32;
    use std::vec;

    #[test]
    fn test_process_rejects_short_slice() {
        let fft = Fft32::<Complex32>::new();
        let input = vec![Complex32::new(1.0, 0.0); N - 1];
        assert_eq!(
            fft.process(&input),
            Err(FftError::SizeMismatch { expected: N, actual: N - 1 })
        );
    }

    #[test]
    fn test_process_rejects_long_slice() {
        let fft = Fft32::<Q15>::new();
        let input = vec![Q15::ZERO; N + 1];
        assert_eq!(
            fft.process(&input),
            Err(FftError::SizeMismatch { expected: N, actual: N + 1 })
        );
    }

    #[test]
    fn test_process_in_place_rejects_empty_slice() {
        let fft = Fft32::<Q15>::new();
        let mut buffer: [Q15; 0] = [];
        assert_eq!(
            fft.process_in_place(&mut buffer),
            Err(FftError::SizeMismatch { expected: N, actual: 0 })
        );
    }

    #[test]
    fn test_rejected_buffer_is_untouched() {
        let fft = Fft32::<Q15>::new();
        let mut buffer = vec![Q15::from_f64(1.0, 0.0); 16];
        let before = buffer.clone();
        assert!(fft.process_in_place(&mut buffer).is_err());
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_process_matches_transform() {
        let fft = Fft32::<Complex32>::default();
        let input: Block<Complex32> =
            core::array::from_fn(|i| Complex32::new(i as f32, -(i as f32) * 0.5));

        let from_slice = fft.process(&input[..]).unwrap();
        assert_eq!(from_slice, fft.transform(&input));

        let mut buffer = input;
        fft.process_in_place(&mut buffer).unwrap();
        assert_eq!(buffer, from_slice);
    }

    #[test]
    fn test_trait_object_dispatch() {
        let fft = Fft32::<Q15>::new();
        let process: &dyn FftProcess<Q15> = &fft;
        let mut input = [Q15::ZERO; N];
        input[0] = Q15::from_f64(1.0, 0.0);
        let out = process.process(&input).unwrap();
        assert!(out.iter().all(|&c| c == Q15::from_f64(1.0, 0.0)));
    }

    #[test]
    fn test_error_display() {
        let err = FftError::SizeMismatch { expected: 32, actual: 7 };
        assert_eq!(
            std::format!("{}", err),
            "Data buffer size does not match FFT size (expected 32, got 7)"
        );
    }
}
