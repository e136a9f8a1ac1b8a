// src/kernel.rs

//! Radix-2 Decimation-in-Time datapath for N = 32.
//!
//! Every function here reads from one block and writes to a different one.
//! Taking `&Block<T>` and `&mut Block<T>` lets the borrow checker enforce
//! that input and output never alias.

use crate::common::{Block, FftNum};
use crate::tables::{permutation, StageParams, N, STAGES};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Reorders `input` into bit-reversed index order.
pub(crate) fn bit_reverse<T: Copy>(input: &Block<T>, output: &mut Block<T>) {
    for (i, out) in output.iter_mut().enumerate() {
        *out = input[permutation(i)];
    }
}

/// Evaluates the butterfly at `(pass, span)` of one stage.
/// Returns the new `(upper, lower)` values; the caller stores them at
/// `params.pair(pass, span)`.
#[inline]
pub(crate) fn butterfly<T: FftNum>(
    input: &Block<T>,
    params: StageParams,
    pass: usize,
    span: usize,
) -> (T, T) {
    let (upper, lower) = params.pair(pass, span);
    let w = T::twiddle(params.twiddle_index(span));
    T::butterfly(input[upper], input[lower], w)
}

/// Applies the N/2 butterflies of one stage.
#[cfg(not(feature = "parallel"))]
pub(crate) fn butterfly_stage<T: FftNum>(input: &Block<T>, output: &mut Block<T>, params: StageParams) {
    for pass in 0..params.pass_count {
        for span in 0..params.stage_span {
            let (upper, lower) = params.pair(pass, span);
            let (u, l) = butterfly(input, params, pass, span);
            output[upper] = u;
            output[lower] = l;
        }
    }
}

/// Applies the N/2 butterflies of one stage, evaluated in parallel.
/// The scatter back into `output` happens only once every butterfly is done.
#[cfg(feature = "parallel")]
pub(crate) fn butterfly_stage<T: FftNum>(input: &Block<T>, output: &mut Block<T>, params: StageParams) {
    let mut results = [(T::ZERO, T::ZERO); N / 2];

    results.par_iter_mut().enumerate().for_each(|(i, result)| {
        let (pass, span) = (i / params.stage_span, i % params.stage_span);
        *result = butterfly(input, params, pass, span);
    });

    for (i, &(u, l)) in results.iter().enumerate() {
        let (upper, lower) = params.pair(i / params.stage_span, i % params.stage_span);
        output[upper] = u;
        output[lower] = l;
    }
}

/// Full 32-point forward transform.
///
/// The two intermediate blocks live on this call's stack, so concurrent
/// calls never share scratch storage.
pub(crate) fn fft32<T: FftNum>(input: &Block<T>) -> Block<T> {
    let mut front = [T::ZERO; N];
    let mut back = [T::ZERO; N];

    bit_reverse(input, &mut front);

    for (stage, params) in STAGES.iter().enumerate() {
        log::trace!(
            "fft32 stage {}: span={} passes={}",
            stage + 1,
            params.stage_span,
            params.pass_count
        );
        butterfly_stage(&front, &mut back, *params);
        core::mem::swap(&mut front, &mut back);
    }

    front
}

#[cfg(test)]
#[path = "kernel_tests.rs"]
mod tests;
