// src/tables.rs

//! Read-only constants shared by every transform: the bit-reversal
//! permutation, the twiddle factors for each sample precision and the
//! per-stage butterfly parameters.

use crate::fixed::types::{ComplexFixed, Fixed};
use num_complex::Complex32;

/// Transform length.
pub const N: usize = 32;

/// Number of butterfly stages, `log2(N)`.
pub const LOG2_N: usize = 5;

/// Fractional bits for twiddle factors.
/// Q31 gives the highest precision an i32 word can hold.
pub const TWIDDLE_FRAC: u32 = 31;

/// Bit-reversal permutation for 5-bit indices.
pub static BITREV: [usize; N] = [
    0, 16, 8, 24, 4, 20, 12, 28, 2, 18, 10, 26, 6, 22, 14, 30, //
    1, 17, 9, 25, 5, 21, 13, 29, 3, 19, 11, 27, 7, 23, 15, 31,
];

const C1: f32 = 0.980_785_28;
const C2: f32 = 0.923_879_53;
const C3: f32 = 0.831_469_61;
const C4: f32 = 0.707_106_78;
const C5: f32 = 0.555_570_23;
const C6: f32 = 0.382_683_43;
const C7: f32 = 0.195_090_32;

/// `e^{-2πik/32}` for k in `[0, 16)`, single precision.
pub static TWIDDLES_F32: [Complex32; N / 2] = [
    Complex32::new(1.0, 0.0),
    Complex32::new(C1, -C7),
    Complex32::new(C2, -C6),
    Complex32::new(C3, -C5),
    Complex32::new(C4, -C4),
    Complex32::new(C5, -C3),
    Complex32::new(C6, -C2),
    Complex32::new(C7, -C1),
    Complex32::new(0.0, -1.0),
    Complex32::new(-C7, -C1),
    Complex32::new(-C6, -C2),
    Complex32::new(-C5, -C3),
    Complex32::new(-C4, -C4),
    Complex32::new(-C3, -C5),
    Complex32::new(-C2, -C6),
    Complex32::new(-C1, -C7),
];

const fn q31(re: i32, im: i32) -> ComplexFixed<TWIDDLE_FRAC> {
    ComplexFixed::new(Fixed::from_bits(re), Fixed::from_bits(im))
}

const Q1: i32 = 2_106_220_352;
const Q2: i32 = 1_984_016_189;
const Q3: i32 = 1_785_567_396;
const Q4: i32 = 1_518_500_250;
const Q5: i32 = 1_193_077_991;
const Q6: i32 = 821_806_413;
const Q7: i32 = 418_953_276;

/// `e^{-2πik/32}` for k in `[0, 16)`, Q31.
///
/// +1.0 is not representable in Q31 and is stored saturated as `i32::MAX`.
/// -1.0 is exactly `i32::MIN`.
pub static TWIDDLES_Q31: [ComplexFixed<TWIDDLE_FRAC>; N / 2] = [
    q31(i32::MAX, 0),
    q31(Q1, -Q7),
    q31(Q2, -Q6),
    q31(Q3, -Q5),
    q31(Q4, -Q4),
    q31(Q5, -Q3),
    q31(Q6, -Q2),
    q31(Q7, -Q1),
    q31(0, i32::MIN),
    q31(-Q7, -Q1),
    q31(-Q6, -Q2),
    q31(-Q5, -Q3),
    q31(-Q4, -Q4),
    q31(-Q3, -Q5),
    q31(-Q2, -Q6),
    q31(-Q1, -Q7),
];

/// Input position read by output slot `i` of the bit-reversal stage.
#[inline]
pub fn permutation(i: usize) -> usize {
    BITREV[i]
}

#[inline]
pub fn twiddle_f32(k: usize) -> Complex32 {
    TWIDDLES_F32[k]
}

#[inline]
pub fn twiddle_q31(k: usize) -> ComplexFixed<TWIDDLE_FRAC> {
    TWIDDLES_Q31[k]
}

/// Geometry of one butterfly stage.
///
/// `stage_span` is the distance between the two samples of a butterfly,
/// `pass_count` the number of independent groups, `index_shift` maps the
/// position inside a group onto the twiddle table and `pass_shift` maps the
/// group number onto the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageParams {
    pub stage_span: usize,
    pub pass_count: usize,
    pub index_shift: u32,
    pub pass_shift: u32,
}

impl StageParams {
    pub const fn new(stage_span: usize, pass_count: usize, index_shift: u32, pass_shift: u32) -> Self {
        Self { stage_span, pass_count, index_shift, pass_shift }
    }

    /// Derives the parameters of stage `stage` (0-based) of a radix-2 DIT.
    pub const fn for_stage(stage: u32) -> Self {
        Self {
            stage_span: 1 << stage,
            pass_count: N >> (stage + 1),
            index_shift: LOG2_N as u32 - 1 - stage,
            pass_shift: stage + 1,
        }
    }

    #[inline]
    pub const fn twiddle_index(&self, span: usize) -> usize {
        span << self.index_shift
    }

    /// Returns `(upper, lower)` block indices of the butterfly at `(pass, span)`.
    #[inline]
    pub const fn pair(&self, pass: usize, span: usize) -> (usize, usize) {
        let upper = span + (pass << self.pass_shift);
        (upper, upper + self.stage_span)
    }
}

/// The five stages in execution order.
pub const STAGES: [StageParams; LOG2_N] = [
    StageParams::new(1, 16, 4, 1),
    StageParams::new(2, 8, 3, 2),
    StageParams::new(4, 4, 2, 3),
    StageParams::new(8, 2, 1, 4),
    StageParams::new(16, 1, 0, 5),
];

#[cfg(test)]
#[path = "tables_tests.rs"]
mod tests;
