use super::super::types::{ComplexFixed, Fixed};
use super::*;
use crate::tables::N;

fn assert_complex_close<const FRAC: u32>(
    val: ComplexFixed<FRAC>,
    expected_re: f64,
    expected_im: f64,
    tolerance: f64,
) {
    let re = val.re.to_f64();
    let im = val.im.to_f64();

    let dist = ((re - expected_re).powi(2) + (im - expected_im).powi(2)).sqrt();

    assert!(
        dist < tolerance,
        "Error too large. Expected: ({:.4}, {:.4}), Got: ({:.4}, {:.4}), Dist: {:.4}",
        expected_re,
        expected_im,
        re,
        im,
        dist
    );
}

#[test]
fn test_fft_impulse_q15_is_exact() {
    let fft = CplxFft::<15>::new();
    let mut input = [Q15::ZERO; N];
    input[0] = Q15::new(Fixed::from_int(1), Fixed::from_int(0));

    let output = fft.transform(&input);

    // Only W^k * 0 products are formed, and those round to exactly zero
    let one = Fixed::<15>::from_int(1).to_bits();
    for (i, val) in output.iter().enumerate() {
        assert_eq!(val.re.to_bits(), one, "Real part at index {}", i);
        assert_eq!(val.im.to_bits(), 0, "Imaginary part at index {}", i);
    }
}

#[test]
fn test_fft_shifted_impulse_has_constant_magnitude() {
    let fft = CplxFft::<15>::new();
    let mut input = [Q15::ZERO; N];
    input[3] = Q15::from_f64(0.5, 0.0);

    let output = fft.transform(&input);

    for (k, val) in output.iter().enumerate() {
        assert!((val.magnitude() - 0.5).abs() < 1e-3, "bin {}: {:?}", k, val);
    }
}

#[test]
fn test_fft_dc_q15() {
    let fft = CplxFft::<15>::new();
    let v = Q15::from_f64(0.5, -0.25);
    let input = [v; N];

    let output = fft.transform(&input);

    assert_complex_close(output[0], 16.0, -8.0, 1e-3);
    for val in &output[1..] {
        assert_complex_close(*val, 0.0, 0.0, 1e-3);
    }
}

#[test]
fn test_fft_full_scale_dc_fits_q15_headroom() {
    // Largest unit-range input grows by 5 bits and still fits the word
    let fft = CplxFft::<15>::new();
    let input = [Q15::from_f64(1.0, -1.0); N];

    let output = fft.transform(&input);

    assert_eq!(output[0].re, Fixed::from_int(32));
    assert_eq!(output[0].im, Fixed::from_int(-32));
}

#[test]
fn test_fft_saturates_instead_of_wrapping() {
    // Q0.31 samples have no integer headroom at all
    let fft = CplxFft::<31>::new();
    let half = ComplexFixed::<31>::new(Fixed::from_bits(1 << 30), Fixed::from_bits(0));
    let input = [half; N];

    let output = fft.transform(&input);

    assert_eq!(output[0].re.to_bits(), i32::MAX);
    assert!(output[0].re.to_bits() > 0);
}

#[test]
fn test_fft_alternating_q20() {
    // [1, -1, 1, -1, ...] puts all energy in the Nyquist bin
    const FRAC: u32 = 20;
    let fft = CplxFft::<FRAC>::new();
    let input: [ComplexFixed<FRAC>; N] = core::array::from_fn(|t| {
        let sign = if t % 2 == 0 { 1.0 } else { -1.0 };
        ComplexFixed::from_f64(sign, 0.0)
    });

    let output = fft.transform(&input);

    for (k, &val) in output.iter().enumerate() {
        let expected = if k == N / 2 { N as f64 } else { 0.0 };
        assert_complex_close(val, expected, 0.0, 1e-3);
    }
}

#[test]
fn test_fft_q15_matches_float_kernel() {
    use num_complex::Complex32;

    let input_f64: [(f64, f64); N] = core::array::from_fn(|t| {
        let t = t as f64;
        ((0.3 * t).sin() * 0.9, (0.7 * t).cos() * 0.4)
    });

    let fixed_input: [Q15; N] = input_f64.map(|(re, im)| Q15::from_f64(re, im));
    let float_input: [Complex32; N] =
        fixed_input.map(|c| Complex32::new(c.re.to_f64() as f32, c.im.to_f64() as f32));

    let fixed_out = CplxFft::<15>::new().transform(&fixed_input);
    let float_out = crate::float::CplxFft::new().transform(&float_input);

    for (fx, fl) in fixed_out.iter().zip(float_out.iter()) {
        assert_complex_close(*fx, fl.re as f64, fl.im as f64, 5e-3);
    }
}
