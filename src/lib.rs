#![no_std]

// Enables the standard library for tests and for the `std` feature,
// so you can run 'cargo test' on your PC normally.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
mod kernel;
pub mod fft;
pub mod fixed;
pub mod float;
pub mod tables;

pub use common::{Block, FftError, FftNum, FftProcess};
pub use fft::Fft32;
pub use tables::{LOG2_N, N};
