pub mod complex;

pub use crate::common::{FftError, FftProcess};
pub use complex::CplxFft;
pub use num_complex::Complex32;
