pub mod complex;
pub mod types;

pub use complex::{CplxFft, Q15};
pub use types::{ComplexFixed, Fixed};
