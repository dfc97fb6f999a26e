mod fixed;
mod fixed_complex;

pub use fixed::Q15;
pub use fixed_complex::Sample;
