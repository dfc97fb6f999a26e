#![no_std]

// Enables the standard library for tests and for the `std::error::Error` impl,
// so you can run 'cargo test' on your PC normally.
#[cfg(any(test, feature = "std"))]
extern crate std;

#[macro_use]
mod macros;

pub mod common;
pub mod fixed;

pub use common::{Direction, FftError, FftProcess, OutputOrdering};
pub use fixed::{Radix4Fft, Stage, TransformConfig, transform};
