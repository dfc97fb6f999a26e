pub mod bitrev;
pub mod complex;
pub mod config;
mod core;
pub mod lanes;
pub mod packing;
pub mod twiddle;
pub mod types;

pub use bitrev::{BitReversalTable, required_pairs};
pub use complex::{Radix4Fft, Stage, transform, transform_with};
pub use config::{MIN_LEN, TransformConfig};
pub use lanes::{Packed, PairedArith, Sequential};
pub use packing::{ImagFirst, Packing, RealFirst};
pub use twiddle::{Twiddle, TwiddleTable, precompute_twiddles};
pub use types::{Q15, Sample};
