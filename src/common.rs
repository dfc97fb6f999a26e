// src/common.rs

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    NotPowerOfFour,
    TooShort,
    SizeMismatch,
    TableTooSmall,
    InvalidStride,
    MissingBitReversal,
    BitReversalMismatch,
}

use core::fmt;

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::NotPowerOfFour => write!(f, "Size must be a power of 4"),
            FftError::TooShort => write!(f, "Size must be at least 16"),
            FftError::SizeMismatch => write!(f, "Data buffer size does not match FFT size"),
            FftError::TableTooSmall => write!(f, "Twiddle or bit-reversal table is too small"),
            FftError::InvalidStride => write!(f, "Invalid twiddle stride configuration"),
            FftError::MissingBitReversal => {
                write!(f, "Natural output ordering requires a bit-reversal table")
            }
            FftError::BitReversalMismatch => {
                write!(f, "Bit-reversal table was built for a different size")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Transform direction.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Forward,
    Inverse,
}

/// Order of the bins left in the buffer after a transform.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OutputOrdering {
    /// Raw decimation order, no permutation pass.
    BitReversed,
    /// Sequential bin order; needs a bit-reversal table.
    Natural,
}

pub trait FftProcess<T> {
    fn process(&self, buffer: &mut [T]) -> Result<(), FftError>;
}
