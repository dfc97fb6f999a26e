// src/fixed/twiddle.rs

use super::config::validate_len;
use super::types::Q15;
use crate::common::FftError;
use core::f64::consts::PI;

/// One Q15 rotation factor, stored as `(cos θ, sin θ)` with θ = 2πk/L.
/// The butterflies multiply by `cos θ - j sin θ`, i.e. e^{-jθ}.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Twiddle {
    pub cos: i16,
    pub sin: i16,
}

impl Twiddle {
    #[inline]
    pub const fn new(cos: i16, sin: i16) -> Self {
        Self { cos, sin }
    }

    #[inline(always)]
    pub(crate) fn lanes(self) -> (i16, i16) {
        (self.cos, self.sin)
    }
}

/// Computes the rotation factors for a canonical table of length `canonical_len`.
/// Every slot of `twiddles` is written, so pass exactly the slice to fill.
pub fn precompute_twiddles(twiddles: &mut [Twiddle], canonical_len: usize) {
    for (k, slot) in twiddles.iter_mut().enumerate() {
        let angle = 2.0 * PI * (k as f64) / (canonical_len as f64);
        *slot = Twiddle::new(
            Q15::from_f64(libm::cos(angle)).to_bits(),
            Q15::from_f64(libm::sin(angle)).to_bits(),
        );
    }
}

/// A canonical twiddle table. A table of length L serves any transform size N
/// that divides L, read with stride L / N.
#[derive(Clone, Copy, Debug)]
pub struct TwiddleTable<'a> {
    entries: &'a [Twiddle],
}

impl<'a> TwiddleTable<'a> {
    /// Fills the first `canonical_len` slots of `storage` and borrows them.
    pub fn build(storage: &'a mut [Twiddle], canonical_len: usize) -> Result<Self, FftError> {
        validate_len(canonical_len)?;
        if storage.len() < canonical_len {
            return Err(FftError::TableTooSmall);
        }
        precompute_twiddles(&mut storage[..canonical_len], canonical_len);
        let storage: &'a [Twiddle] = storage;
        Ok(Self {
            entries: &storage[..canonical_len],
        })
    }

    /// Wraps a table produced elsewhere (e.g. a `static` generated offline).
    pub fn from_entries(entries: &'a [Twiddle]) -> Result<Self, FftError> {
        validate_len(entries.len())?;
        Ok(Self { entries })
    }

    #[inline]
    pub fn canonical_len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn entries(&self) -> &'a [Twiddle] {
        self.entries
    }

    /// Stride that maps a size-`n` transform onto this table.
    pub fn stride_for(&self, n: usize) -> Result<usize, FftError> {
        validate_len(n)?;
        if n > self.entries.len() {
            return Err(FftError::InvalidStride);
        }
        Ok(self.entries.len() / n)
    }
}
