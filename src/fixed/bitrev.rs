// src/fixed/bitrev.rs

use super::config::validate_len;
use crate::common::FftError;

/// Number of `(i, j)` swap pairs needed for a size-`n` bit-reversal.
/// Indices that are their own reversal (bit palindromes) need no swap.
pub const fn required_pairs(n: usize) -> usize {
    let bits = n.trailing_zeros();
    let palindromes = 1usize << bits.div_ceil(2);
    (n - palindromes) / 2
}

#[inline]
fn reverse_bits(i: usize, bits: u32) -> usize {
    i.reverse_bits() >> (usize::BITS - bits)
}

/// Swap pairs `(i, j)` with `i < j` and `j` the bit-reversal of `i`.
#[derive(Clone, Copy, Debug)]
pub struct BitReversalTable<'a> {
    pairs: &'a [(usize, usize)],
    n: usize,
}

impl<'a> BitReversalTable<'a> {
    /// Fills `storage` with the swap pairs for `n` and borrows the used prefix.
    pub fn build(storage: &'a mut [(usize, usize)], n: usize) -> Result<Self, FftError> {
        validate_len(n)?;
        let count = required_pairs(n);
        if storage.len() < count {
            return Err(FftError::TableTooSmall);
        }

        let mut written = 0;
        let mut j = 0;
        for i in 1..n {
            let mut k = n >> 1;
            while j >= k {
                j -= k;
                k >>= 1;
            }
            j += k;
            if i < j {
                storage[written] = (i, j);
                written += 1;
            }
        }
        debug_assert_eq!(written, count);

        let storage: &'a [(usize, usize)] = storage;
        Ok(Self {
            pairs: &storage[..written],
            n,
        })
    }

    /// Wraps pairs produced elsewhere after checking they describe the
    /// bit-reversal of `n` points.
    ///
    /// Pairs must be in the order [`build`](Self::build) writes them: strictly
    /// increasing `i`. With the count fixed, that rules out repeated pairs, so an
    /// accepted table swaps every non-palindromic index exactly once.
    pub fn from_pairs(pairs: &'a [(usize, usize)], n: usize) -> Result<Self, FftError> {
        validate_len(n)?;
        if pairs.len() != required_pairs(n) {
            return Err(FftError::BitReversalMismatch);
        }
        let bits = n.trailing_zeros();
        // Index 0 is its own reversal, so it can never start a pair
        let mut last = 0;
        for &(i, j) in pairs {
            if i <= last || i >= j || j >= n || reverse_bits(i, bits) != j {
                return Err(FftError::BitReversalMismatch);
            }
            last = i;
        }
        Ok(Self { pairs, n })
    }

    /// Transform size this table was built for.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn pairs(&self) -> &'a [(usize, usize)] {
        self.pairs
    }

    /// Swaps whole complex slots in place, so the packing order does not matter.
    pub fn permute(&self, buffer: &mut [i16]) -> Result<(), FftError> {
        if buffer.len() != 2 * self.n {
            return Err(FftError::SizeMismatch);
        }
        for &(i, j) in self.pairs {
            buffer.swap(2 * i, 2 * j);
            buffer.swap(2 * i + 1, 2 * j + 1);
        }
        Ok(())
    }
}
