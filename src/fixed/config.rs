// src/fixed/config.rs

use crate::common::{Direction, FftError, OutputOrdering};

/// Smallest supported transform: two radix-4 levels.
pub const MIN_LEN: usize = 16;

/// Checks that `n` is a power of 4 and at least [`MIN_LEN`].
pub(crate) fn validate_len(n: usize) -> Result<(), FftError> {
    if !n.is_power_of_two() || n.trailing_zeros() % 2 != 0 {
        return Err(FftError::NotPowerOfFour);
    }
    if n < MIN_LEN {
        return Err(FftError::TooShort);
    }
    Ok(())
}

/// Everything the dispatcher needs to know about one transform size.
///
/// Invariant: `twiddle_stride * size` is the length of the canonical twiddle table,
/// which lets one table built for the largest size serve every smaller one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformConfig {
    size: usize,
    direction: Direction,
    ordering: OutputOrdering,
    twiddle_stride: usize,
}

impl TransformConfig {
    /// Derives the twiddle stride from the canonical table length.
    pub fn new(
        size: usize,
        direction: Direction,
        ordering: OutputOrdering,
        canonical_len: usize,
    ) -> Result<Self, FftError> {
        validate_len(size)?;
        validate_len(canonical_len).map_err(|_| FftError::InvalidStride)?;
        if canonical_len < size {
            return Err(FftError::InvalidStride);
        }
        Ok(Self {
            size,
            direction,
            ordering,
            twiddle_stride: canonical_len / size,
        })
    }

    /// Builds a configuration from an explicit stride. The stride must be a power of 4
    /// (1 included) so the canonical length stays a power of 4.
    pub fn with_stride(
        size: usize,
        direction: Direction,
        ordering: OutputOrdering,
        twiddle_stride: usize,
    ) -> Result<Self, FftError> {
        if !twiddle_stride.is_power_of_two() || twiddle_stride.trailing_zeros() % 2 != 0 {
            return Err(FftError::InvalidStride);
        }
        let canonical_len = size
            .checked_mul(twiddle_stride)
            .ok_or(FftError::InvalidStride)?;
        Self::new(size, direction, ordering, canonical_len)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn ordering(&self) -> OutputOrdering {
        self.ordering
    }

    #[inline]
    pub fn twiddle_stride(&self) -> usize {
        self.twiddle_stride
    }

    #[inline]
    pub fn canonical_len(&self) -> usize {
        self.size * self.twiddle_stride
    }

    pub fn with_direction(self, direction: Direction) -> Self {
        Self { direction, ..self }
    }

    pub fn with_ordering(self, ordering: OutputOrdering) -> Self {
        Self { ordering, ..self }
    }

    /// Number of radix-4 decimation levels.
    #[inline]
    pub fn log4_size(&self) -> u32 {
        self.size.trailing_zeros() / 2
    }

    /// Levels handled by the middle pass; zero for N = 16.
    #[inline]
    pub fn middle_levels(&self) -> u32 {
        self.log4_size() - 2
    }

    /// Bits the result is scaled down by: the output is the DFT divided by N.
    #[inline]
    pub fn scale_shift(&self) -> u32 {
        self.size.trailing_zeros()
    }

    /// Fractional bits of the output when it is read as the unscaled DFT of a Q15
    /// input: Q11 for 16 points, Q9 for 64, Q7 for 256, Q5 for 1024.
    #[inline]
    pub fn output_frac_bits(&self) -> i32 {
        15 - self.scale_shift() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_len() {
        assert_eq!(validate_len(16), Ok(()));
        assert_eq!(validate_len(4096), Ok(()));
        assert_eq!(validate_len(4), Err(FftError::TooShort));
        assert_eq!(validate_len(32), Err(FftError::NotPowerOfFour));
        assert_eq!(validate_len(0), Err(FftError::NotPowerOfFour));
        assert_eq!(validate_len(48), Err(FftError::NotPowerOfFour));
    }

    #[test]
    fn test_stride_from_canonical_len() {
        let cfg =
            TransformConfig::new(64, Direction::Forward, OutputOrdering::Natural, 1024).unwrap();
        assert_eq!(cfg.twiddle_stride(), 16);
        assert_eq!(cfg.canonical_len(), 1024);
        assert_eq!(
            TransformConfig::new(256, Direction::Forward, OutputOrdering::Natural, 64),
            Err(FftError::InvalidStride)
        );
        assert_eq!(
            TransformConfig::new(16, Direction::Forward, OutputOrdering::Natural, 128),
            Err(FftError::InvalidStride)
        );
    }

    #[test]
    fn test_with_stride() {
        let cfg =
            TransformConfig::with_stride(16, Direction::Inverse, OutputOrdering::BitReversed, 4)
                .unwrap();
        assert_eq!(cfg.canonical_len(), 64);
        assert_eq!(
            TransformConfig::with_stride(16, Direction::Inverse, OutputOrdering::BitReversed, 2),
            Err(FftError::InvalidStride)
        );
        assert_eq!(
            TransformConfig::with_stride(16, Direction::Inverse, OutputOrdering::BitReversed, 0),
            Err(FftError::InvalidStride)
        );
    }

    #[test]
    fn test_derived_quantities() {
        let cfg =
            TransformConfig::new(16, Direction::Forward, OutputOrdering::Natural, 16).unwrap();
        assert_eq!(cfg.log4_size(), 2);
        assert_eq!(cfg.middle_levels(), 0);
        assert_eq!(cfg.output_frac_bits(), 11);

        let cfg = cfg.with_direction(Direction::Inverse);
        assert_eq!(cfg.direction(), Direction::Inverse);

        let big =
            TransformConfig::new(1024, Direction::Forward, OutputOrdering::Natural, 1024).unwrap();
        assert_eq!(big.middle_levels(), 3);
        assert_eq!(big.scale_shift(), 10);
        assert_eq!(big.output_frac_bits(), 5);
    }
}
