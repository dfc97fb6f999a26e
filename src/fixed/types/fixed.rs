// src/fixed/types/fixed.rs
/// Signed Q15 scalar: 1 sign bit, 15 fractional bits, range [-1, 1).
/// All arithmetic clamps to the i16 range instead of wrapping.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct Q15(i16);

/// Fractional bits of a Q15 value.
pub const Q15_FRAC: u32 = 15;

impl Q15 {
    pub const ZERO: Self = Self(0);
    /// Largest representable value, the closest Q15 gets to +1.0.
    pub const ONE: Self = Self(i16::MAX);
    pub const MINUS_ONE: Self = Self(i16::MIN);

    /// Creates a Q15 from the raw integer value (without shift).
    #[inline]
    pub const fn from_bits(bits: i16) -> Self {
        Self(bits)
    }

    /// Returns the stored raw value.
    #[inline]
    pub const fn to_bits(self) -> i16 {
        self.0
    }

    /// Converts an f64 to Q15 with round-to-nearest, saturating at the range ends.
    /// Used for twiddle factors, where +1.0 must land on 0x7FFF.
    pub fn from_f64(value: f64) -> Self {
        let scaled = libm::round(value * (1u32 << Q15_FRAC) as f64);
        Self(scaled.clamp(i16::MIN as f64, i16::MAX as f64) as i16)
    }

    /// Converts an f32 to Q15 with round-to-nearest, saturating at the range ends.
    pub fn from_f32(value: f32) -> Self {
        let scaled = libm::roundf(value * (1u32 << Q15_FRAC) as f32);
        Self(scaled.clamp(i16::MIN as f32, i16::MAX as f32) as i16)
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / (1u32 << Q15_FRAC) as f32
    }

    /// Reads the raw value as a fixed-point number with `frac_bits` fractional bits.
    /// Transform outputs are Q(15 - log2 N), so this is how they are turned back
    /// into real units.
    #[inline]
    pub fn to_f32_with_frac(self, frac_bits: i32) -> f32 {
        libm::ldexpf(self.0 as f32, -frac_bits)
    }

    #[inline]
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    #[inline]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// (a + b) >> 1, computed without intermediate overflow.
    #[inline]
    pub fn halving_add(self, rhs: Self) -> Self {
        Self(((self.0 as i32 + rhs.0 as i32) >> 1) as i16)
    }

    /// (a - b) >> 1, computed without intermediate overflow.
    #[inline]
    pub fn halving_sub(self, rhs: Self) -> Self {
        Self(((self.0 as i32 - rhs.0 as i32) >> 1) as i16)
    }

    /// Arithmetic right shift.
    #[inline]
    pub fn shr(self, bits: u32) -> Self {
        Self(self.0 >> bits)
    }
}

use core::ops::{Add, Mul, Neg, Sub};

impl Add for Q15 {
    type Output = Q15;

    #[inline]
    fn add(self, rhs: Q15) -> Q15 {
        self.saturating_add(rhs)
    }
}

impl Sub for Q15 {
    type Output = Q15;

    #[inline]
    fn sub(self, rhs: Q15) -> Q15 {
        self.saturating_sub(rhs)
    }
}

impl Neg for Q15 {
    type Output = Q15;

    #[inline]
    fn neg(self) -> Q15 {
        Q15(self.0.saturating_neg())
    }
}

impl Mul for Q15 {
    type Output = Q15;

    #[inline]
    fn mul(self, rhs: Q15) -> Q15 {
        let product = self.0 as i32 * rhs.0 as i32;
        // Add 2^14 for rounding before dropping the extra 15 fractional bits
        let rounded = (product + (1 << (Q15_FRAC - 1))) >> Q15_FRAC;
        // Only -1.0 * -1.0 can leave the range
        Q15(rounded.min(i16::MAX as i32) as i16)
    }
}

use core::fmt;

impl fmt::Display for Q15 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f32())
    }
}

impl fmt::Debug for Q15 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // In Debug, show both the decimal value and the raw value in parentheses
        write!(f, "{:.6} (raw: {})", self.to_f32(), self.0)
    }
}
