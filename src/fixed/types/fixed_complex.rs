use super::fixed::Q15;
use num_complex::{Complex, Complex32};

/// One complex sample as it travels through the pipeline.
/// The Q format of both fields depends on how many stages have run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sample {
    pub re: i16,
    pub im: i16,
}

impl Sample {
    pub const ZERO: Self = Self { re: 0, im: 0 };

    #[inline]
    pub const fn new(re: i16, im: i16) -> Self {
        Self { re, im }
    }

    /// Quantizes a pair of floats in [-1, 1) to Q15.
    pub fn from_f32(re: f32, im: f32) -> Self {
        Self {
            re: Q15::from_f32(re).to_bits(),
            im: Q15::from_f32(im).to_bits(),
        }
    }

    /// Returns the complex conjugate (a - bi)
    #[inline]
    pub fn conj(self) -> Self {
        Sample {
            re: self.re,
            im: self.im.saturating_neg(),
        }
    }

    /// Arithmetic right shift of both parts.
    #[inline]
    pub fn shr(self, bits: u32) -> Self {
        Sample {
            re: self.re >> bits,
            im: self.im >> bits,
        }
    }

    /// Interprets both parts as fixed-point values with `frac_bits` fractional bits.
    pub fn to_complex32(self, frac_bits: i32) -> Complex32 {
        Complex32::new(
            Q15::from_bits(self.re).to_f32_with_frac(frac_bits),
            Q15::from_bits(self.im).to_f32_with_frac(frac_bits),
        )
    }
}

use core::ops::{Add, Sub};

// Saturating, like every add/subtract inside the transform.
impl Add for Sample {
    type Output = Sample;

    #[inline]
    fn add(self, rhs: Sample) -> Sample {
        Sample {
            re: self.re.saturating_add(rhs.re),
            im: self.im.saturating_add(rhs.im),
        }
    }
}

impl Sub for Sample {
    type Output = Sample;

    #[inline]
    fn sub(self, rhs: Sample) -> Sample {
        Sample {
            re: self.re.saturating_sub(rhs.re),
            im: self.im.saturating_sub(rhs.im),
        }
    }
}

impl From<Complex<i16>> for Sample {
    #[inline]
    fn from(value: Complex<i16>) -> Self {
        Sample::new(value.re, value.im)
    }
}

impl From<Sample> for Complex<i16> {
    #[inline]
    fn from(value: Sample) -> Self {
        Complex::new(value.re, value.im)
    }
}
