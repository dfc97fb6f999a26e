// src/fixed/packing.rs

//! Memory order of one complex sample inside the `i16` buffer.
//!
//! The order is a property of the whole program (it follows the producer of the
//! sample blocks), so it is chosen once as a type parameter of the engine and only
//! the load/store primitives below ever look at it.

use super::types::Sample;

pub trait Packing {
    /// Loads complex sample `index` (values `2 * index` and `2 * index + 1`).
    fn load(buffer: &[i16], index: usize) -> Sample;
    /// Stores complex sample `index`.
    fn store(buffer: &mut [i16], index: usize, value: Sample);
}

/// `[re, im, re, im, ...]`
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFirst;

/// `[im, re, im, re, ...]`
#[derive(Debug, Clone, Copy, Default)]
pub struct ImagFirst;

impl Packing for RealFirst {
    #[inline(always)]
    fn load(buffer: &[i16], index: usize) -> Sample {
        Sample::new(buffer[2 * index], buffer[2 * index + 1])
    }

    #[inline(always)]
    fn store(buffer: &mut [i16], index: usize, value: Sample) {
        buffer[2 * index] = value.re;
        buffer[2 * index + 1] = value.im;
    }
}

impl Packing for ImagFirst {
    #[inline(always)]
    fn load(buffer: &[i16], index: usize) -> Sample {
        Sample::new(buffer[2 * index + 1], buffer[2 * index])
    }

    #[inline(always)]
    fn store(buffer: &mut [i16], index: usize, value: Sample) {
        buffer[2 * index] = value.im;
        buffer[2 * index + 1] = value.re;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_first_layout() {
        let mut buffer = [0i16; 4];
        RealFirst::store(&mut buffer, 1, Sample::new(3, -4));
        assert_eq!(buffer, [0, 0, 3, -4]);
        assert_eq!(RealFirst::load(&buffer, 1), Sample::new(3, -4));
    }

    #[test]
    fn test_imag_first_layout() {
        let mut buffer = [0i16; 4];
        ImagFirst::store(&mut buffer, 1, Sample::new(3, -4));
        assert_eq!(buffer, [0, 0, -4, 3]);
        assert_eq!(ImagFirst::load(&buffer, 1), Sample::new(3, -4));
    }
}
