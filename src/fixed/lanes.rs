// src/fixed/lanes.rs

//! Paired 16-bit arithmetic.
//!
//! Every butterfly works on (re, im) pairs, so the primitives are expressed on two
//! lanes at once. [`Sequential`] is the portable lane-by-lane reference; [`Packed`]
//! carries both lanes in one `u64` word and does each add/subtract with a single
//! wide operation and each dual multiply-accumulate with a single wide multiply.
//! Both must agree bit for bit.

use super::types::Sample;

/// Paired add/subtract/multiply on two 16-bit lanes.
///
/// The `_j` variants combine `a` with `b` rotated by a quarter turn:
/// `a - j*b = (a.re + b.im, a.im - b.re)` and `a + j*b = (a.re - b.im, a.im + b.re)`.
/// `q` variants saturate to i16, `h` variants return the exact halved result
/// (arithmetic shift, rounding toward negative infinity).
pub trait PairedArith {
    fn qadd(a: Sample, b: Sample) -> Sample;
    fn qsub(a: Sample, b: Sample) -> Sample;
    fn hadd(a: Sample, b: Sample) -> Sample;
    fn hsub(a: Sample, b: Sample) -> Sample;

    fn qsub_j(a: Sample, b: Sample) -> Sample;
    fn qadd_j(a: Sample, b: Sample) -> Sample;
    fn hsub_j(a: Sample, b: Sample) -> Sample;
    fn hadd_j(a: Sample, b: Sample) -> Sample;

    /// `a.0 * b.0 + a.1 * b.1` with 32-bit wrapping accumulation.
    fn dual_mul_add(a: (i16, i16), b: (i16, i16)) -> i32;
    /// `a.0 * b.0 - a.1 * b.1` with 32-bit wrapping accumulation.
    fn dual_mul_sub(a: (i16, i16), b: (i16, i16)) -> i32;
}

/// Lane-by-lane fallback. Always available, and the reference for [`Packed`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

#[inline(always)]
fn half(sum: i32) -> i16 {
    (sum >> 1) as i16
}

impl PairedArith for Sequential {
    #[inline]
    fn qadd(a: Sample, b: Sample) -> Sample {
        Sample::new(a.re.saturating_add(b.re), a.im.saturating_add(b.im))
    }

    #[inline]
    fn qsub(a: Sample, b: Sample) -> Sample {
        Sample::new(a.re.saturating_sub(b.re), a.im.saturating_sub(b.im))
    }

    #[inline]
    fn hadd(a: Sample, b: Sample) -> Sample {
        Sample::new(
            half(a.re as i32 + b.re as i32),
            half(a.im as i32 + b.im as i32),
        )
    }

    #[inline]
    fn hsub(a: Sample, b: Sample) -> Sample {
        Sample::new(
            half(a.re as i32 - b.re as i32),
            half(a.im as i32 - b.im as i32),
        )
    }

    #[inline]
    fn qsub_j(a: Sample, b: Sample) -> Sample {
        Sample::new(a.re.saturating_add(b.im), a.im.saturating_sub(b.re))
    }

    #[inline]
    fn qadd_j(a: Sample, b: Sample) -> Sample {
        Sample::new(a.re.saturating_sub(b.im), a.im.saturating_add(b.re))
    }

    #[inline]
    fn hsub_j(a: Sample, b: Sample) -> Sample {
        Sample::new(
            half(a.re as i32 + b.im as i32),
            half(a.im as i32 - b.re as i32),
        )
    }

    #[inline]
    fn hadd_j(a: Sample, b: Sample) -> Sample {
        Sample::new(
            half(a.re as i32 - b.im as i32),
            half(a.im as i32 + b.re as i32),
        )
    }

    #[inline]
    fn dual_mul_add(a: (i16, i16), b: (i16, i16)) -> i32 {
        (a.0 as i32 * b.0 as i32).wrapping_add(a.1 as i32 * b.1 as i32)
    }

    #[inline]
    fn dual_mul_sub(a: (i16, i16), b: (i16, i16)) -> i32 {
        (a.0 as i32 * b.0 as i32).wrapping_sub(a.1 as i32 * b.1 as i32)
    }
}

/// Two lanes in one word: `re` in bits 0..32, `im` in bits 32..64.
///
/// Each lane is stored with a bias so it is never negative, and the 16 spare bits
/// per slot absorb carries, so one `u64` add never leaks between lanes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Packed;

const BIAS: u32 = 0x8000;
const LO: u64 = 0x0000_0000_FFFF_FFFF;
const HI: u64 = 0xFFFF_FFFF_0000_0000;
/// 2 * BIAS in both slots, the base for lane negation.
const LANE_K: u64 = 0x0001_0000_0001_0000;
/// Clears the bit that crosses a slot boundary after a one-bit shift.
const HALF_MASK: u64 = 0x7FFF_FFFF_7FFF_FFFF;

impl Packed {
    #[inline(always)]
    fn widen(s: Sample) -> u64 {
        let re = (s.re as i32 + BIAS as i32) as u32 as u64;
        let im = (s.im as i32 + BIAS as i32) as u32 as u64;
        re | (im << 32)
    }

    /// Negates the selected lanes while keeping the bias.
    /// `(2 * BIAS) - (y + BIAS) = -y + BIAS`; slots never borrow since `y + BIAS < 2 * BIAS`.
    #[inline(always)]
    fn negate(w: u64, lanes: u64) -> u64 {
        (w & !lanes) | ((LANE_K & lanes) - (w & lanes))
    }

    /// Swaps the two lanes.
    #[inline(always)]
    fn swap(w: u64) -> u64 {
        w.rotate_left(32)
    }

    /// Unpacks a sum of two biased words, clamping each lane to i16.
    #[inline(always)]
    fn narrow_sat(w: u64) -> Sample {
        let lane = |slot: u64| {
            let v = slot as u32 as i32 - 2 * BIAS as i32;
            v.clamp(i16::MIN as i32, i16::MAX as i32) as i16
        };
        Sample::new(lane(w & LO), lane(w >> 32))
    }

    /// Halves a sum of two biased words with one shift; the result carries a single bias.
    #[inline(always)]
    fn narrow_half(w: u64) -> Sample {
        let h = (w >> 1) & HALF_MASK;
        let lane = |slot: u64| (slot as u32 as i32 - BIAS as i32) as i16;
        Sample::new(lane(h & LO), lane(h >> 32))
    }

    /// Multiplies both lane pairs in one widening product and keeps the middle term.
    ///
    /// `(a0 * 2^32 + a1) * (b1 * 2^32 + b0)` has `a0*b0 + a1*b1` at bit 32. The low
    /// term `a1*b0` is below 2^30 in magnitude, so adding 2^31 before the shift
    /// removes its borrow, and the high term falls off when truncating to 32 bits.
    #[inline(always)]
    fn middle_product(a: (i16, i16), b: (i64, i64)) -> i32 {
        let wide_a = ((a.0 as i128) << 32) + a.1 as i128;
        let wide_b = (b.1 as i128 * (1i128 << 32)) + b.0 as i128;
        ((wide_a * wide_b + (1i128 << 31)) >> 32) as i32
    }
}

impl PairedArith for Packed {
    #[inline]
    fn qadd(a: Sample, b: Sample) -> Sample {
        Self::narrow_sat(Self::widen(a) + Self::widen(b))
    }

    #[inline]
    fn qsub(a: Sample, b: Sample) -> Sample {
        Self::narrow_sat(Self::widen(a) + Self::negate(Self::widen(b), LO | HI))
    }

    #[inline]
    fn hadd(a: Sample, b: Sample) -> Sample {
        Self::narrow_half(Self::widen(a) + Self::widen(b))
    }

    #[inline]
    fn hsub(a: Sample, b: Sample) -> Sample {
        Self::narrow_half(Self::widen(a) + Self::negate(Self::widen(b), LO | HI))
    }

    #[inline]
    fn qsub_j(a: Sample, b: Sample) -> Sample {
        let jb = Self::negate(Self::swap(Self::widen(b)), HI);
        Self::narrow_sat(Self::widen(a) + jb)
    }

    #[inline]
    fn qadd_j(a: Sample, b: Sample) -> Sample {
        let jb = Self::negate(Self::swap(Self::widen(b)), LO);
        Self::narrow_sat(Self::widen(a) + jb)
    }

    #[inline]
    fn hsub_j(a: Sample, b: Sample) -> Sample {
        let jb = Self::negate(Self::swap(Self::widen(b)), HI);
        Self::narrow_half(Self::widen(a) + jb)
    }

    #[inline]
    fn hadd_j(a: Sample, b: Sample) -> Sample {
        let jb = Self::negate(Self::swap(Self::widen(b)), LO);
        Self::narrow_half(Self::widen(a) + jb)
    }

    #[inline]
    fn dual_mul_add(a: (i16, i16), b: (i16, i16)) -> i32 {
        Self::middle_product(a, (b.0 as i64, b.1 as i64))
    }

    #[inline]
    fn dual_mul_sub(a: (i16, i16), b: (i16, i16)) -> i32 {
        Self::middle_product(a, (b.0 as i64, -(b.1 as i64)))
    }
}

#[cfg(test)]
#[path = "lanes_tests.rs"]
mod tests;
