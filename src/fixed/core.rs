// src/fixed/core.rs

//! The three radix-4 decimation-in-frequency passes.
//!
//! Scaling schedule, which keeps every intermediate inside 16 bits:
//! - pass one shifts each input right by 2 and halves the combined result,
//! - every middle level divides by 4,
//! - the final size-4 pass halves.
//!
//! Overall the buffer ends up holding DFT(x) / N. Outputs of each butterfly are
//! stored so that the final order is plain bit reversal of the bin index.

use super::lanes::PairedArith;
use super::packing::Packing;
use super::twiddle::Twiddle;
use super::types::Sample;

/// Direction-specific half of the butterfly.
///
/// `branch_one` feeds DFT bin 4r+1 and `branch_three` bin 4r+3; they take
/// `s = a - c` and `t = b - d`.
pub(crate) trait Rotation {
    /// Multiplies by the twiddle factor and drops 16 bits (Q15 product plus one
    /// halving).
    fn rotate<A: PairedArith>(x: Sample, w: Twiddle) -> Sample;

    fn branch_one<A: PairedArith>(s: Sample, t: Sample) -> Sample;
    fn branch_three<A: PairedArith>(s: Sample, t: Sample) -> Sample;
    fn branch_one_half<A: PairedArith>(s: Sample, t: Sample) -> Sample;
    fn branch_three_half<A: PairedArith>(s: Sample, t: Sample) -> Sample;
}

pub(crate) struct Forward;
pub(crate) struct Inverse;

impl Rotation for Forward {
    /// `(u*c + v*s, v*c - u*s)`: multiplication by `c - js`.
    #[inline(always)]
    fn rotate<A: PairedArith>(x: Sample, w: Twiddle) -> Sample {
        let re = A::dual_mul_add((x.re, x.im), w.lanes());
        let im = A::dual_mul_sub((x.im, x.re), w.lanes());
        Sample::new((re >> 16) as i16, (im >> 16) as i16)
    }

    #[inline(always)]
    fn branch_one<A: PairedArith>(s: Sample, t: Sample) -> Sample {
        A::qsub_j(s, t)
    }

    #[inline(always)]
    fn branch_three<A: PairedArith>(s: Sample, t: Sample) -> Sample {
        A::qadd_j(s, t)
    }

    #[inline(always)]
    fn branch_one_half<A: PairedArith>(s: Sample, t: Sample) -> Sample {
        A::hsub_j(s, t)
    }

    #[inline(always)]
    fn branch_three_half<A: PairedArith>(s: Sample, t: Sample) -> Sample {
        A::hadd_j(s, t)
    }
}

impl Rotation for Inverse {
    /// `(u*c - v*s, v*c + u*s)`: multiplication by `c + js`.
    #[inline(always)]
    fn rotate<A: PairedArith>(x: Sample, w: Twiddle) -> Sample {
        let re = A::dual_mul_sub((x.re, x.im), w.lanes());
        let im = A::dual_mul_add((x.im, x.re), w.lanes());
        Sample::new((re >> 16) as i16, (im >> 16) as i16)
    }

    #[inline(always)]
    fn branch_one<A: PairedArith>(s: Sample, t: Sample) -> Sample {
        A::qadd_j(s, t)
    }

    #[inline(always)]
    fn branch_three<A: PairedArith>(s: Sample, t: Sample) -> Sample {
        A::qsub_j(s, t)
    }

    #[inline(always)]
    fn branch_one_half<A: PairedArith>(s: Sample, t: Sample) -> Sample {
        A::hadd_j(s, t)
    }

    #[inline(always)]
    fn branch_three_half<A: PairedArith>(s: Sample, t: Sample) -> Sample {
        A::hsub_j(s, t)
    }
}

/// First decimation level: N/4 butterflies spaced N/4 apart.
///
/// Inputs are read as Q15 and pre-shifted by 2 bits to leave headroom for the
/// additions of this and later levels.
pub(crate) fn stage_one<D: Rotation, P: Packing, A: PairedArith>(
    buffer: &mut [i16],
    n: usize,
    twiddles: &[Twiddle],
    twiddle_stride: usize,
) {
    let quarter = n >> 2;

    for i0 in 0..quarter {
        let i1 = i0 + quarter;
        let i2 = i1 + quarter;
        let i3 = i2 + quarter;

        let xa = P::load(buffer, i0).shr(2);
        let xb = P::load(buffer, i1).shr(2);
        let xc = P::load(buffer, i2).shr(2);
        let xd = P::load(buffer, i3).shr(2);

        let sum_ac = A::qadd(xa, xc);
        let diff_ac = A::qsub(xa, xc);
        let sum_bd = A::qadd(xb, xd);
        let diff_bd = A::qsub(xb, xd);

        let ic = i0 * twiddle_stride;

        P::store(buffer, i0, A::hadd(sum_ac, sum_bd));
        P::store(
            buffer,
            i1,
            D::rotate::<A>(A::qsub(sum_ac, sum_bd), twiddles[2 * ic]),
        );
        P::store(
            buffer,
            i2,
            D::rotate::<A>(D::branch_one::<A>(diff_ac, diff_bd), twiddles[ic]),
        );
        P::store(
            buffer,
            i3,
            D::rotate::<A>(D::branch_three::<A>(diff_ac, diff_bd), twiddles[3 * ic]),
        );
    }
}

/// Every level between the first and the last. Each level works on blocks a quarter
/// the size of the previous one and reads twiddles with four times the stride.
/// Does nothing for N = 16.
pub(crate) fn stage_two<D: Rotation, P: Packing, A: PairedArith>(
    buffer: &mut [i16],
    n: usize,
    twiddles: &[Twiddle],
    twiddle_stride: usize,
) {
    let mut span = n >> 2;
    let mut step = twiddle_stride << 2;
    let mut level = n >> 2;

    while level > 4 {
        let block = span;
        span >>= 2;

        for j in 0..span {
            let ic = j * step;
            let w1 = twiddles[ic];
            let w2 = twiddles[2 * ic];
            let w3 = twiddles[3 * ic];

            for i0 in (j..n).step_by(block) {
                let i1 = i0 + span;
                let i2 = i1 + span;
                let i3 = i2 + span;

                let xa = P::load(buffer, i0);
                let xb = P::load(buffer, i1);
                let xc = P::load(buffer, i2);
                let xd = P::load(buffer, i3);

                let sum_ac = A::qadd(xa, xc);
                let diff_ac = A::qsub(xa, xc);
                let sum_bd = A::qadd(xb, xd);
                let diff_bd = A::qsub(xb, xd);

                P::store(buffer, i0, A::hadd(sum_ac, sum_bd).shr(1));
                P::store(buffer, i1, D::rotate::<A>(A::hsub(sum_ac, sum_bd), w2));
                P::store(
                    buffer,
                    i2,
                    D::rotate::<A>(D::branch_one_half::<A>(diff_ac, diff_bd), w1),
                );
                P::store(
                    buffer,
                    i3,
                    D::rotate::<A>(D::branch_three_half::<A>(diff_ac, diff_bd), w3),
                );
            }
        }

        step <<= 2;
        level >>= 2;
    }
}

/// Size-4 base case on adjacent groups. All twiddles are 1 here, so only the
/// halving add/subtract network remains.
pub(crate) fn stage_three<D: Rotation, P: Packing, A: PairedArith>(buffer: &mut [i16], n: usize) {
    for base in (0..n).step_by(4) {
        let xa = P::load(buffer, base);
        let xb = P::load(buffer, base + 1);
        let xc = P::load(buffer, base + 2);
        let xd = P::load(buffer, base + 3);

        let sum_ac = A::qadd(xa, xc);
        let sum_bd = A::qadd(xb, xd);
        let diff_ac = A::qsub(xa, xc);
        let diff_bd = A::qsub(xb, xd);

        P::store(buffer, base, A::hadd(sum_ac, sum_bd));
        P::store(buffer, base + 1, A::hsub(sum_ac, sum_bd));
        P::store(buffer, base + 2, D::branch_one_half::<A>(diff_ac, diff_bd));
        P::store(buffer, base + 3, D::branch_three_half::<A>(diff_ac, diff_bd));
    }
}

/// Runs all three passes. The result is left in bit-reversed order.
pub(crate) fn radix_4_dif_core<D: Rotation, P: Packing, A: PairedArith>(
    buffer: &mut [i16],
    n: usize,
    twiddles: &[Twiddle],
    twiddle_stride: usize,
) {
    stage_one::<D, P, A>(buffer, n, twiddles, twiddle_stride);
    stage_two::<D, P, A>(buffer, n, twiddles, twiddle_stride);
    stage_three::<D, P, A>(buffer, n);
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
