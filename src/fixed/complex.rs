use core::marker::PhantomData;

use super::bitrev::BitReversalTable;
use super::config::TransformConfig;
use super::core::{
    Forward, Inverse, Rotation, radix_4_dif_core, stage_one, stage_three, stage_two,
};
use super::lanes::{PairedArith, Sequential};
use super::packing::{Packing, RealFirst};
use super::twiddle::{Twiddle, TwiddleTable};
use crate::common::{Direction, FftError, FftProcess, OutputOrdering};

/// One of the three passes of the transform, for callers that spread a transform
/// over several processing slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// First decimation level, including the input pre-shift.
    One,
    /// All middle levels. A no-op for 16 points.
    Two,
    /// Size-4 combine, followed by the bit-reversal permutation when the
    /// configuration asks for natural order.
    Three,
}

/// In-place radix-4 Q15 transform bound to a set of borrowed tables.
///
/// The packing order `P` and the lane arithmetic `A` are chosen when the type is
/// named and cost nothing at run time. All preconditions are checked in [`new`],
/// so a constructed engine only fails on a wrongly sized buffer.
///
/// Buffers hold `2 * size` interleaved `i16` values. Forward output is the DFT
/// divided by N; the inverse applies no further normalization, so a round trip
/// returns the input divided by N.
///
/// [`new`]: Radix4Fft::new
pub struct Radix4Fft<'a, P: Packing = RealFirst, A: PairedArith = Sequential> {
    config: TransformConfig,
    twiddles: &'a [Twiddle],
    bitrev: Option<BitReversalTable<'a>>,
    _marker: PhantomData<(P, A)>,
}

impl<'a, P: Packing, A: PairedArith> Radix4Fft<'a, P, A> {
    /// Validates the tables against `config`.
    ///
    /// `twiddles` must be built for exactly `config.canonical_len()` points, so that
    /// reading it with the configured stride yields the angles of a size-N transform.
    /// A bit-reversal table is required for natural ordering and, when given, must be
    /// built for `config.size()`.
    pub fn new(
        config: TransformConfig,
        twiddles: TwiddleTable<'a>,
        bitrev: Option<BitReversalTable<'a>>,
    ) -> Result<Self, FftError> {
        if twiddles.canonical_len() < config.canonical_len() {
            return Err(FftError::TableTooSmall);
        }
        if twiddles.stride_for(config.size())? != config.twiddle_stride() {
            return Err(FftError::InvalidStride);
        }
        match (config.ordering(), &bitrev) {
            (OutputOrdering::Natural, None) => return Err(FftError::MissingBitReversal),
            (_, Some(table)) if table.size() != config.size() => {
                return Err(FftError::BitReversalMismatch);
            }
            _ => {}
        }

        fft_debug!(
            "radix-4 engine: n={} stride={} direction={:?} ordering={:?}",
            config.size(),
            config.twiddle_stride(),
            config.direction(),
            config.ordering()
        );

        Ok(Self {
            config,
            twiddles: twiddles.entries(),
            bitrev,
            _marker: PhantomData,
        })
    }

    #[inline]
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Runs the whole transform in place.
    pub fn process(&self, buffer: &mut [i16]) -> Result<(), FftError> {
        self.check_len(buffer)?;

        match self.config.direction() {
            Direction::Forward => self.run::<Forward>(buffer),
            Direction::Inverse => self.run::<Inverse>(buffer),
        }
        self.reorder(buffer)
    }

    /// Runs a single pass. Calling it with `One`, `Two` and `Three` in that order
    /// leaves the buffer exactly as [`process`](Self::process) would.
    pub fn process_stage(&self, stage: Stage, buffer: &mut [i16]) -> Result<(), FftError> {
        self.check_len(buffer)?;

        match self.config.direction() {
            Direction::Forward => self.run_stage::<Forward>(stage, buffer),
            Direction::Inverse => self.run_stage::<Inverse>(stage, buffer),
        }
        if stage == Stage::Three {
            self.reorder(buffer)?;
        }
        Ok(())
    }

    fn check_len(&self, buffer: &[i16]) -> Result<(), FftError> {
        if buffer.len() != 2 * self.config.size() {
            return Err(FftError::SizeMismatch);
        }
        Ok(())
    }

    fn run<D: Rotation>(&self, buffer: &mut [i16]) {
        fft_trace!("radix-4 n={}: all stages", self.config.size());
        radix_4_dif_core::<D, P, A>(
            buffer,
            self.config.size(),
            self.twiddles,
            self.config.twiddle_stride(),
        );
    }

    fn run_stage<D: Rotation>(&self, stage: Stage, buffer: &mut [i16]) {
        let n = self.config.size();
        let stride = self.config.twiddle_stride();
        fft_trace!("radix-4 n={}: stage {:?}", n, stage);
        match stage {
            Stage::One => stage_one::<D, P, A>(buffer, n, self.twiddles, stride),
            Stage::Two => stage_two::<D, P, A>(buffer, n, self.twiddles, stride),
            Stage::Three => stage_three::<D, P, A>(buffer, n),
        }
    }

    fn reorder(&self, buffer: &mut [i16]) -> Result<(), FftError> {
        if let (OutputOrdering::Natural, Some(table)) = (self.config.ordering(), &self.bitrev) {
            fft_trace!("radix-4 n={}: bit-reversal permutation", self.config.size());
            table.permute(buffer)?;
        }
        Ok(())
    }
}

impl<P: Packing, A: PairedArith> FftProcess<i16> for Radix4Fft<'_, P, A> {
    fn process(&self, buffer: &mut [i16]) -> Result<(), FftError> {
        Radix4Fft::process(self, buffer)
    }
}

/// One-shot transform with an explicit packing order and lane arithmetic.
///
/// `twiddles` must be the whole canonical table of `n * twiddle_stride` entries.
pub fn transform_with<P: Packing, A: PairedArith>(
    buffer: &mut [i16],
    n: usize,
    twiddles: &[Twiddle],
    twiddle_stride: usize,
    direction: Direction,
    ordering: OutputOrdering,
    bitrev: Option<BitReversalTable<'_>>,
) -> Result<(), FftError> {
    let config = TransformConfig::with_stride(n, direction, ordering, twiddle_stride)?;
    if twiddles.len() < config.canonical_len() {
        return Err(FftError::TableTooSmall);
    }
    let table = TwiddleTable::from_entries(twiddles).map_err(|_| FftError::InvalidStride)?;
    Radix4Fft::<P, A>::new(config, table, bitrev)?.process(buffer)
}

/// One-shot transform of a real-first buffer of `n` complex samples.
///
/// `twiddles` is a canonical table of `n * twiddle_stride` entries (see
/// [`precompute_twiddles`](super::twiddle::precompute_twiddles)). `bitrev` is only
/// consulted for [`OutputOrdering::Natural`].
pub fn transform(
    buffer: &mut [i16],
    n: usize,
    twiddles: &[Twiddle],
    twiddle_stride: usize,
    direction: Direction,
    ordering: OutputOrdering,
    bitrev: Option<BitReversalTable<'_>>,
) -> Result<(), FftError> {
    transform_with::<RealFirst, Sequential>(
        buffer,
        n,
        twiddles,
        twiddle_stride,
        direction,
        ordering,
        bitrev,
    )
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
