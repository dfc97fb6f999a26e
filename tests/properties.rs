use proptest::prelude::*;
use rs_radix4_q15::fixed::{
    BitReversalTable, ImagFirst, Packed, RealFirst, Sequential, Twiddle, precompute_twiddles,
    required_pairs, transform_with,
};
use rs_radix4_q15::{Direction, OutputOrdering, transform};

fn twiddles_for(n: usize) -> Vec<Twiddle> {
    let mut twiddles = vec![Twiddle::default(); n];
    precompute_twiddles(&mut twiddles, n);
    twiddles
}

fn block(amplitude: i16) -> impl Strategy<Value = (usize, Vec<i16>)> {
    proptest::sample::select(vec![16usize, 64, 256, 1024]).prop_flat_map(move |n| {
        (
            Just(n),
            proptest::collection::vec(-amplitude..=amplitude, 2 * n),
        )
    })
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Forward), Just(Direction::Inverse)]
}

fn forward(buffer: &mut [i16], n: usize, twiddles: &[Twiddle]) {
    transform(
        buffer,
        n,
        twiddles,
        1,
        Direction::Forward,
        OutputOrdering::BitReversed,
        None,
    )
    .unwrap();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_packed_lanes_are_bit_identical((n, input) in block(i16::MAX), dir in direction()) {
        let twiddles = twiddles_for(n);
        let mut seq = input.clone();
        let mut packed = input;

        transform_with::<RealFirst, Sequential>(
            &mut seq, n, &twiddles, 1, dir, OutputOrdering::BitReversed, None,
        ).unwrap();
        transform_with::<RealFirst, Packed>(
            &mut packed, n, &twiddles, 1, dir, OutputOrdering::BitReversed, None,
        ).unwrap();

        prop_assert_eq!(seq, packed);
    }

    #[test]
    fn prop_packing_order_is_transparent((n, input) in block(i16::MAX), dir in direction()) {
        let twiddles = twiddles_for(n);
        let mut pairs = vec![(0, 0); required_pairs(n)];
        let bitrev = BitReversalTable::build(&mut pairs, n).unwrap();

        let mut real_first = input.clone();
        let mut imag_first: Vec<i16> = input
            .chunks_exact(2)
            .flat_map(|pair| [pair[1], pair[0]])
            .collect();

        transform_with::<RealFirst, Sequential>(
            &mut real_first, n, &twiddles, 1, dir, OutputOrdering::Natural, Some(bitrev),
        ).unwrap();
        transform_with::<ImagFirst, Sequential>(
            &mut imag_first, n, &twiddles, 1, dir, OutputOrdering::Natural, Some(bitrev),
        ).unwrap();

        for (a, b) in real_first.chunks_exact(2).zip(imag_first.chunks_exact(2)) {
            prop_assert_eq!((a[0], a[1]), (b[1], b[0]));
        }
    }

    #[test]
    fn prop_bit_reversal_is_an_involution((n, input) in block(i16::MAX)) {
        let mut pairs = vec![(0, 0); required_pairs(n)];
        let bitrev = BitReversalTable::build(&mut pairs, n).unwrap();

        let mut buffer = input.clone();
        bitrev.permute(&mut buffer).unwrap();
        bitrev.permute(&mut buffer).unwrap();

        prop_assert_eq!(buffer, input);
    }

    #[test]
    fn prop_forward_is_linear(
        (n, x) in block(5000),
        y in proptest::collection::vec(-5000i16..=5000, 1024 * 2),
        a in -3i32..=3,
        b in -3i32..=3,
    ) {
        let twiddles = twiddles_for(n);
        let y = &y[..2 * n];

        // |a*x + b*y| stays below 30000, so the input itself never clamps
        let mut mixed: Vec<i16> = x
            .iter()
            .zip(y)
            .map(|(&p, &q)| (a * p as i32 + b * q as i32) as i16)
            .collect();
        let mut tx = x.clone();
        let mut ty = y.to_vec();

        forward(&mut mixed, n, &twiddles);
        forward(&mut tx, n, &twiddles);
        forward(&mut ty, n, &twiddles);

        // Each transform contributes its own truncation error, weighted by its scalar
        let weight = (1 + a.abs() + b.abs()) as f64;
        let log4 = (n.trailing_zeros() / 2) as f64;
        let mut sum_sq = 0.0;
        for i in 0..2 * n {
            let expected = a * tx[i] as i32 + b * ty[i] as i32;
            let diff = (mixed[i] as i32 - expected) as f64;
            prop_assert!(
                diff.abs() <= weight * (4.0 + log4),
                "index {}: diff {} with a={}, b={}", i, diff, a, b
            );
            sum_sq += diff * diff;
        }
        let rms = (sum_sq / (2 * n) as f64).sqrt();
        prop_assert!(rms <= 2.0 * weight, "rms diff {:.2} with a={}, b={}", rms, a, b);
    }

    #[test]
    fn prop_roundtrip_within_tolerance((n, input) in block(16000)) {
        let twiddles = twiddles_for(n);
        let mut buffer = input.clone();

        forward(&mut buffer, n, &twiddles);
        // The inverse of a bit-reversed spectrum needs it in natural order first
        let mut pairs = vec![(0, 0); required_pairs(n)];
        let bitrev = BitReversalTable::build(&mut pairs, n).unwrap();
        bitrev.permute(&mut buffer).unwrap();
        transform(
            &mut buffer, n, &twiddles, 1, Direction::Inverse, OutputOrdering::Natural, Some(bitrev),
        ).unwrap();

        let log4 = (n.trailing_zeros() / 2) as f64;
        let mut err_sq = 0.0;
        let mut expected_sq = 0.0;
        for (x, y) in input.iter().zip(&buffer) {
            let expected = *x as f64 / n as f64;
            let err = (*y as f64 - expected).abs();
            prop_assert!(err <= 4.0 + 3.0 * log4, "error {:.2}", err);
            err_sq += err * err;
            expected_sq += expected * expected;
        }
        let len = input.len() as f64;
        let rms_err = (err_sq / len).sqrt();
        let rms_expected = (expected_sq / len).sqrt();

        // The second bound keeps a flattened output from passing at N = 1024,
        // where x/N is only a few LSB
        prop_assert!(rms_err <= 2.0 + 0.5 * log4, "rms error {:.2}", rms_err);
        prop_assert!(
            rms_err <= 1.5 + 0.25 * rms_expected,
            "rms error {:.2} against signal rms {:.2}", rms_err, rms_expected
        );
    }

    #[test]
    fn prop_strided_table_matches_own_table((n, input) in block(i16::MAX), dir in direction()) {
        let own = twiddles_for(n);
        let shared = twiddles_for(4096);
        let stride = 4096 / n;

        let mut a = input.clone();
        let mut b = input;
        transform(&mut a, n, &own, 1, dir, OutputOrdering::BitReversed, None).unwrap();
        transform(&mut b, n, &shared, stride, dir, OutputOrdering::BitReversed, None).unwrap();

        prop_assert_eq!(a, b);
    }
}
