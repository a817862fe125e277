//! Statistical and contract tests for the distribution samplers.
//!
//! These tests drive the public API the way a host integration would:
//! seed a state, then draw through the validated samplers. Statistical
//! assertions run over large draw counts with deterministic seeds and
//! deliberately wide tolerance bands.

use approx::assert_relative_eq;
use rand::distributions::Distribution;
use rand::SeedableRng;
use rand_distr::Zipf;
use sampler_core::dist::{self, Exponential, Gaussian, Zipfian};
use sampler_core::rng::{seed_state, Rand48};
use sampler_core::SamplerError;

/// The reference scenario: `exponential(1, 10, 2.5)` called 10,000
/// times yields only values in `[1, 10]`, with 1 far more frequent
/// than 10.
#[test]
fn exponential_reference_scenario() {
    let mut rng = Rand48::seed_from_u64(42);
    let mut counts = [0u32; 11];
    for _ in 0..10_000 {
        let v = dist::exponential(&mut rng, 1, 10, 2.5).unwrap();
        assert!((1..=10).contains(&v), "sample {} out of range", v);
        counts[v as usize] += 1;
    }
    assert!(
        counts[1] > counts[10],
        "expected 1 to dominate 10: {:?}",
        counts
    );
}

/// Empirical frequency of the cut-off `max` value matches the mass the
/// truncated inverse CDF assigns to it.
#[test]
fn exponential_tail_mass_at_max() {
    let (min, max, parameter) = (1i64, 10i64, 2.5f64);
    let width = (max - min + 1) as f64;
    let cut = (-parameter).exp();
    // P(max) = P(unit >= (width - 1) / width) under the truncated CDF.
    let expected = ((-parameter * (width - 1.0) / width).exp() - cut) / (1.0 - cut);

    let dist = Exponential::new(min, max, parameter).unwrap();
    let mut rng = Rand48::seed_from_u64(42);
    let draws = 100_000;
    let hits = (0..draws).filter(|_| dist.sample(&mut rng) == max).count();
    let freq = hits as f64 / draws as f64;

    assert_relative_eq!(freq, expected, max_relative = 0.15);
}

/// Gaussian empirical mean sits on the range midpoint, including for
/// ranges that straddle zero.
#[test]
fn gaussian_mean_tracks_midpoint() {
    let dist = Gaussian::new(-100, 50, 3.0).unwrap();
    let mut rng = Rand48::seed_from_u64(42);
    let n = 100_000;
    let sum: i64 = (0..n).map(|_| dist.sample(&mut rng)).sum();
    let mean = sum as f64 / n as f64;
    assert!(
        (mean - (-25.0)).abs() < 1.5,
        "empirical mean {} too far from midpoint -25",
        mean
    );
}

/// Zipfian rank-1 frequency agrees with `rand_distr::Zipf` for the
/// same `(n, s)`.
#[test]
fn zipfian_matches_reference_distribution() {
    let draws = 50_000;
    let (n, s) = (10u64, 1.5f64);

    let ours = Zipfian::new(1, n as i64, s).unwrap();
    let mut rng = Rand48::seed_from_u64(42);
    let our_rank1 = (0..draws).filter(|_| ours.sample(&mut rng) == 1).count();

    let reference = Zipf::new(n, s).unwrap();
    let mut std_rng = rand::rngs::StdRng::seed_from_u64(42);
    let ref_rank1 = (0..draws)
        .filter(|_| reference.sample(&mut std_rng) as i64 == 1)
        .count();

    let our_freq = our_rank1 as f64 / draws as f64;
    let ref_freq = ref_rank1 as f64 / draws as f64;
    assert!(
        (our_freq - ref_freq).abs() < 0.02,
        "rank-1 frequency {} diverges from reference {}",
        our_freq,
        ref_freq
    );
}

/// `min == max` returns the single value for all three distributions,
/// regardless of parameter.
#[test]
fn single_value_range_for_all_distributions() {
    let mut rng = Rand48::seed_from_u64(7);
    for _ in 0..100 {
        assert_eq!(dist::exponential(&mut rng, 3, 3, 0.5).unwrap(), 3);
        assert_eq!(dist::gaussian(&mut rng, -9, -9, 2.0).unwrap(), -9);
        assert_eq!(dist::zipfian(&mut rng, 0, 0, 1.001).unwrap(), 0);
    }
}

/// `min > max` fails with `InvalidRange` for all three distributions,
/// before any uniform draw is consumed.
#[test]
fn inverted_range_fails_without_draws() {
    let mut rng = Rand48::seed_from_u64(42);
    let mut untouched = Rand48::seed_from_u64(42);

    for result in [
        dist::exponential(&mut rng, 10, 1, 2.5),
        dist::gaussian(&mut rng, 10, 1, 2.0),
        dist::zipfian(&mut rng, 10, 1, 1.5),
    ] {
        assert!(matches!(result, Err(SamplerError::InvalidRange { .. })));
    }
    assert_eq!(rng.next_f64(), untouched.next_f64());
}

/// Shape parameters exactly on the domain edges succeed; values just
/// outside fail with `InvalidParameter`.
#[test]
fn parameter_domain_edges() {
    assert!(Gaussian::new(1, 10, 2.0).is_ok());
    assert!(Zipfian::new(1, 10, 1.001).is_ok());
    assert!(Zipfian::new(1, 10, 1000.0).is_ok());

    for result in [
        Gaussian::new(1, 10, 1.999_999).map(|_| ()),
        Zipfian::new(1, 10, 1.000_999).map(|_| ()),
        Zipfian::new(1, 10, 1000.000_1).map(|_| ()),
        Exponential::new(1, 10, 0.0).map(|_| ()),
    ] {
        assert!(matches!(result, Err(SamplerError::InvalidParameter { .. })));
    }
}

/// Two freshly entropy-seeded states drive independent sample streams.
#[test]
fn reseeded_states_are_independent() {
    let dist = Exponential::new(1, 1_000, 1.0).unwrap();
    let mut rng1 = seed_state().unwrap();
    let mut rng2 = seed_state().unwrap();

    let stream1: Vec<i64> = (0..32).map(|_| dist.sample(&mut rng1)).collect();
    let stream2: Vec<i64> = (0..32).map(|_| dist.sample(&mut rng2)).collect();
    assert_ne!(stream1, stream2);
}

// ============================================================================
// Property-based range containment
// ============================================================================

use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every exponential sample lies in the requested closed range.
    #[test]
    fn prop_exponential_in_range(
        seed in any::<u64>(),
        min in -1_000i64..1_000,
        width in 0i64..2_000,
        parameter in 0.01f64..50.0,
    ) {
        let max = min + width;
        let mut rng = Rand48::seed_from_u64(seed);
        let dist = Exponential::new(min, max, parameter).unwrap();
        for _ in 0..64 {
            let v = dist.sample(&mut rng);
            prop_assert!((min..=max).contains(&v), "sample {} outside [{}, {}]", v, min, max);
        }
    }

    /// Every Gaussian sample lies in the requested closed range.
    #[test]
    fn prop_gaussian_in_range(
        seed in any::<u64>(),
        min in -1_000i64..1_000,
        width in 0i64..2_000,
        parameter in 2.0f64..20.0,
    ) {
        let max = min + width;
        let mut rng = Rand48::seed_from_u64(seed);
        let dist = Gaussian::new(min, max, parameter).unwrap();
        for _ in 0..64 {
            let v = dist.sample(&mut rng);
            prop_assert!((min..=max).contains(&v), "sample {} outside [{}, {}]", v, min, max);
        }
    }

    /// Every Zipfian sample lies in the requested closed range.
    ///
    /// The exponent floor stays at 1.2 here: range containment near
    /// 1.001 is covered by a dedicated test, and sampling thousands of
    /// cases there would spend almost all iterations overshooting `n`.
    #[test]
    fn prop_zipfian_in_range(
        seed in any::<u64>(),
        min in -1_000i64..1_000,
        width in 0i64..2_000,
        s in 1.2f64..10.0,
    ) {
        let max = min + width;
        let mut rng = Rand48::seed_from_u64(seed);
        let dist = Zipfian::new(min, max, s).unwrap();
        for _ in 0..64 {
            let v = dist.sample(&mut rng);
            prop_assert!((min..=max).contains(&v), "sample {} outside [{}, {}]", v, min, max);
        }
    }
}
