use proptest::prelude::*;

use rlwe_security::estimator::bkz::{delta_bkz, search_ceiling, MIN_SEARCH_BLOCKSIZE};
use rlwe_security::error::EstimatorError;
use rlwe_security::estimator::{estimate, estimate_params};
use rlwe_security::params::{presets, safe_log2};
use rlwe_security::report::SecurityTier;

#[test]
fn effective_security_non_decreasing_in_ring_degree() {
    let log_q = safe_log2(7681.0);
    let mut prev = 0.0_f64;
    for n in [8usize, 32, 256, 512, 1024, 2048] {
        let bits = estimate(n, log_q, 3.0).unwrap().effective_classical_bits;
        assert!(bits >= prev, "n={} gave {} bits, below previous {}", n, bits, prev);
        prev = bits;
    }
}

#[test]
fn algebraic_bound_switches_off_at_128() {
    let below = estimate(127, 10.0, 3.0).unwrap();
    assert_eq!(below.algebraic_security_bits, 63.5);
    assert_eq!(below.effective_classical_bits, 63.5);

    let at = estimate(128, 10.0, 3.0).unwrap();
    assert!(at.algebraic_security_bits.is_infinite());
    assert_eq!(at.effective_classical_bits, at.classical_security_bits);
}

#[test]
fn algebraic_bound_has_no_quantum_discount() {
    // The algebraic bound caps classical security but not quantum, so small
    // rings report more quantum than classical bits.
    let est = estimate(8, safe_log2(7681.0), 3.0).unwrap();
    assert!(est.effective_quantum_bits > est.effective_classical_bits);
    assert!(est.effective_quantum_bits <= est.classical_security_bits);
}

#[test]
fn toy_configuration_is_insecure() {
    let est = estimate_params(&presets::toy_small().unwrap()).unwrap();
    assert!(est.effective_classical_bits < 20.0);
    assert_eq!(est.tier(), SecurityTier::Insecure);
}

#[test]
fn kyber_like_configuration() {
    // The target δ is below 1 whenever σ < q, so the search saturates at
    // 2n + 1000 and the figure is a lower bound from the ceiling.
    let est = estimate_params(&presets::kyber_like().unwrap()).unwrap();
    assert_eq!(est.bkz_blocksize, search_ceiling(256));
    assert!(est.search_exhausted);
    assert!(est.effective_classical_bits >= 100.0);
    assert!((est.effective_classical_bits - 313.74).abs() < 1e-6);
}

#[test]
fn high_configuration_above_192_bits() {
    let est = estimate_params(&presets::high().unwrap()).unwrap();
    assert!(est.effective_classical_bits > 192.0);
}

#[test]
fn very_high_configuration_within_ceiling() {
    let est = estimate_params(&presets::very_high().unwrap()).unwrap();
    assert!(est.bkz_blocksize <= 2 * 2048 + 1000);
    assert!(est.effective_classical_bits >= 256.0);
    assert_eq!(est.tier(), SecurityTier::VeryStrong);
}

#[test]
fn huge_ring_degree_is_rejected() {
    let n = usize::MAX / 2;
    assert_eq!(estimate(n, 14.0, 3.2).unwrap_err(), EstimatorError::InvalidRingDegree(n));
}

#[test]
fn modulus_beyond_f64_range_is_rejected() {
    assert!(matches!(estimate(2048, 1100.0, 3.2), Err(EstimatorError::InvalidParam(_))));
}

#[test]
fn delta_continuous_across_branch_boundary() {
    let left = delta_bkz(50);
    let right = delta_bkz(51);
    assert!((left - right).abs() < 1e-3);
}

proptest! {
    #[test]
    fn prop_delta_non_increasing(beta in MIN_SEARCH_BLOCKSIZE..20_000usize, step in 1usize..500) {
        prop_assert!(delta_bkz(beta + step) <= delta_bkz(beta));
    }

    #[test]
    fn prop_bits_non_negative_and_bounded(
        n in 1usize..4096,
        log_q in -8.0f64..64.0,
        sigma in 0.0f64..1.0e6,
    ) {
        let est = estimate(n, log_q, sigma).unwrap();
        prop_assert!(est.classical_security_bits >= 0.0);
        prop_assert!(est.quantum_security_bits >= 0.0);
        prop_assert!(est.effective_classical_bits >= 0.0);
        prop_assert!(est.effective_quantum_bits >= 0.0);
        prop_assert!(est.effective_quantum_bits <= est.classical_security_bits);
        prop_assert!(est.effective_classical_bits <= est.classical_security_bits);
        prop_assert!(est.bkz_blocksize >= 2);
        prop_assert!(est.bkz_blocksize <= search_ceiling(n));
    }

    #[test]
    fn prop_estimate_is_deterministic(
        n in 1usize..2048,
        log_q in 0.0f64..64.0,
        sigma in 0.0f64..100.0,
    ) {
        let a = estimate(n, log_q, sigma).unwrap();
        let b = estimate(n, log_q, sigma).unwrap();
        prop_assert_eq!(a.bkz_blocksize, b.bkz_blocksize);
        prop_assert_eq!(a.classical_security_bits.to_bits(), b.classical_security_bits.to_bits());
        prop_assert_eq!(a.effective_quantum_bits.to_bits(), b.effective_quantum_bits.to_bits());
        prop_assert_eq!(a, b);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_blocksize_is_least_qualifying(
        n in 1usize..256,
        sigma in 1.0f64..4.0,
    ) {
        // q = 1 puts the target above 1 so the threshold can fall inside the range.
        let est = estimate(n, 0.0, sigma).unwrap();
        let beta = est.bkz_blocksize;
        let target = sigma.max(1.0).powf(1.0 / (2.0 * n as f64));
        if est.search_exhausted {
            prop_assert_eq!(beta, search_ceiling(n));
            prop_assert!(delta_bkz(beta - 1) > target);
        } else {
            prop_assert!(delta_bkz(beta) <= target);
            if beta > MIN_SEARCH_BLOCKSIZE {
                prop_assert!(delta_bkz(beta - 1) > target);
            }
        }
    }
}
