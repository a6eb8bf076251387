//! Core-SVP security estimation for Ring-LWE.
//!
//! The primal attack embeds an RLWE instance of ring degree n into a lattice
//! of dimension 2n and succeeds once BKZ reaches a root-Hermite factor δ with
//! δ^(2n) ≈ σ/q. The smallest such blocksize β is converted to bit security
//! with the Core-SVP exponents for enumeration and sieving.
//!
//! These are simplified heuristics. Cross-check any parameter set intended
//! for deployment with the lattice-estimator.

pub mod bkz;
pub mod cost;
pub mod search;

use log::debug;
use num_bigint::BigUint;
use num_traits::FromPrimitive;

use crate::error::{EstimatorError, Result};
use crate::params::ParameterSet;

pub use bkz::{delta_bkz, find_blocksize, target_root_hermite_factor, BlocksizeSearch};
pub use search::{meets_security_level, min_ring_degree};

/// Security estimate for one parameter set.
#[derive(Clone, Debug, PartialEq)]
pub struct SecurityEstimate {
    /// The parameters the estimate was computed for.
    pub params: ParameterSet,
    /// q = 2^log_q.
    pub q: f64,
    /// q rounded to the nearest integer, for display.
    pub modulus: BigUint,
    /// α = σ/q.
    pub alpha: f64,
    /// BKZ blocksize β required by the primal attack.
    pub bkz_blocksize: usize,
    /// True when the search found no β below 2n + 1000 and clamped to it.
    /// The real requirement is then at least `bkz_blocksize`.
    pub search_exhausted: bool,
    pub classical_security_bits: f64,
    pub quantum_security_bits: f64,
    /// Infinite when the algebraic heuristic does not apply (n >= 128).
    pub algebraic_security_bits: f64,
    /// min(classical, algebraic).
    pub effective_classical_bits: f64,
    /// Equal to the quantum lattice bits. The algebraic bound gets no
    /// quantum variant, so this can exceed `effective_classical_bits`.
    pub effective_quantum_bits: f64,
}

impl SecurityEstimate {
    /// Whether the algebraic bound is finite for this parameter set.
    pub fn has_algebraic_bound(&self) -> bool {
        self.algebraic_security_bits.is_finite()
    }
}

/// Estimate the security of RLWE with ring degree `n`, modulus `2^log_q` and
/// error standard deviation `sigma`.
pub fn estimate(n: usize, log_q: f64, sigma: f64) -> Result<SecurityEstimate> {
    let params = ParameterSet::new(n, log_q, sigma)?;
    estimate_params(&params)
}

/// Estimate the security of a parameter set.
///
/// The fields of `ParameterSet` are public, so they are checked again here.
pub fn estimate_params(params: &ParameterSet) -> Result<SecurityEstimate> {
    let params = ParameterSet::new(params.ring_degree, params.log_q, params.sigma)?;
    let n = params.ring_degree;
    let q = params.q();
    let alpha = params.sigma / q;
    let modulus = BigUint::from_f64(q.round()).ok_or_else(|| {
        EstimatorError::InvalidParam(format!("q = 2^{} has no integer representation", params.log_q))
    })?;

    let target_delta = target_root_hermite_factor(n, q, params.sigma);
    let search = find_blocksize(n, target_delta);

    let classical = cost::classical_bits(search.blocksize);
    let quantum = cost::quantum_bits(classical);
    let algebraic = cost::algebraic_bits(n);

    debug!(
        "n={} log_q={:.3} sigma={} -> beta={} classical={:.2} quantum={:.2} algebraic={}",
        n, params.log_q, params.sigma, search.blocksize, classical, quantum, algebraic
    );

    Ok(SecurityEstimate {
        params,
        q,
        modulus,
        alpha,
        bkz_blocksize: search.blocksize,
        search_exhausted: search.exhausted,
        classical_security_bits: classical,
        quantum_security_bits: quantum,
        algebraic_security_bits: algebraic,
        effective_classical_bits: classical.min(algebraic).max(0.0),
        effective_quantum_bits: quantum,
    })
}

/// Estimate every parameter set in `params`, in order. Stops at the first
/// invalid set.
pub fn estimate_batch(params: &[ParameterSet]) -> Result<Vec<SecurityEstimate>> {
    params.iter().map(estimate_params).collect()
}
