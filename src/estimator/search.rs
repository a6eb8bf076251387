//! Parameter selection helpers built on the estimator.

use log::debug;

use crate::error::Result;
use crate::estimator::estimate_params;
use crate::params::ParameterSet;

/// Largest ring degree tried by `min_ring_degree`.
pub const MAX_SEARCH_RING_DEGREE: usize = 65536;

/// Check if parameters meet a minimum classical security level.
pub fn meets_security_level(params: &ParameterSet, min_bits: f64) -> Result<bool> {
    Ok(estimate_params(params)?.effective_classical_bits >= min_bits)
}

/// Find the minimum power-of-two ring degree reaching `target_bits` of
/// effective classical security for the given modulus size and noise.
///
/// Returns `None` if no ring degree up to `MAX_SEARCH_RING_DEGREE` qualifies.
pub fn min_ring_degree(log_q: f64, sigma: f64, target_bits: f64) -> Result<Option<usize>> {
    let mut n = 2;
    while n <= MAX_SEARCH_RING_DEGREE {
        let params = ParameterSet::new(n, log_q, sigma)?;
        if meets_security_level(&params, target_bits)? {
            debug!("n={} is the smallest ring degree reaching {} bits", n, target_bits);
            return Ok(Some(n));
        }
        n *= 2;
    }
    Ok(None)
}
