pub mod presets;

use crate::error::{EstimatorError, Result};

/// Largest accepted ring degree. Keeps the blocksize search ceiling 2n + 1000
/// well inside `usize`.
pub const MAX_RING_DEGREE: usize = 1 << 24;

/// Logarithm base 2 that maps non-positive inputs to negative infinity.
///
/// Used to turn an integer modulus into the `log_q` the estimator expects.
pub fn safe_log2(x: f64) -> f64 {
    if x <= 0.0 {
        return f64::NEG_INFINITY;
    }
    x.log2()
}

/// A Ring-LWE parameter set: ring degree, modulus size and error width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterSet {
    /// Ring degree n (polynomial degree of the cyclotomic ring).
    pub ring_degree: usize,
    /// log2 of the ciphertext modulus q.
    pub log_q: f64,
    /// Standard deviation of the error distribution.
    pub sigma: f64,
}

impl ParameterSet {
    /// Create a validated parameter set.
    pub fn new(ring_degree: usize, log_q: f64, sigma: f64) -> Result<Self> {
        if ring_degree < 1 || ring_degree > MAX_RING_DEGREE {
            return Err(EstimatorError::InvalidRingDegree(ring_degree));
        }
        if !log_q.is_finite() {
            return Err(EstimatorError::InvalidParam(format!("log_q must be finite, got {}", log_q)));
        }
        let q = log_q.exp2();
        if !q.is_finite() || q <= 0.0 {
            return Err(EstimatorError::InvalidParam(
                format!("q = 2^{} is not representable as a positive f64", log_q)
            ));
        }
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(EstimatorError::InvalidParam(
                format!("sigma must be finite and >= 0, got {}", sigma)
            ));
        }
        Ok(Self { ring_degree, log_q, sigma })
    }

    /// Create a parameter set from an integer modulus q.
    pub fn from_modulus(ring_degree: usize, modulus: u64, sigma: f64) -> Result<Self> {
        if modulus < 2 {
            return Err(EstimatorError::InvalidParam("modulus must be >= 2".into()));
        }
        Self::new(ring_degree, safe_log2(modulus as f64), sigma)
    }

    /// The modulus q = 2^log_q as a float.
    pub fn q(&self) -> f64 {
        self.log_q.exp2()
    }

    /// Relative noise rate α = σ/q.
    pub fn alpha(&self) -> f64 {
        self.sigma / self.q()
    }
}

/// Builder for ParameterSet.
pub struct ParameterSetBuilder {
    ring_degree: usize,
    log_q: f64,
    sigma: f64,
}

impl Default for ParameterSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterSetBuilder {
    pub fn new() -> Self {
        Self {
            ring_degree: 1024,
            log_q: 14.0,
            sigma: 3.2,
        }
    }

    pub fn ring_degree(mut self, n: usize) -> Self {
        self.ring_degree = n;
        self
    }

    pub fn log_q(mut self, log_q: f64) -> Self {
        self.log_q = log_q;
        self
    }

    /// Set log_q from an integer modulus. Non-positive values map to -inf
    /// and are rejected by `build`.
    pub fn modulus(mut self, q: u64) -> Self {
        self.log_q = safe_log2(q as f64);
        self
    }

    pub fn sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    pub fn build(self) -> Result<ParameterSet> {
        ParameterSet::new(self.ring_degree, self.log_q, self.sigma)
    }
}
