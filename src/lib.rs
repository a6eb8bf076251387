//! # rlwe-security: Core-SVP security estimates for Ring-LWE
//!
//! Estimates the classical and quantum bit security of an RLWE parameter set
//! `(n, log_q, σ)` against the primal lattice attack, using the BKZ
//! root-Hermite-factor model and the Core-SVP cost exponents.
//!
//! These are SIMPLIFIED heuristics meant for sanity-checking parameter
//! choices. They are not a security proof; validate anything headed for
//! deployment with the [lattice-estimator](https://github.com/malb/lattice-estimator).
//!
//! ## Quick Start
//!
//! ```
//! use rlwe_security::prelude::*;
//!
//! let params = rlwe_security::params::presets::kyber_like().unwrap();
//! let est = estimate_params(&params).unwrap();
//!
//! assert!(est.effective_classical_bits >= 128.0);
//! println!("{}", render_report(&est));
//! ```

pub mod error;
pub mod params;
pub mod estimator;
pub mod report;

/// Convenient re-exports for common types and functions.
pub mod prelude {
    pub use crate::error::{EstimatorError, Result};
    pub use crate::params::{safe_log2, ParameterSet, ParameterSetBuilder};
    pub use crate::estimator::{
        SecurityEstimate,
        estimate, estimate_params, estimate_batch,
        meets_security_level, min_ring_degree,
    };
    pub use crate::report::{
        SecurityTier, Report, Summary,
        render_report, render_summary, render_recommendations,
    };
}
