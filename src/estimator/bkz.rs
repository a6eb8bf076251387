//! BKZ root-Hermite-factor model and blocksize search.

use std::f64::consts::{E, PI};

use log::debug;

/// Smallest blocksize considered by the search.
pub const MIN_SEARCH_BLOCKSIZE: usize = 50;

/// Slack added to the lattice dimension 2n to form the search ceiling.
pub const SEARCH_CEILING_SLACK: usize = 1000;

/// Root-Hermite factor achievable by BKZ with blocksize `beta`.
///
/// Uses the `1/(2(β-1))` exponent for β ≤ 50 and the Chen-Nguyen
/// `1/(2β)` exponent above.
pub fn delta_bkz(beta: usize) -> f64 {
    let b = beta as f64;
    let base = (b / (2.0 * PI * E)) * (PI * b).powf(1.0 / b);
    if beta <= 50 {
        base.powf(1.0 / (2.0 * (b - 1.0)))
    } else {
        base.powf(1.0 / (2.0 * b))
    }
}

/// Root-Hermite factor the primal attack must reach on the 2n-dimensional
/// embedding: δ^(2n) ≈ σ/q. `sigma` is floored at 1.
pub fn target_root_hermite_factor(ring_degree: usize, q: f64, sigma: f64) -> f64 {
    let sigma_safe = sigma.max(1.0);
    (sigma_safe / q).powf(1.0 / (2.0 * ring_degree as f64))
}

/// Upper end of the blocksize search: 2n + 1000, saturating at `usize::MAX`.
pub fn search_ceiling(ring_degree: usize) -> usize {
    ring_degree.saturating_mul(2).saturating_add(SEARCH_CEILING_SLACK)
}

/// Outcome of a blocksize search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlocksizeSearch {
    pub blocksize: usize,
    /// No blocksize below the ceiling met the target.
    pub exhausted: bool,
}

/// Smallest β in `[50, 2n + 1000)` with `delta_bkz(β) <= target`, or the
/// ceiling if none qualifies. The result is clamped to at least 2.
///
/// `delta_bkz` is non-increasing on the search range, so the predicate is a
/// threshold and a binary search returns the same β as a linear scan.
pub fn find_blocksize(ring_degree: usize, target_delta: f64) -> BlocksizeSearch {
    let ceiling = search_ceiling(ring_degree);
    let mut lo = MIN_SEARCH_BLOCKSIZE;
    let mut hi = ceiling;

    // Invariant: every β in [50, lo) fails, ceiling is the fallback answer.
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if delta_bkz(mid) <= target_delta {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    let exhausted = lo >= ceiling;
    if exhausted {
        debug!(
            "no blocksize in [{MIN_SEARCH_BLOCKSIZE}, {ceiling}) reaches target delta {target_delta}; clamping to {ceiling}"
        );
    } else {
        debug!("blocksize {lo} reaches target delta {target_delta} (delta = {})", delta_bkz(lo));
    }

    BlocksizeSearch {
        blocksize: lo.clamp(2, ceiling),
        exhausted,
    }
}
