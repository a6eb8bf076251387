//! Core-SVP cost model: blocksize to bit security.

/// Cost exponent of enumeration-based BKZ: 2^(0.292 β).
pub const ENUM_COST_EXPONENT: f64 = 0.292;

/// Cost exponent of sieving-based BKZ: 2^(0.2075 β).
pub const SIEVE_COST_EXPONENT: f64 = 0.2075;

/// Ring degrees below this are also checked against the algebraic heuristic.
pub const ALGEBRAIC_CUTOFF: usize = 128;

/// Bits of algebraic security per ring coefficient. A very rough heuristic.
pub const ALGEBRAIC_BITS_PER_COEFF: f64 = 0.5;

/// Classical bit security of BKZ-β: the cheaper of enumeration and sieving.
pub fn classical_bits(blocksize: usize) -> f64 {
    let beta = blocksize as f64;
    let enumeration = ENUM_COST_EXPONENT * beta;
    let sieving = SIEVE_COST_EXPONENT * beta;
    enumeration.min(sieving).max(0.0)
}

/// Grover-style square-root speedup.
pub fn quantum_bits(classical_bits: f64) -> f64 {
    (classical_bits / 2.0).max(0.0)
}

/// Bit security against algebraic attacks on small rings, or infinity when
/// the ring is large enough for the heuristic not to apply.
pub fn algebraic_bits(ring_degree: usize) -> f64 {
    if ring_degree < ALGEBRAIC_CUTOFF {
        (ring_degree as f64 * ALGEBRAIC_BITS_PER_COEFF).max(0.0)
    } else {
        f64::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sieving_is_cheaper() {
        assert_eq!(classical_bits(1000), 207.5);
        assert_eq!(quantum_bits(classical_bits(1000)), 103.75);
    }

    #[test]
    fn test_algebraic_boundary() {
        assert_eq!(algebraic_bits(127), 63.5);
        assert!(algebraic_bits(128).is_infinite());
        assert_eq!(algebraic_bits(1), 0.5);
    }
}
