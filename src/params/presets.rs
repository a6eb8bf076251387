use crate::error::Result;
use crate::params::{ParameterSet, ParameterSetBuilder};

/// A named parameter set used by the report driver.
#[derive(Clone, Debug)]
pub struct Preset {
    /// Short name shown in the summary table.
    pub name: &'static str,
    /// Longer heading shown above the full report.
    pub title: &'static str,
    pub params: ParameterSet,
}

/// Toy parameters used by small test builds (n=8, q=7681, σ=3).
/// Offers essentially no security.
pub fn toy_small() -> Result<ParameterSet> {
    ParameterSetBuilder::new()
        .ring_degree(8)
        .modulus(7681)
        .sigma(3.0)
        .build()
}

/// Larger toy parameters (n=32, q=7681, σ=3).
pub fn toy_large() -> Result<ParameterSet> {
    ParameterSetBuilder::new()
        .ring_degree(32)
        .modulus(7681)
        .sigma(3.0)
        .build()
}

/// Smallest ring degree worth considering for real use (n=256, q=7681, σ=3).
pub fn minimal() -> Result<ParameterSet> {
    ParameterSetBuilder::new()
        .ring_degree(256)
        .modulus(7681)
        .sigma(3.0)
        .build()
}

/// Kyber-512-like ring (n=256, q=3329, σ=1.6).
pub fn kyber_like() -> Result<ParameterSet> {
    ParameterSetBuilder::new()
        .ring_degree(256)
        .modulus(3329)
        .sigma(1.6)
        .build()
}

/// NewHope-style moderate parameters (n=512, q=12289, σ=3.2).
pub fn moderate() -> Result<ParameterSet> {
    ParameterSetBuilder::new()
        .ring_degree(512)
        .modulus(12289)
        .sigma(3.2)
        .build()
}

/// n=1024 with q ≈ 2^14 and σ=3.2.
pub fn high() -> Result<ParameterSet> {
    ParameterSetBuilder::new()
        .ring_degree(1024)
        .log_q(14.0)
        .sigma(3.2)
        .build()
}

/// n=2048 with the 30-bit NTT prime 1073479681 and σ=3.2.
pub fn very_high() -> Result<ParameterSet> {
    ParameterSetBuilder::new()
        .ring_degree(2048)
        .modulus(1_073_479_681)
        .sigma(3.2)
        .build()
}

/// All presets in report order, from toy sizes up to the largest ring.
pub fn all() -> Result<Vec<Preset>> {
    Ok(vec![
        Preset {
            name: "Current Small (n=8)",
            title: "Small Test Parameters (n=8)",
            params: toy_small()?,
        },
        Preset {
            name: "Current Large (n=32)",
            title: "Large Test Parameters (n=32)",
            params: toy_large()?,
        },
        Preset {
            name: "Minimal (n=256)",
            title: "Minimal Secure Parameters (n=256, q=7681)",
            params: minimal()?,
        },
        Preset {
            name: "Kyber-like (n=256)",
            title: "Kyber-like Parameters (n=256, q=3329, σ=1.6)",
            params: kyber_like()?,
        },
        Preset {
            name: "Moderate (n=512)",
            title: "Recommended Moderate (n=512, q=12289, σ=3.2)",
            params: moderate()?,
        },
        Preset {
            name: "High (n=1024)",
            title: "Recommended High (n=1024, q≈2^14, σ=3.2)",
            params: high()?,
        },
        Preset {
            name: "Very High (n=2048)",
            title: "Recommended Very High (n=2048, q≈2^30, σ=3.2)",
            params: very_high()?,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_build() {
        let presets = all().unwrap();
        assert_eq!(presets.len(), 7);
        let degrees: Vec<usize> = presets.iter().map(|p| p.params.ring_degree).collect();
        assert_eq!(degrees, vec![8, 32, 256, 256, 512, 1024, 2048]);
    }

    #[test]
    fn test_very_high_modulus() {
        let params = very_high().unwrap();
        assert!((params.log_q - 30.0).abs() < 1e-3);
    }
}
