//! Human-readable security reports.

use std::fmt;

use crate::estimator::SecurityEstimate;

const RULE_WIDTH: usize = 70;

/// Qualitative security tier, derived from effective classical bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SecurityTier {
    Insecure,
    Weak,
    Moderate,
    Good,
    Strong,
    VeryStrong,
}

impl SecurityTier {
    /// Classify by thresholds 80 / 100 / 128 / 192 / 256 bits.
    pub fn classify(effective_classical_bits: f64) -> Self {
        match effective_classical_bits {
            b if b < 80.0 => SecurityTier::Insecure,
            b if b < 100.0 => SecurityTier::Weak,
            b if b < 128.0 => SecurityTier::Moderate,
            b if b < 192.0 => SecurityTier::Good,
            b if b < 256.0 => SecurityTier::Strong,
            _ => SecurityTier::VeryStrong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SecurityTier::Insecure => "INSECURE",
            SecurityTier::Weak => "WEAK",
            SecurityTier::Moderate => "MODERATE",
            SecurityTier::Good => "GOOD",
            SecurityTier::Strong => "STRONG",
            SecurityTier::VeryStrong => "VERY STRONG",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SecurityTier::Insecure => "Vulnerable to practical attacks",
            SecurityTier::Weak => "Not recommended for production",
            SecurityTier::Moderate => "May be acceptable for some applications",
            SecurityTier::Good => "Suitable for most applications",
            SecurityTier::Strong => "High security",
            SecurityTier::VeryStrong => "Excellent security",
        }
    }

    /// Tiers below `Moderate` get a warning marker in reports.
    pub fn is_warning(&self) -> bool {
        *self < SecurityTier::Moderate
    }
}

impl fmt::Display for SecurityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.label(), self.description())
    }
}

impl SecurityEstimate {
    pub fn tier(&self) -> SecurityTier {
        SecurityTier::classify(self.effective_classical_bits)
    }
}

/// Full text report for one estimate.
pub struct Report<'a>(pub &'a SecurityEstimate);

impl fmt::Display for Report<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(out, self.0)
    }
}

/// Render the full report for one estimate.
pub fn render_report(est: &SecurityEstimate) -> String {
    Report(est).to_string()
}

fn write_report(out: &mut fmt::Formatter<'_>, est: &SecurityEstimate) -> fmt::Result {
    let p = &est.params;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "RLWE SECURITY ESTIMATION REPORT")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    writeln!(out)?;
    writeln!(out, "Parameters:")?;
    writeln!(out, "  Ring dimension (n):        {}", p.ring_degree)?;
    writeln!(out, "  Modulus (q):               {} (≈ 2^{:.2})", est.modulus, p.log_q)?;
    writeln!(out, "  Error std dev (σ):         {:.2}", p.sigma)?;
    writeln!(out, "  Noise ratio (α = σ/q):     {:.6e}", est.alpha)?;

    writeln!(out)?;
    writeln!(out, "Attack Analysis:")?;
    writeln!(out, "  BKZ blocksize required:    {}", est.bkz_blocksize)?;
    if est.search_exhausted {
        writeln!(out, "  (search ceiling reached; true blocksize is at least this)")?;
    }

    writeln!(out)?;
    writeln!(out, "Security Estimates:")?;
    writeln!(out, "  Classical security:        {:.1} bits", est.classical_security_bits)?;
    writeln!(out, "  Quantum security:          {:.1} bits", est.quantum_security_bits)?;
    if est.has_algebraic_bound() {
        writeln!(out, "  Algebraic attack:          {:.1} bits", est.algebraic_security_bits)?;
    }

    writeln!(out)?;
    writeln!(out, "Effective Security Level:")?;
    writeln!(out, "  Classical:                 {:.1} bits", est.effective_classical_bits)?;
    writeln!(out, "  Quantum:                   {:.1} bits", est.effective_quantum_bits)?;

    let tier = est.tier();
    writeln!(out)?;
    writeln!(out, "Security Classification:")?;
    let marker = if tier.is_warning() { "[!]" } else { "   " };
    writeln!(out, "  {} {}", marker, tier)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    Ok(())
}

/// Comparison table of named estimates.
pub struct Summary<'a>(pub &'a [(&'a str, &'a SecurityEstimate)]);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(out, self.0)
    }
}

/// Render a comparison table of named estimates.
pub fn render_summary(rows: &[(&str, &SecurityEstimate)]) -> String {
    Summary(rows).to_string()
}

fn write_summary(out: &mut fmt::Formatter<'_>, rows: &[(&str, &SecurityEstimate)]) -> fmt::Result {
    writeln!(
        out,
        "{:<30} {:<10} {:<12} {:<15} {:<15}",
        "Configuration", "n", "q", "Classical", "Quantum"
    )?;
    writeln!(out, "{}", "-".repeat(80))?;
    for (name, est) in rows {
        writeln!(
            out,
            "{:<30} {:<10} {:<12} {:<15.1} {:<15.1}",
            name,
            est.params.ring_degree,
            est.modulus.to_string(),
            est.effective_classical_bits,
            est.effective_quantum_bits
        )?;
    }
    Ok(())
}

/// Fixed guidance printed after the summary table.
pub fn render_recommendations() -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let lines = [
        rule.as_str(),
        "RECOMMENDATIONS:",
        rule.as_str(),
        "",
        "1. Toy parameters (n=8, n=32) provide only a few bits of security.",
        "   [!] DO NOT USE IN PRODUCTION",
        "",
        "2. MINIMUM: Use n>=256 with appropriate q and σ for any real use.",
        "",
        "3. RECOMMENDED: Use n>=512 for 100+ bit classical security.",
        "",
        "4. For blind signatures similar to Cashu:",
        "   - Use n=512, q=12289, σ=3.2 (moderate security)",
        "   - Or n=1024 for higher security",
        "",
        "5. Always validate parameters with the lattice-estimator before deployment:",
        "   https://github.com/malb/lattice-estimator",
        rule.as_str(),
    ];
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
