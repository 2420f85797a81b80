//! Weighted score aggregation

use cupidsecure_core::{DetectedPattern, FinancialFlag, RiskAssessment};

/// Sum pattern weights and the flag weight, clamp to [0,100], and
/// classify.
pub fn aggregate(
    patterns: &[DetectedPattern],
    flag: Option<&FinancialFlag>,
) -> RiskAssessment {
    let total: u32 = patterns.iter().map(|p| p.weight).sum::<u32>()
        + flag.map(|f| f.weight).unwrap_or(0);

    RiskAssessment::from_score(total)
}
