//! Financial-request risk calculator
//!
//! Independent weighted-rule evaluator over a single structured money
//! request. Amount and duration rules fire at most one bracket each;
//! payment-method and reason rules are independent boolean triggers.

use cupidsecure_core::{FinancialRequest, FinancialRiskResult, RiskLevel};

use crate::EngineError;

const HIGH_RISK_METHODS: [&str; 7] = [
    "crypto",
    "bitcoin",
    "gift card",
    "wire",
    "western union",
    "zelle",
    "cash app",
];

const HIGH_RISK_REASONS: [&str; 6] = [
    "emergency",
    "hospital",
    "ticket",
    "flight",
    "investment",
    "profit",
];

/// Evaluate a financial request and produce a clamped score with the
/// factors that fired and a tiered recommendation.
pub fn assess_financial_request(
    request: &FinancialRequest,
) -> Result<FinancialRiskResult, EngineError> {
    if request.amount.is_nan() || request.amount < 0.0 {
        return Err(EngineError::InvalidInput(
            "Amount must be non-negative".to_string(),
        ));
    }

    let reason = request.reason.to_lowercase();
    let payment_method = request.payment_method.to_lowercase();

    let mut score: u32 = 0;
    let mut factors: Vec<String> = Vec::new();

    // Amount bracket: strictly greater-than boundaries, as written
    if request.amount > 1000.0 {
        score += 30;
        factors.push("Large amount requested relative to relationship duration.".to_string());
    } else if request.amount > 200.0 {
        score += 10;
    }

    // Relationship duration bracket
    if request.relationship_days < 14 {
        score += 40;
        factors.push("Request made very early in the relationship (< 2 weeks).".to_string());
    } else if request.relationship_days < 30 {
        score += 20;
        factors.push("Request made early in the relationship (< 1 month).".to_string());
    }

    if HIGH_RISK_METHODS.iter().any(|m| payment_method.contains(m)) {
        score += 30;
        factors.push(format!(
            "High-risk payment method requested: {}",
            payment_method
        ));
    }

    if HIGH_RISK_REASONS.iter().any(|r| reason.contains(r)) {
        score += 20;
        factors.push("Reason for request is a common scam trope.".to_string());
    }

    let score = score.min(100) as u8;

    let (recommendation, action) = match RiskLevel::from_score(score) {
        RiskLevel::High => (
            "DO NOT PROCEED. This is highly likely a scam.",
            "Block User",
        ),
        RiskLevel::Medium => (
            "Proceed with extreme caution. Verify independently.",
            "Ask for Proof",
        ),
        RiskLevel::Low => ("Low financial risk detected, but stay alert.", "Monitor"),
    };

    Ok(FinancialRiskResult {
        risk_score: score,
        risk_factors: factors,
        recommendation: recommendation.to_string(),
        action: action.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(amount: f64, days: u32, method: &str, reason: &str) -> FinancialRequest {
        FinancialRequest {
            amount,
            reason: reason.to_string(),
            payment_method: method.to_string(),
            relationship_days: days,
        }
    }

    #[test]
    fn test_all_rules_fire_and_clamp() {
        // 30 + 40 + 30 + 20 clamps to 100
        let result =
            assess_financial_request(&request(5000.0, 5, "bitcoin", "investment")).unwrap();
        assert_eq!(result.risk_score, 100);
        assert_eq!(result.action, "Block User");
        assert_eq!(
            result.recommendation,
            "DO NOT PROCEED. This is highly likely a scam."
        );
        assert_eq!(result.risk_factors.len(), 4);
    }

    #[test]
    fn test_benign_request_scores_zero() {
        let result = assess_financial_request(&request(50.0, 200, "check", "dinner")).unwrap();
        assert_eq!(result.risk_score, 0);
        assert!(result.risk_factors.is_empty());
        assert_eq!(result.action, "Monitor");
        assert_eq!(
            result.recommendation,
            "Low financial risk detected, but stay alert."
        );
    }

    #[test]
    fn test_amount_brackets_exclusive() {
        // Exactly 1000 falls in the middle bracket, which records no factor
        let result = assess_financial_request(&request(1000.0, 60, "check", "rent")).unwrap();
        assert_eq!(result.risk_score, 10);
        assert!(result.risk_factors.is_empty());

        // Exactly 200 fires neither bracket
        let result = assess_financial_request(&request(200.0, 60, "check", "rent")).unwrap();
        assert_eq!(result.risk_score, 0);
    }

    #[test]
    fn test_duration_brackets_exclusive() {
        let early = assess_financial_request(&request(0.0, 13, "check", "rent")).unwrap();
        assert_eq!(early.risk_score, 40);

        let boundary = assess_financial_request(&request(0.0, 14, "check", "rent")).unwrap();
        assert_eq!(boundary.risk_score, 20);
        assert_eq!(
            boundary.risk_factors,
            vec!["Request made early in the relationship (< 1 month)."]
        );

        let settled = assess_financial_request(&request(0.0, 30, "check", "rent")).unwrap();
        assert_eq!(settled.risk_score, 0);
    }

    #[test]
    fn test_payment_method_matching_is_case_folded() {
        let result =
            assess_financial_request(&request(0.0, 60, "Western Union", "rent")).unwrap();
        assert_eq!(result.risk_score, 30);
        // The factor reports the case-folded method
        assert_eq!(
            result.risk_factors,
            vec!["High-risk payment method requested: western union"]
        );
    }

    #[test]
    fn test_reason_trope_detected() {
        let result =
            assess_financial_request(&request(0.0, 60, "check", "Hospital bill for my daughter"))
                .unwrap();
        assert_eq!(result.risk_score, 20);
        assert_eq!(
            result.risk_factors,
            vec!["Reason for request is a common scam trope."]
        );
    }

    #[test]
    fn test_medium_tier_mapping() {
        // 40 <= score < 70 maps to Ask for Proof
        let result = assess_financial_request(&request(0.0, 5, "check", "rent")).unwrap();
        assert_eq!(result.risk_score, 40);
        assert_eq!(result.action, "Ask for Proof");
        assert_eq!(
            result.recommendation,
            "Proceed with extreme caution. Verify independently."
        );
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result = assess_financial_request(&request(-1.0, 5, "check", "rent"));
        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }
}
