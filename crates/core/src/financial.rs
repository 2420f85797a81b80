//! Financial request records and risk results

use serde::{Deserialize, Serialize};

/// A single structured money request to evaluate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialRequest {
    /// Amount requested; must be non-negative
    #[serde(default)]
    pub amount: f64,
    /// Stated reason, matched case-folded
    #[serde(default)]
    pub reason: String,
    /// Requested payment method, matched case-folded
    #[serde(default)]
    pub payment_method: String,
    /// Days since the relationship started
    #[serde(default)]
    pub relationship_days: u32,
}

/// Result of the financial-request risk calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialRiskResult {
    pub risk_score: u8,
    /// Human-readable reasons, in rule evaluation order
    pub risk_factors: Vec<String>,
    pub recommendation: String,
    pub action: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request: FinancialRequest = serde_json::from_str(r#"{"amount": 500}"#).unwrap();
        assert_eq!(request.amount, 500.0);
        assert_eq!(request.relationship_days, 0);
        assert!(request.reason.is_empty());
    }

    #[test]
    fn test_negative_relationship_days_rejected_by_type() {
        let result: Result<FinancialRequest, _> =
            serde_json::from_str(r#"{"relationship_days": -3}"#);
        assert!(result.is_err());
    }
}
