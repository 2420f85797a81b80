//! Top-level conversation analysis report

use serde::{Deserialize, Serialize};

use crate::insight::{Insight, ScamClassification, TimelineEvent};
use crate::pattern::{DetectedPattern, FinancialFlag};
use crate::risk::{RiskAssessment, RiskLevel};

/// Complete result of one conversation analysis
///
/// A plain structured record with only primitive and nested-record
/// fields; the presentation layer serializes it as-is. AI-layer
/// failures never change this shape, only the richness of
/// `ai_insights`, `timeline`, and `scam_classification`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub risk_color: String,
    pub risk_message: String,
    pub detected_patterns: Vec<DetectedPattern>,
    pub detected_flags: Vec<FinancialFlag>,
    pub ai_insights: Vec<Insight>,
    pub timeline: Vec<TimelineEvent>,
    pub scam_classification: Option<ScamClassification>,
}

impl AnalysisReport {
    /// Assemble a report from the deterministic assessment and the
    /// (possibly fallback-synthesized) enrichment parts.
    pub fn new(
        assessment: RiskAssessment,
        detected_patterns: Vec<DetectedPattern>,
        detected_flags: Vec<FinancialFlag>,
        ai_insights: Vec<Insight>,
        timeline: Vec<TimelineEvent>,
        scam_classification: Option<ScamClassification>,
    ) -> Self {
        Self {
            risk_score: assessment.score,
            risk_level: assessment.level,
            risk_color: assessment.color,
            risk_message: assessment.message,
            detected_patterns,
            detected_flags,
            ai_insights,
            timeline,
            scam_classification,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_flat_fields() {
        let report = AnalysisReport::new(
            RiskAssessment::from_score(55),
            Vec::new(),
            Vec::new(),
            vec![Insight::info("Conversation Appears Normal", "No red flags.")],
            Vec::new(),
            None,
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["risk_score"], 55);
        assert_eq!(json["risk_level"], "medium");
        assert_eq!(json["risk_color"], "#f59e0b");
        assert_eq!(json["risk_message"], "CAUTION ADVISED");
        assert!(json["scam_classification"].is_null());
    }
}
