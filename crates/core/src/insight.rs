//! AI enrichment payload types
//!
//! These are the shapes the external model is asked to return. Every
//! field defaults to empty so a response missing a key still parses;
//! a response that is not valid JSON at all is handled upstream by the
//! insight integrator's fallback.

use serde::{Deserialize, Deserializer, Serialize};

/// Insight severity/kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Info,
    Warning,
    Danger,
}

/// A single explanation produced by the AI layer or the fallback rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// Unknown kind strings from the model degrade to `info` rather
    /// than failing the whole payload
    #[serde(rename = "type", deserialize_with = "lenient_kind")]
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
}

fn lenient_kind<'de, D>(deserializer: D) -> Result<InsightKind, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(match raw.as_str() {
        "warning" => InsightKind::Warning,
        "danger" => InsightKind::Danger,
        _ => InsightKind::Info,
    })
}

impl Insight {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: InsightKind::Info,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: InsightKind::Warning,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn danger(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: InsightKind::Danger,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// One phase of the estimated scam timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub phase: String,
    pub event: String,
    /// Clamped to [0,100] during deserialization; an out-of-range
    /// estimate from the model must not invalidate the payload
    #[serde(deserialize_with = "clamp_score", default)]
    pub risk_score: u8,
}

fn clamp_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(raw.clamp(0, 100) as u8)
}

/// Likelihood that the classified scam type applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScamProbability {
    Low,
    Medium,
    High,
}

/// Scam variant classification; absent when unknown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScamClassification {
    #[serde(rename = "type")]
    pub scam_type: String,
    pub description: String,
    pub avg_loss: String,
    pub probability: ScamProbability,
}

/// Parsed AI enrichment result
///
/// Missing keys default to empty collections; `scam_classification`
/// stays absent when the model did not supply one. Callers treat
/// absence as "unknown", not as an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiEnrichment {
    #[serde(default)]
    pub insights: Vec<Insight>,
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
    #[serde(default)]
    pub scam_classification: Option<ScamClassification>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_default_to_empty() {
        let enrichment: AiEnrichment = serde_json::from_str("{}").unwrap();
        assert!(enrichment.insights.is_empty());
        assert!(enrichment.timeline.is_empty());
        assert!(enrichment.scam_classification.is_none());
    }

    #[test]
    fn test_full_payload_parses() {
        let enrichment: AiEnrichment = serde_json::from_str(
            r#"{
                "insights": [
                    {"type": "danger", "title": "Gift Cards", "description": "Untraceable."}
                ],
                "timeline": [
                    {"phase": "Week 1", "event": "Love bombing", "risk_score": 35}
                ],
                "scam_classification": {
                    "type": "Military Romance",
                    "description": "Deployed-soldier persona.",
                    "avg_loss": "$2,500",
                    "probability": "High"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(enrichment.insights[0].kind, InsightKind::Danger);
        assert_eq!(enrichment.timeline[0].risk_score, 35);
        let classification = enrichment.scam_classification.unwrap();
        assert_eq!(classification.probability, ScamProbability::High);
    }

    #[test]
    fn test_out_of_range_timeline_score_is_clamped() {
        let event: TimelineEvent = serde_json::from_str(
            r#"{"phase": "Week 2", "event": "Escalation", "risk_score": 180}"#,
        )
        .unwrap();
        assert_eq!(event.risk_score, 100);

        let event: TimelineEvent = serde_json::from_str(
            r#"{"phase": "Week 2", "event": "Escalation", "risk_score": -5}"#,
        )
        .unwrap();
        assert_eq!(event.risk_score, 0);
    }

    #[test]
    fn test_unknown_insight_kind_degrades_to_info() {
        let insight: Insight = serde_json::from_str(
            r#"{"type": "catastrophic", "title": "T", "description": "D"}"#,
        )
        .unwrap();
        assert_eq!(insight.kind, InsightKind::Info);
    }

    #[test]
    fn test_insight_kind_serializes_lowercase() {
        let insight = Insight::warning("T", "D");
        let json = serde_json::to_string(&insight).unwrap();
        assert!(json.contains("\"type\":\"warning\""));
    }
}
