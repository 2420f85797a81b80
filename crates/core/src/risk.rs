//! Risk score classification
//!
//! Maps a clamped [0,100] score to a discrete level with a fixed color
//! and message. The mapping is total: every score maps to exactly one
//! level, with boundaries at 40 and 70.

use serde::{Deserialize, Serialize};

/// Discrete risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classify a clamped score. Evaluated in descending order so the
    /// boundaries are inclusive of the upper tier.
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            RiskLevel::High
        } else if score >= 40 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Display color (hex) for this level
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::High => "#ef4444",
            RiskLevel::Medium => "#f59e0b",
            RiskLevel::Low => "#10b981",
        }
    }

    /// Headline message for this level
    pub fn message(&self) -> &'static str {
        match self {
            RiskLevel::High => "CRITICAL RISK DETECTED",
            RiskLevel::Medium => "CAUTION ADVISED",
            RiskLevel::Low => "LOW RISK DETECTED",
        }
    }
}

/// Classified risk score, derived once and never mutated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u8,
    pub level: RiskLevel,
    pub color: String,
    pub message: String,
}

impl RiskAssessment {
    /// Build an assessment from a raw (unclamped) score sum
    pub fn from_score(raw: u32) -> Self {
        let score = raw.min(100) as u8;
        let level = RiskLevel::from_score(score);
        Self {
            score,
            level,
            color: level.color().to_string(),
            message: level.message().to_string(),
        }
    }
}
