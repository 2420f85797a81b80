//! Scam pattern definitions and detection results
//!
//! A pattern is a named scam indicator with trigger phrases and an
//! integer weight. Definitions are immutable once loaded into the
//! catalog; detection produces fresh result records per call.

use serde::{Deserialize, Serialize};

/// Named scam-indicator definition from the pattern catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternDefinition {
    /// Unique pattern name (e.g., "financial_request")
    pub name: String,
    /// Trigger phrases matched as substrings of normalized text
    #[serde(alias = "patterns")]
    pub triggers: Vec<String>,
    /// Score contribution when at least one trigger matches
    #[serde(default)]
    pub weight: u32,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
}

/// A pattern that matched the analyzed conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedPattern {
    pub name: String,
    pub description: String,
    pub weight: u32,
    /// All matching triggers, in catalog order
    pub matched_triggers: Vec<String>,
}

/// Severity of the aggregated financial discussion flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagSeverity {
    Medium,
    High,
}

/// Aggregated financial discussion signal
///
/// At most one flag is produced per analysis; its weight grows with the
/// number of distinct financial keywords found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialFlag {
    pub name: String,
    pub severity: FlagSeverity,
    pub weight: u32,
}
