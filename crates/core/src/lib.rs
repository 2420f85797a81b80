//! Core types for the CupidSecure risk analysis engine
//!
//! This crate provides the data model shared across all other crates:
//! - Scam pattern definitions and detection results
//! - Risk score classification (level, color, message)
//! - AI enrichment payloads (insights, timeline, scam classification)
//! - Conversation message records and normalization
//! - Financial request records and risk results
//! - Error types

pub mod conversation;
pub mod error;
pub mod financial;
pub mod insight;
pub mod pattern;
pub mod report;
pub mod risk;

pub use conversation::{normalize_messages, MessageRecord};
pub use error::{Error, Result};
pub use financial::{FinancialRequest, FinancialRiskResult};
pub use insight::{
    AiEnrichment, Insight, InsightKind, ScamClassification, ScamProbability, TimelineEvent,
};
pub use pattern::{DetectedPattern, FinancialFlag, FlagSeverity, PatternDefinition};
pub use report::AnalysisReport;
pub use risk::{RiskAssessment, RiskLevel};
