//! Conversation detection entry point

use cupidsecure_core::{
    normalize_messages, DetectedPattern, FinancialFlag, MessageRecord, RiskAssessment,
};
use cupidsecure_config::PatternCatalog;

use crate::{aggregate, detect_financial_flag, detect_patterns, EngineError};

/// Deterministic analysis outcome, before AI enrichment
#[derive(Debug, Clone)]
pub struct Detection {
    pub assessment: RiskAssessment,
    pub patterns: Vec<DetectedPattern>,
    pub flags: Vec<FinancialFlag>,
    /// Normalized conversation text, for the enrichment prompt
    pub text: String,
}

/// Run pattern and flag detection over a conversation and aggregate
/// the score.
///
/// An empty payload is rejected up front; no partial computation is
/// performed. An empty catalog is not an error: scoring then proceeds
/// on the financial flag contribution alone.
pub fn analyze_messages(
    messages: &[MessageRecord],
    catalog: &PatternCatalog,
) -> Result<Detection, EngineError> {
    if messages.is_empty() {
        return Err(EngineError::InvalidInput("No messages provided".to_string()));
    }

    let text = normalize_messages(messages);
    let patterns = detect_patterns(&text, catalog);
    let flags: Vec<FinancialFlag> = detect_financial_flag(&text).into_iter().collect();
    let assessment = aggregate(&patterns, flags.first());

    tracing::debug!(
        score = assessment.score,
        patterns = patterns.len(),
        flagged = !flags.is_empty(),
        "Conversation analyzed"
    );

    Ok(Detection {
        assessment,
        patterns,
        flags,
        text,
    })
}
