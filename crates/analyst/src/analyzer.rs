//! Conversation analyzer

use std::sync::Arc;

use cupidsecure_config::PatternCatalog;
use cupidsecure_core::{AnalysisReport, MessageRecord};
use cupidsecure_engine::{analyze_messages, EngineError};

use crate::insight::InsightIntegrator;

/// Full conversation analysis: deterministic detection and scoring,
/// then AI enrichment merged in (or its fallback).
pub struct ConversationAnalyzer {
    catalog: Arc<PatternCatalog>,
    integrator: InsightIntegrator,
}

impl ConversationAnalyzer {
    pub fn new(catalog: Arc<PatternCatalog>, integrator: InsightIntegrator) -> Self {
        Self {
            catalog,
            integrator,
        }
    }

    /// Analyze a conversation payload.
    ///
    /// Empty payloads are rejected; AI-layer failures never are — they
    /// only reduce the richness of the enrichment fields.
    pub async fn analyze(
        &self,
        messages: &[MessageRecord],
    ) -> Result<AnalysisReport, EngineError> {
        let detection = analyze_messages(messages, &self.catalog)?;

        let enrichment = self
            .integrator
            .enrich(&detection.patterns, &detection.flags, &detection.text)
            .await;

        Ok(AnalysisReport::new(
            detection.assessment,
            detection.patterns,
            detection.flags,
            enrichment.insights,
            enrichment.timeline,
            enrichment.scam_classification,
        ))
    }
}
