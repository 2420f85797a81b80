//! AI insight integration
//!
//! Enriches the deterministic signal with free-form reasoning from the
//! external model while guaranteeing a well-formed result whatever the
//! model does. Every failure mode of the call (missing credential,
//! transport error, bad status, malformed output) degrades to the same
//! place: deterministic fallback insights synthesized from what the
//! engine already detected. This component never errors.

use std::sync::Arc;

use cupidsecure_core::{AiEnrichment, DetectedPattern, FinancialFlag, Insight};
use cupidsecure_llm::{strip_code_fence, LlmBackend, Message, Prompts};

/// Integrates external enrichment with deterministic fallback
pub struct InsightIntegrator {
    backend: Option<Arc<dyn LlmBackend>>,
}

impl InsightIntegrator {
    pub fn new(backend: Arc<dyn LlmBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// Integrator with no external backend; every call uses fallback
    pub fn disabled() -> Self {
        Self { backend: None }
    }

    /// Produce enrichment for detected signals.
    ///
    /// The `insights` list in the result is never empty. `timeline`
    /// and `scam_classification` stay empty/absent unless the model
    /// supplied them; callers treat that as "unknown".
    pub async fn enrich(
        &self,
        patterns: &[DetectedPattern],
        flags: &[FinancialFlag],
        text: &str,
    ) -> AiEnrichment {
        let mut enrichment = match &self.backend {
            Some(backend) => self.request_enrichment(backend.as_ref(), patterns, flags, text).await,
            None => AiEnrichment::default(),
        };

        if enrichment.insights.is_empty() {
            enrichment.insights = fallback_insights(patterns, flags);
        }

        enrichment
    }

    async fn request_enrichment(
        &self,
        backend: &dyn LlmBackend,
        patterns: &[DetectedPattern],
        flags: &[FinancialFlag],
        text: &str,
    ) -> AiEnrichment {
        let pattern_names: Vec<&str> = patterns.iter().map(|p| p.name.as_str()).collect();
        let flag_names: Vec<&str> = flags.iter().map(|f| f.name.as_str()).collect();
        let prompt = Prompts::enrichment(&pattern_names, &flag_names, text);

        let raw = match backend.generate(&[Message::user(prompt)]).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "AI enrichment unavailable, using fallback");
                return AiEnrichment::default();
            }
        };

        match serde_json::from_str::<AiEnrichment>(strip_code_fence(&raw)) {
            Ok(enrichment) => enrichment,
            Err(e) => {
                tracing::warn!(error = %e, raw = %raw, "AI response was not valid JSON");
                AiEnrichment::default()
            }
        }
    }
}

/// Synthesize insights deterministically from detected signals.
///
/// Checked against pattern and flag names alike, since richer callers
/// may surface gift card or crypto indicators through the catalog.
pub fn fallback_insights(patterns: &[DetectedPattern], flags: &[FinancialFlag]) -> Vec<Insight> {
    let has = |name: &str| {
        patterns.iter().any(|p| p.name == name) || flags.iter().any(|f| f.name == name)
    };

    let mut insights = Vec::new();

    if has("financial_request") {
        insights.push(Insight::warning(
            "Direct Financial Request Detected",
            "The conversation contains explicit requests for money. This is a major red flag in online relationships.",
        ));
    }

    if has("quick_relationship") {
        insights.push(Insight::warning(
            "Rapid Emotional Escalation",
            "The person is moving very quickly emotionally. Scammers often use \"love bombing\" to create quick emotional attachment.",
        ));
    }

    if has("cryptocurrency") {
        insights.push(Insight::danger(
            "Cryptocurrency Investment Mentioned",
            "Romance scammers increasingly use crypto investment schemes. These are extremely difficult to recover funds from.",
        ));
    }

    if has("gift_cards") {
        insights.push(Insight::danger(
            "Gift Card Request - MAJOR RED FLAG",
            "Legitimate romantic partners never ask for gift cards. This is the #1 payment method for scammers because they are untraceable.",
        ));
    }

    if insights.is_empty() {
        insights.push(Insight::info(
            "Conversation Appears Normal",
            "No major red flags detected. Continue to be cautious and never send money to someone you haven't met in person.",
        ));
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cupidsecure_core::{FlagSeverity, InsightKind};
    use cupidsecure_llm::LlmError;

    /// Backend returning a canned response or failure
    struct MockBackend {
        response: Result<String, ()>,
    }

    impl MockBackend {
        fn ok(response: &str) -> Arc<dyn LlmBackend> {
            Arc::new(Self {
                response: Ok(response.to_string()),
            })
        }

        fn failing() -> Arc<dyn LlmBackend> {
            Arc::new(Self { response: Err(()) })
        }
    }

    #[async_trait]
    impl LlmBackend for MockBackend {
        async fn generate(&self, _messages: &[Message]) -> Result<String, LlmError> {
            self.response
                .clone()
                .map_err(|_| LlmError::Network("connection refused".to_string()))
        }

        fn model_name(&self) -> &str {
            "mock"
        }
    }

    fn pattern(name: &str) -> DetectedPattern {
        DetectedPattern {
            name: name.to_string(),
            description: String::new(),
            weight: 40,
            matched_triggers: vec!["t".to_string()],
        }
    }

    fn flag(name: &str) -> FinancialFlag {
        FinancialFlag {
            name: name.to_string(),
            severity: FlagSeverity::Medium,
            weight: 10,
        }
    }

    #[tokio::test]
    async fn test_disabled_integrator_uses_fallback() {
        let integrator = InsightIntegrator::disabled();
        let enrichment = integrator
            .enrich(&[pattern("financial_request")], &[], "text")
            .await;

        assert_eq!(enrichment.insights.len(), 1);
        assert_eq!(enrichment.insights[0].title, "Direct Financial Request Detected");
        assert!(enrichment.timeline.is_empty());
        assert!(enrichment.scam_classification.is_none());
    }

    #[tokio::test]
    async fn test_backend_failure_uses_fallback() {
        let integrator = InsightIntegrator::new(MockBackend::failing());
        let enrichment = integrator.enrich(&[], &[], "text").await;

        assert_eq!(enrichment.insights.len(), 1);
        assert_eq!(enrichment.insights[0].kind, InsightKind::Info);
        assert_eq!(enrichment.insights[0].title, "Conversation Appears Normal");
    }

    #[tokio::test]
    async fn test_malformed_json_absorbed_into_fallback() {
        let integrator = InsightIntegrator::new(MockBackend::ok("not json"));
        let enrichment = integrator
            .enrich(&[pattern("quick_relationship")], &[], "text")
            .await;

        assert_eq!(enrichment.insights[0].title, "Rapid Emotional Escalation");
    }

    #[tokio::test]
    async fn test_truncated_json_absorbed_into_fallback() {
        let integrator = InsightIntegrator::new(MockBackend::ok(r#"{"insights": [{"type""#));
        let enrichment = integrator.enrich(&[], &[], "text").await;
        assert!(!enrichment.insights.is_empty());
    }

    #[tokio::test]
    async fn test_fenced_valid_response_is_parsed() {
        let response = "```json\n{\"insights\": [{\"type\": \"danger\", \"title\": \"Crypto Scheme\", \"description\": \"Pig butchering.\"}], \"timeline\": []}\n```";
        let integrator = InsightIntegrator::new(MockBackend::ok(response));
        let enrichment = integrator.enrich(&[], &[], "text").await;

        assert_eq!(enrichment.insights.len(), 1);
        assert_eq!(enrichment.insights[0].title, "Crypto Scheme");
        assert_eq!(enrichment.insights[0].kind, InsightKind::Danger);
    }

    #[tokio::test]
    async fn test_valid_response_with_empty_insights_falls_back() {
        let integrator =
            InsightIntegrator::new(MockBackend::ok(r#"{"insights": [], "timeline": [{"phase": "Week 1", "event": "Contact", "risk_score": 20}]}"#));
        let enrichment = integrator.enrich(&[], &[flag("financial_discussion")], "text").await;

        // Insights synthesized, but the model's timeline is kept
        assert_eq!(enrichment.insights[0].title, "Conversation Appears Normal");
        assert_eq!(enrichment.timeline.len(), 1);
    }

    #[test]
    fn test_fallback_rules_fire_together() {
        let insights = fallback_insights(
            &[pattern("financial_request"), pattern("quick_relationship")],
            &[flag("cryptocurrency"), flag("gift_cards")],
        );
        assert_eq!(insights.len(), 4);
        assert_eq!(insights[2].kind, InsightKind::Danger);
        assert_eq!(insights[3].title, "Gift Card Request - MAJOR RED FLAG");
    }

    #[test]
    fn test_fallback_matches_pattern_or_flag_names() {
        // A gift card indicator surfaced through the catalog still fires
        let insights = fallback_insights(&[pattern("gift_cards")], &[]);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::Danger);
    }

    #[test]
    fn test_fallback_never_empty() {
        let insights = fallback_insights(&[], &[]);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::Info);
    }
}
