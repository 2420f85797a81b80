//! Shared application state

use std::sync::Arc;

use cupidsecure_analyst::{ConversationAnalyzer, InsightIntegrator, ScriptGenerator};
use cupidsecure_config::{PatternCatalog, Settings};
use cupidsecure_llm::LlmBackend;

/// State shared by all handlers.
///
/// The catalog handle is immutable for the process lifetime; every
/// request reads it without coordination.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub analyzer: Arc<ConversationAnalyzer>,
    pub scripts: Arc<ScriptGenerator>,
    pub backend: Arc<dyn LlmBackend>,
}

impl AppState {
    pub fn new(
        settings: Settings,
        catalog: Arc<PatternCatalog>,
        backend: Arc<dyn LlmBackend>,
    ) -> Self {
        let analyzer = ConversationAnalyzer::new(
            Arc::clone(&catalog),
            InsightIntegrator::new(Arc::clone(&backend)),
        );

        Self {
            settings: Arc::new(settings),
            analyzer: Arc::new(analyzer),
            scripts: Arc::new(ScriptGenerator::new(Arc::clone(&backend))),
            backend,
        }
    }
}
