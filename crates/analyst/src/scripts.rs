//! Safe response script generation
//!
//! Same degrade-gracefully contract as the insight integrator: the
//! model is asked for a JSON array of short scripts; anything else is
//! salvaged line by line, and built-in scripts cover total failure.

use std::sync::Arc;

use cupidsecure_llm::{strip_code_fence, LlmBackend, Message, Prompts, ScriptKind};

const MAX_SCRIPTS: usize = 3;

const DEFAULT_SCRIPTS: [&str; 3] = [
    "I'm not comfortable with this request.",
    "I prefer to keep things professional.",
    "I think we should stop talking.",
];

/// Generates short scripts the user can send back to a suspected
/// scammer
pub struct ScriptGenerator {
    backend: Option<Arc<dyn LlmBackend>>,
}

impl ScriptGenerator {
    pub fn new(backend: Arc<dyn LlmBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    pub fn disabled() -> Self {
        Self { backend: None }
    }

    /// Generate at most three scripts for the category. Never errors.
    pub async fn generate(&self, kind: ScriptKind, context: &str) -> Vec<String> {
        let mut scripts = match &self.backend {
            Some(backend) => {
                let prompt = Prompts::script(kind, context);
                match backend.generate(&[Message::user(prompt)]).await {
                    Ok(raw) => parse_scripts(&raw),
                    Err(e) => {
                        tracing::warn!(error = %e, "Script generation unavailable, using defaults");
                        Vec::new()
                    }
                }
            }
            None => Vec::new(),
        };

        if scripts.is_empty() {
            scripts = DEFAULT_SCRIPTS.iter().map(|s| s.to_string()).collect();
        }

        scripts.truncate(MAX_SCRIPTS);
        scripts
    }
}

/// Parse the model output as a JSON array of strings, salvaging
/// unstructured text line by line.
fn parse_scripts(raw: &str) -> Vec<String> {
    let cleaned = strip_code_fence(raw);

    if let Ok(scripts) = serde_json::from_str::<Vec<String>>(cleaned) {
        return scripts;
    }

    cleaned
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('['))
        .map(str::to_string)
        .collect()
}
