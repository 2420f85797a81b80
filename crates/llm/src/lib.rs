//! OpenRouter integration
//!
//! Provides the text-generation backend behind the AI insight layer:
//! - `LlmBackend` trait seam and the OpenRouter chat-completions client
//! - Prompt construction for enrichment, image forensics, response
//!   scripts, and the advisor chat
//! - Best-effort sanitation of generative output (fence stripping)

pub mod backend;
pub mod prompt;
pub mod sanitize;

pub use backend::{LlmBackend, LlmConfig, OpenRouterBackend};
pub use prompt::{ContentPart, Message, MessageContent, Prompts, Role, ScriptKind};
pub use sanitize::strip_code_fence;

use thiserror::Error;

/// LLM errors
///
/// Callers treat every variant uniformly as "no usable AI output" and
/// degrade to fallback; the distinction exists for logging.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("API key not configured")]
    MissingCredential,

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Network(err.to_string())
        }
    }
}

impl From<LlmError> for cupidsecure_core::Error {
    fn from(err: LlmError) -> Self {
        cupidsecure_core::Error::Llm(err.to_string())
    }
}
