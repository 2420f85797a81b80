//! Conversation analysis orchestration
//!
//! Combines the deterministic engine with the AI insight layer:
//! - `ConversationAnalyzer`: detection, aggregation, enrichment merge
//! - `InsightIntegrator`: sanitize/validate/merge/fallback around the
//!   external text-generation call
//! - `ScriptGenerator`: safe response scripts with built-in fallbacks

pub mod analyzer;
pub mod insight;
pub mod scripts;

pub use analyzer::ConversationAnalyzer;
pub use insight::InsightIntegrator;
pub use scripts::ScriptGenerator;
