//! Best-effort sanitation of generative output
//!
//! Models sometimes wrap JSON in a markdown code fence despite being
//! told not to. Stripping is best-effort, not a guarantee: the result
//! still goes through strict JSON parsing, and a parse failure routes
//! to fallback.

/// Strip one leading fence marker (```json or ```) and one trailing
/// ``` if present, then trim.
pub fn strip_code_fence(text: &str) -> &str {
    let mut trimmed = text.trim();

    if let Some(rest) = trimmed.strip_prefix("```json") {
        trimmed = rest;
    } else if let Some(rest) = trimmed.strip_prefix("```") {
        trimmed = rest;
    }

    if let Some(rest) = trimmed.strip_suffix("```") {
        trimmed = rest;
    }

    trimmed.trim()
}
