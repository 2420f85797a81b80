//! Pattern and financial flag detection
//!
//! Both detectors are pure functions of (normalized text, rules).
//! Normalized means lower-cased with message texts joined by spaces;
//! see `cupidsecure_core::normalize_messages`.

use cupidsecure_core::{DetectedPattern, FinancialFlag, FlagSeverity};
use cupidsecure_config::PatternCatalog;

/// Fixed keyword list for the financial discussion flag
pub const FINANCIAL_KEYWORDS: [&str; 7] = [
    "money", "bank", "transfer", "card", "account", "fund", "wallet",
];

/// Match catalog patterns against normalized text.
///
/// A pattern matches when at least one of its triggers is a substring
/// of the text. All matching triggers are recorded in catalog order,
/// but the pattern contributes its full weight exactly once regardless
/// of how many triggers matched. Patterns with no match are omitted.
pub fn detect_patterns(text: &str, catalog: &PatternCatalog) -> Vec<DetectedPattern> {
    if text.is_empty() {
        return Vec::new();
    }

    catalog
        .iter()
        .filter_map(|definition| {
            let matched_triggers: Vec<String> = definition
                .triggers
                .iter()
                .filter(|trigger| text.contains(trigger.as_str()))
                .cloned()
                .collect();

            if matched_triggers.is_empty() {
                return None;
            }

            Some(DetectedPattern {
                name: definition.name.clone(),
                description: definition.description.clone(),
                weight: definition.weight,
                matched_triggers,
            })
        })
        .collect()
}

/// Detect financial discussion in normalized text.
///
/// Returns at most one flag. Weight is 10 per distinct keyword found;
/// duplicate occurrences of the same keyword do not count twice.
/// Severity is high at 3 or more distinct keywords.
pub fn detect_financial_flag(text: &str) -> Option<FinancialFlag> {
    let distinct = FINANCIAL_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .count() as u32;

    if distinct == 0 {
        return None;
    }

    Some(FinancialFlag {
        name: "financial_discussion".to_string(),
        severity: if distinct >= 3 {
            FlagSeverity::High
        } else {
            FlagSeverity::Medium
        },
        weight: 10 * distinct,
    })
}
