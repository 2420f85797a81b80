//! Deterministic rule-based risk analysis
//!
//! Pure functions over explicit inputs: pattern detection against the
//! catalog, financial keyword flagging, weighted score aggregation, and
//! the independent financial-request calculator. No shared mutable
//! state; every call produces a fresh result set.

pub mod aggregate;
pub mod analysis;
pub mod detector;
pub mod financial;

pub use aggregate::aggregate;
pub use analysis::{analyze_messages, Detection};
pub use detector::{detect_financial_flag, detect_patterns, FINANCIAL_KEYWORDS};
pub use financial::assess_financial_request;

use thiserror::Error;

/// Engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<EngineError> for cupidsecure_core::Error {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidInput(msg) => cupidsecure_core::Error::InvalidInput(msg),
        }
    }
}
