//! Shared error types

use thiserror::Error;

/// Core errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("LLM error: {0}")]
    Llm(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
