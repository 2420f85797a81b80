//! Configuration management for the CupidSecure service
//!
//! Supports loading configuration from:
//! - TOML/YAML files
//! - Environment variables (CUPIDSECURE_ prefix)
//!
//! Also owns the process-wide scam pattern catalog, which is populated
//! once at startup and read-only thereafter.

pub mod catalog;
pub mod settings;

pub use catalog::{catalog, init_catalog, CatalogManager, PatternCatalog};
pub use settings::{load_settings, LlmSettings, ServerConfig, Settings};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
