//! Service settings
//!
//! Layered loading: optional config file, then environment variables
//! with the CUPIDSECURE_ prefix (double underscore as separator, e.g.
//! CUPIDSECURE_SERVER__PORT=8080). The OpenRouter API key additionally
//! falls back to the conventional OPENROUTER_API_KEY variable.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Top-level service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmSettings,
    /// Path to the scam pattern catalog JSON file
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
}

fn default_catalog_path() -> String {
    "data/scam_patterns.json".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            llm: LlmSettings::default(),
            catalog_path: default_catalog_path(),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: true,
            cors_origins: Vec::new(),
        }
    }
}

/// External text-generation settings (OpenRouter)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Bearer key; absence routes every analysis to fallback insights
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    "google/gemini-2.0-flash-001".to_string()
}

fn default_endpoint() -> String {
    "https://openrouter.ai/api/v1/chat/completions".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Load settings from an optional file plus the environment.
pub fn load_settings(path: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(config::File::with_name(path).required(false));
    }

    let loaded = builder
        .add_source(
            config::Environment::with_prefix("CUPIDSECURE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let mut settings: Settings = loaded.try_deserialize()?;

    if settings.llm.api_key.is_none() {
        settings.llm.api_key = std::env::var("OPENROUTER_API_KEY").ok();
    }

    if settings.llm.api_key.is_none() {
        tracing::warn!("No OpenRouter API key configured; AI enrichment will use fallback only");
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 5001);
        assert!(settings.server.cors_enabled);
        assert_eq!(settings.llm.timeout_secs, 30);
        assert_eq!(settings.catalog_path, "data/scam_patterns.json");
    }

    #[test]
    fn test_load_without_file() {
        let settings = load_settings(None).unwrap();
        assert_eq!(settings.llm.endpoint, default_endpoint());
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "catalog_path = \"custom/patterns.json\"\n[server]\nport = 9000"
        )
        .unwrap();
        let path = file.path().to_str().unwrap().trim_end_matches(".toml").to_string();

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.catalog_path, "custom/patterns.json");
    }
}
