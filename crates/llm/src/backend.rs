//! OpenRouter backend
//!
//! Chat-completions client over reqwest. One attempt per call: the
//! caller's recovery path is deterministic fallback, not retry, so a
//! failed or timed-out request is surfaced immediately.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::prompt::Message;
use crate::LlmError;

/// Backend configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Model identifier (OpenRouter routing name)
    pub model: String,
    /// Chat-completions endpoint
    pub endpoint: String,
    /// Bearer key; absent key fails fast with MissingCredential
    pub api_key: Option<String>,
    /// Request timeout; a timeout is treated like any transport failure
    pub timeout: Duration,
    /// Referer header advertised to OpenRouter
    pub referer: String,
    /// Application title advertised to OpenRouter
    pub title: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "google/gemini-2.0-flash-001".to_string(),
            endpoint: "https://openrouter.ai/api/v1/chat/completions".to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
            referer: "http://localhost:5001".to_string(),
            title: "CupidSecure".to_string(),
        }
    }
}

/// Text-generation backend seam
#[async_trait]
pub trait LlmBackend: Send + Sync {
    /// Generate a single completion for the given turns
    async fn generate(&self, messages: &[Message]) -> Result<String, LlmError>;

    /// Model identifier
    fn model_name(&self) -> &str;
}

/// OpenRouter chat-completions backend
#[derive(Clone)]
pub struct OpenRouterBackend {
    client: Client,
    config: LlmConfig,
}

impl OpenRouterBackend {
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn api_key(&self) -> Result<&str, LlmError> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(LlmError::MissingCredential)
    }
}

#[async_trait]
impl LlmBackend for OpenRouterBackend {
    async fn generate(&self, messages: &[Message]) -> Result<String, LlmError> {
        let api_key = self.api_key()?;

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages,
        };

        tracing::debug!(model = %self.config.model, turns = messages.len(), "Sending OpenRouter request");

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.title)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "OpenRouter returned non-success status");
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("Response contained no choices".to_string()))
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

// OpenRouter wire types

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: String,
    messages: &'a [Message],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = LlmConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.api_key.is_none());
        assert!(config.endpoint.contains("openrouter.ai"));
    }

    #[tokio::test]
    async fn test_missing_credential_fails_fast() {
        let backend = OpenRouterBackend::new(LlmConfig::default()).unwrap();
        let result = backend.generate(&[Message::user("hi")]).await;
        assert!(matches!(result, Err(LlmError::MissingCredential)));
    }

    #[test]
    fn test_empty_key_counts_as_missing() {
        let backend = OpenRouterBackend::new(LlmConfig {
            api_key: Some(String::new()),
            ..LlmConfig::default()
        })
        .unwrap();
        assert!(matches!(backend.api_key(), Err(LlmError::MissingCredential)));
    }

    #[test]
    fn test_response_parsing() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "{\"insights\": []}"}}]}"#,
        )
        .unwrap();
        assert_eq!(response.choices[0].message.content, "{\"insights\": []}");
    }

    #[test]
    fn test_request_serialization() {
        let messages = vec![Message::user("analyze this")];
        let request = ChatRequest {
            model: "google/gemini-2.0-flash-001".to_string(),
            messages: &messages,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "analyze this");
    }
}
