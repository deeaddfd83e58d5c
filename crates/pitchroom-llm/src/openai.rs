//! Hosted chat-completions generator
//!
//! Talks to an OpenAI-compatible chat-completions endpoint. The pipeline
//! always requests deterministic sampling (temperature 0) and a bounded
//! output-token budget; both arrive in the [`GenerationRequest`] so this
//! provider stays policy-free.
//!
//! # Features
//!
//! - Typed request/response bodies
//! - Configurable endpoint and model
//! - Retry with exponential backoff on transient failures
//! - Request timeout on the HTTP client

use crate::GenError;
use pitchroom_domain::traits::{GenerationRequest, TextGenerator};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Default HTTP timeout for generation requests (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default number of attempts before giving up
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Chat-completions API generator
pub struct OpenAiGenerator {
    endpoint: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
    max_retries: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl OpenAiGenerator {
    /// Create a new generator
    ///
    /// # Parameters
    ///
    /// - `endpoint`: API base URL (e.g. `https://api.openai.com/v1`)
    /// - `api_key`: bearer credential
    /// - `model`: model identifier (e.g. `gpt-4o-mini`)
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, GenError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| GenError::Other(format!("client build failed: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Create a generator against the default endpoint
    pub fn default_endpoint(
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, GenError> {
        Self::new(DEFAULT_ENDPOINT, api_key, model)
    }

    /// Set the maximum number of attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Generate a completion (async)
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint is unreachable, the credentials
    /// are rejected, the quota is exhausted after retries, or the response
    /// body carries no completion.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<String, GenError> {
        let url = format!("{}/chat/completions", self.endpoint.trim_end_matches('/'));

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let parsed: ChatResponse = response.json().await.map_err(|e| {
                            GenError::InvalidResponse(format!("body decode failed: {}", e))
                        })?;
                        return parsed
                            .choices
                            .into_iter()
                            .next()
                            .map(|c| c.message.content)
                            .ok_or_else(|| {
                                GenError::InvalidResponse("response had no choices".to_string())
                            });
                    } else if status == reqwest::StatusCode::UNAUTHORIZED {
                        let detail = response.text().await.unwrap_or_default();
                        return Err(GenError::Auth(detail));
                    } else if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(GenError::ModelNotAvailable(self.model.clone()));
                    } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(GenError::RateLimited);
                    } else {
                        let detail = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "unknown error".to_string());
                        last_error =
                            Some(GenError::Communication(format!("HTTP {}: {}", status, detail)));
                    }
                }
                Err(e) => {
                    last_error = Some(GenError::Communication(format!("request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, ...
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| GenError::Communication("max retries exceeded".to_string())))
    }
}

impl TextGenerator for OpenAiGenerator {
    type Error = GenError;

    fn generate(&self, request: &GenerationRequest) -> Result<String, Self::Error> {
        // Blocking wrapper for callers outside an async context
        tokio::runtime::Runtime::new()
            .map_err(|e| GenError::Other(format!("runtime build failed: {}", e)))?
            .block_on(async { self.generate(request).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest {
            system: "You are a test".to_string(),
            user: "ping".to_string(),
            temperature: 0.0,
            max_tokens: 16,
        }
    }

    #[test]
    fn test_generator_creation() {
        let generator = OpenAiGenerator::new("https://example.test/v1", "sk-test", "gpt-4o-mini")
            .unwrap();
        assert_eq!(generator.endpoint, "https://example.test/v1");
        assert_eq!(generator.model, "gpt-4o-mini");
        assert_eq!(generator.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_with_max_retries_floor_of_one() {
        let generator = OpenAiGenerator::new("https://example.test/v1", "sk-test", "m")
            .unwrap()
            .with_max_retries(0);
        assert_eq!(generator.max_retries, 1);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_communication_error() {
        let generator = OpenAiGenerator::new("http://127.0.0.1:9", "sk-test", "m")
            .unwrap()
            .with_max_retries(1);

        let result = generator.generate(&request()).await;
        assert!(matches!(result, Err(GenError::Communication(_))));
    }
}
