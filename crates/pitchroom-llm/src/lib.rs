//! Pitchroom Text-Generation Layer
//!
//! Implementations of the `TextGenerator` trait from `pitchroom-domain`.
//! The pipeline only needs "request in, completion text out"; everything
//! backend-specific stays behind that seam.
//!
//! # Generators
//!
//! - `MockGenerator`: deterministic mock for testing
//! - `OpenAiGenerator`: hosted chat-completions API
//!
//! # Examples
//!
//! ```
//! use pitchroom_llm::MockGenerator;
//! use pitchroom_domain::traits::{GenerationRequest, TextGenerator};
//!
//! let generator = MockGenerator::new("{\"Project Name\": \"Acme\"}");
//! let request = GenerationRequest {
//!     system: "extract fields".to_string(),
//!     user: "pitch text".to_string(),
//!     temperature: 0.0,
//!     max_tokens: 2000,
//! };
//! let response = generator.generate(&request).unwrap();
//! assert!(response.contains("Acme"));
//! ```

#![warn(missing_docs)]

pub mod openai;

use pitchroom_domain::traits::{GenerationRequest, TextGenerator};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openai::OpenAiGenerator;

/// Errors that can occur during text generation
#[derive(Error, Debug)]
pub enum GenError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// The backend returned something that could not be read as a completion
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit or quota exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Authentication failure (missing or rejected credentials)
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Requested model is not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("Generation error: {0}")]
    Other(String),
}

/// Mock generator for deterministic testing
///
/// Returns pre-configured responses, keyed by the request's user content,
/// without any network calls. Also records the last request so tests can
/// assert on prompt construction.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
    last_request: Arc<Mutex<Option<GenerationRequest>>>,
    always_fail: bool,
}

impl MockGenerator {
    /// Create a mock with a fixed response for all requests
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
            last_request: Arc::new(Mutex::new(None)),
            always_fail: false,
        }
    }

    /// Create a mock that fails every request with a communication error
    pub fn failing() -> Self {
        let mut mock = Self::new("");
        mock.always_fail = true;
        mock
    }

    /// Add a specific response for a given user-content string
    pub fn add_response(&mut self, user: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(user.into(), response.into());
    }

    /// Number of times `generate` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl TextGenerator for MockGenerator {
    type Error = GenError;

    fn generate(&self, request: &GenerationRequest) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;
        *self.last_request.lock().unwrap() = Some(request.clone());

        if self.always_fail {
            return Err(GenError::Communication("mock failure".to_string()));
        }

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(&request.user) {
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }
}
