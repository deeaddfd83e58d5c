//! Configuration for the Field Summarizer

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Field Summarizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Maximum pitch text length handed to the model (characters)
    pub max_text_chars: usize,

    /// Maximum time for a single generation call (seconds)
    pub request_timeout_secs: u64,

    /// Output token budget passed to the backend
    pub max_output_tokens: u32,

    /// Minimum similarity ratio for a vocabulary match
    pub sdg_threshold: f64,

    /// Maximum number of SDG labels kept per record
    pub sdg_max_matches: usize,
}

impl SummarizerConfig {
    /// Get the generation timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_chars == 0 {
            return Err("max_text_chars must be greater than 0".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        if self.max_output_tokens == 0 {
            return Err("max_output_tokens must be greater than 0".to_string());
        }
        if !(self.sdg_threshold > 0.0 && self.sdg_threshold <= 1.0) {
            return Err("sdg_threshold must be in (0, 1]".to_string());
        }
        if self.sdg_max_matches == 0 {
            return Err("sdg_max_matches must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Parse a configuration from TOML
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        let config: Self =
            toml::from_str(content).map_err(|e| format!("Failed to parse config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to TOML
    pub fn to_toml_string(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {}", e))
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            max_text_chars: 15_000,
            request_timeout_secs: 120,
            max_output_tokens: 2_000,
            sdg_threshold: 0.6,
            sdg_max_matches: 3,
        }
    }
}
