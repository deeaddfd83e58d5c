//! Prompt construction for field extraction

use crate::config::SummarizerConfig;
use pitchroom_domain::traits::GenerationRequest;
use pitchroom_domain::SchemaField;

const SYSTEM_INSTRUCTION: &str = "You are an investment analyst who extracts \
structured information from project pitch documents. You respond with a \
single JSON object and nothing else.";

/// Builds the extraction request for one pitch text
pub struct PromptBuilder {
    text: String,
}

impl PromptBuilder {
    /// Create a new prompt builder over the extracted pitch text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build the complete generation request
    ///
    /// The pitch text is truncated to `max_text_chars` characters; sampling
    /// is always deterministic.
    pub fn build(&self, config: &SummarizerConfig) -> GenerationRequest {
        let truncated: String = self.text.chars().take(config.max_text_chars).collect();

        let mut user = String::new();
        user.push_str(
            "Extract the following fields from the project pitch below. \
             Respond with a single JSON object whose keys are exactly these \
             field names:\n",
        );
        for field in SchemaField::ALL {
            user.push_str("- ");
            user.push_str(field.as_str());
            user.push('\n');
        }
        user.push_str(
            "\nRules: write monetary amounts and percentages as plain numbers \
             without symbols; write \"3 main SDGs targeted\" as a JSON array of \
             up to three goal names; use the string \"Unknown\" for any field \
             the pitch does not answer.\n",
        );
        user.push_str("\nPitch:\n---\n");
        user.push_str(&truncated);
        user.push_str("\n---\n");

        GenerationRequest {
            system: SYSTEM_INSTRUCTION.to_string(),
            user,
            temperature: 0.0,
            max_tokens: config.max_output_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_every_field() {
        let request = PromptBuilder::new("A pitch.").build(&SummarizerConfig::default());
        for field in SchemaField::ALL {
            assert!(
                request.user.contains(field.as_str()),
                "prompt missing field name: {}",
                field.as_str()
            );
        }
        assert!(request.user.contains("A pitch."));
    }

    #[test]
    fn test_deterministic_sampling() {
        let request = PromptBuilder::new("x").build(&SummarizerConfig::default());
        assert_eq!(request.temperature, 0.0);
        assert_eq!(request.max_tokens, 2000);
    }

    #[test]
    fn test_truncation_is_char_boundary_safe() {
        let mut config = SummarizerConfig::default();
        config.max_text_chars = 5;
        // Multi-byte characters must not be split mid-encoding
        let request = PromptBuilder::new("énergie solaire").build(&config);
        assert!(request.user.contains("énerg"));
        assert!(!request.user.contains("énergi"));
    }

    #[test]
    fn test_short_text_is_untouched() {
        let request = PromptBuilder::new("short").build(&SummarizerConfig::default());
        assert!(request.user.contains("short"));
    }
}
