//! The Field Summarizer
//!
//! Turns extracted pitch text into a complete extraction record: prompt
//! construction, one bounded generation call, lenient JSON parsing,
//! vocabulary reconciliation and defaulting. A backend failure or timeout
//! degrades the run to an all-sentinel record; it never aborts intake.

use crate::config::SummarizerConfig;
use crate::defaults::fill_missing;
use crate::matcher::VocabMatcher;
use crate::prompt::PromptBuilder;
use crate::repair::repair_parse;
use pitchroom_domain::traits::{GenerationRequest, TextGenerator};
use pitchroom_domain::vocab::{MATURITY_STAGES, SDGS};
use pitchroom_domain::{
    ExtractionRecord, FieldValue, PipelineStage, SchemaField, ValueShape,
};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Result of one summarization run
///
/// The run always completes: `record` is complete (every field present) and
/// `stage` is terminal. When the backend failed, `model_error` carries the
/// message for display and the record is all-sentinel.
#[derive(Debug, Clone)]
pub struct SummaryOutcome {
    /// The complete extraction record
    pub record: ExtractionRecord,
    /// Terminal pipeline stage
    pub stage: PipelineStage,
    /// Backend error message, when the run degraded
    pub model_error: Option<String>,
}

/// The Field Summarizer
pub struct Summarizer<G>
where
    G: TextGenerator,
{
    generator: Arc<G>,
    config: SummarizerConfig,
}

impl<G> Summarizer<G>
where
    G: TextGenerator + Send + Sync + 'static,
{
    /// Create a new summarizer over a generation backend
    pub fn new(generator: G, config: SummarizerConfig) -> Self {
        Self {
            generator: Arc::new(generator),
            config,
        }
    }

    /// Summarize one pitch text into a complete record
    pub async fn summarize(&self, text: &str) -> SummaryOutcome {
        let mut stage = PipelineStage::TextExtracted;
        let request = PromptBuilder::new(text).build(&self.config);

        let response = timeout(self.config.request_timeout(), self.call_generator(request)).await;
        stage = stage.advance();
        debug!(stage = stage.as_str(), "generation backend returned");

        let mut model_error = None;
        let raw = match response {
            Ok(Ok(raw)) => Some(raw),
            Ok(Err(e)) => {
                warn!("generation failed, degrading to sentinel record: {}", e);
                model_error = Some(e);
                None
            }
            Err(_) => {
                let message = format!(
                    "generation timed out after {}s",
                    self.config.request_timeout_secs
                );
                warn!("{}, degrading to sentinel record", message);
                model_error = Some(message);
                None
            }
        };

        let record = match raw {
            Some(raw) => {
                let object = repair_parse(&raw);
                stage = stage.advance();
                debug!(stage = stage.as_str(), keys = object.len(), "response parsed");

                let mut record = ExtractionRecord::from_json_object(&object);
                self.reconcile(&mut record);
                stage = stage.advance();
                debug!(stage = stage.as_str(), "vocabularies reconciled");
                record
            }
            None => ExtractionRecord::new(),
        };

        let record = fill_missing(record);
        stage = PipelineStage::Final;
        info!(
            fields = record.iter().filter(|(_, v)| !v.is_unknown()).count(),
            degraded = model_error.is_some(),
            "summarization complete"
        );

        SummaryOutcome {
            record,
            stage,
            model_error,
        }
    }

    async fn call_generator(&self, request: GenerationRequest) -> Result<String, String> {
        let generator = Arc::clone(&self.generator);
        tokio::task::spawn_blocking(move || {
            generator.generate(&request).map_err(|e| e.to_string())
        })
        .await
        .map_err(|e| format!("Task join error: {}", e))?
    }

    /// Reconcile categorical fields against their vocabularies and coerce
    /// numeric fields the model returned as text
    fn reconcile(&self, record: &mut ExtractionRecord) {
        let sdg_matcher = VocabMatcher::new(
            SDGS,
            self.config.sdg_threshold,
            self.config.sdg_max_matches,
        );
        if let Some(value) = record.get(SchemaField::SdgsTargeted) {
            let candidates: Vec<String> = match value {
                FieldValue::List(items) => items.clone(),
                FieldValue::Text(s) => s
                    .split(';')
                    .map(|part| part.trim().to_string())
                    .filter(|part| !part.is_empty())
                    .collect(),
                _ => Vec::new(),
            };
            if !candidates.is_empty() {
                let matched = sdg_matcher.match_candidates(&candidates);
                let value = if matched.is_empty() {
                    FieldValue::Unknown
                } else {
                    FieldValue::List(matched)
                };
                record.set(SchemaField::SdgsTargeted, value);
            }
        }

        let maturity_matcher =
            VocabMatcher::new(MATURITY_STAGES, self.config.sdg_threshold, 1);
        if let Some(FieldValue::Text(s)) = record.get(SchemaField::MaturityStage).cloned() {
            // Only canonicalize; a phrase that matches no stage stays as the
            // model wrote it
            if let Some(label) = maturity_matcher.match_one(&s) {
                record.set(SchemaField::MaturityStage, FieldValue::Text(label));
            }
        }

        for field in SchemaField::ALL {
            if matches!(
                field.shape(),
                ValueShape::Numeric | ValueShape::Percentage | ValueShape::Year
            ) {
                if let Some(FieldValue::Text(s)) = record.get(field).cloned() {
                    if let Some(n) = coerce_number(&s) {
                        record.set(field, FieldValue::Number(n));
                    }
                }
            }
        }
    }
}

/// Parse a number out of text that may carry currency or percent adornment
fn coerce_number(s: &str) -> Option<f64> {
    let cleaned: String = s
        .chars()
        .filter(|c| !matches!(c, ',' | '$' | '%') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitchroom_llm::MockGenerator;

    fn summarizer(generator: MockGenerator) -> Summarizer<MockGenerator> {
        Summarizer::new(generator, SummarizerConfig::default())
    }

    #[tokio::test]
    async fn test_complete_response_yields_complete_record() {
        let response = r#"{
            "Project Name": "Acme Solar",
            "Maturity stage": "growth",
            "Last 12 months revenues (USD)": "1,250,000",
            "Expected IRR (%)": "12.5%",
            "3 main SDGs targeted": ["clean energy", "ending poverty"]
        }"#;
        let outcome = summarizer(MockGenerator::new(response)).summarize("pitch").await;

        assert!(outcome.stage.is_final());
        assert!(outcome.model_error.is_none());
        assert!(outcome.record.is_complete());
        assert_eq!(
            outcome.record.get(SchemaField::ProjectName),
            Some(&FieldValue::Text("Acme Solar".to_string()))
        );
        assert_eq!(
            outcome.record.get(SchemaField::MaturityStage),
            Some(&FieldValue::Text("Growth".to_string()))
        );
        assert_eq!(
            outcome.record.get(SchemaField::Revenues),
            Some(&FieldValue::Number(1_250_000.0))
        );
        assert_eq!(
            outcome.record.get(SchemaField::ExpectedIrr),
            Some(&FieldValue::Number(12.5))
        );
        assert_eq!(
            outcome.record.get(SchemaField::SdgsTargeted),
            Some(&FieldValue::List(vec![
                "Affordable and clean energy (SDG 7)".to_string(),
                "No poverty (SDG 1)".to_string(),
            ]))
        );
        // Fields the model skipped carry the sentinel
        assert_eq!(outcome.record.get(SchemaField::Problem), Some(&FieldValue::Unknown));
    }

    #[tokio::test]
    async fn test_chatty_response_is_salvaged() {
        let generator =
            MockGenerator::new("Here is the JSON: {\"Project Name\": \"Acme\"} Thanks!");
        let outcome = summarizer(generator).summarize("pitch").await;

        assert_eq!(
            outcome.record.get(SchemaField::ProjectName),
            Some(&FieldValue::Text("Acme".to_string()))
        );
        let unknown = outcome
            .record
            .iter()
            .filter(|(_, v)| v.is_unknown())
            .count();
        assert_eq!(unknown, 19);
    }

    #[tokio::test]
    async fn test_backend_failure_degrades_to_sentinel_record() {
        let outcome = summarizer(MockGenerator::failing()).summarize("pitch").await;

        assert!(outcome.stage.is_final());
        assert!(outcome.model_error.is_some());
        assert!(outcome.record.is_complete());
        assert!(outcome.record.iter().all(|(_, v)| v.is_unknown()));
    }

    #[tokio::test]
    async fn test_timeout_degrades_to_sentinel_record() {
        struct SlowGenerator;
        impl TextGenerator for SlowGenerator {
            type Error = String;
            fn generate(&self, _request: &GenerationRequest) -> Result<String, String> {
                std::thread::sleep(std::time::Duration::from_millis(1500));
                Ok("{}".to_string())
            }
        }

        let mut config = SummarizerConfig::default();
        config.request_timeout_secs = 1;
        let summarizer = Summarizer::new(SlowGenerator, config);
        let outcome = summarizer.summarize("pitch").await;

        assert!(outcome.stage.is_final());
        assert!(outcome.model_error.as_deref().unwrap().contains("timed out"));
        assert!(outcome.record.iter().all(|(_, v)| v.is_unknown()));
    }

    #[tokio::test]
    async fn test_garbage_response_yields_sentinel_record_without_error() {
        let outcome = summarizer(MockGenerator::new("not json at all"))
            .summarize("pitch")
            .await;

        assert!(outcome.model_error.is_none());
        assert!(outcome.record.iter().all(|(_, v)| v.is_unknown()));
    }

    #[tokio::test]
    async fn test_sdgs_as_semicolon_text() {
        let response = r#"{"3 main SDGs targeted": "clean energy; ending poverty"}"#;
        let outcome = summarizer(MockGenerator::new(response)).summarize("pitch").await;

        assert_eq!(
            outcome.record.get(SchemaField::SdgsTargeted),
            Some(&FieldValue::List(vec![
                "Affordable and clean energy (SDG 7)".to_string(),
                "No poverty (SDG 1)".to_string(),
            ]))
        );
    }

    #[tokio::test]
    async fn test_unmatchable_sdgs_become_unknown() {
        let response = r#"{"3 main SDGs targeted": ["qqqq", "xxxx"]}"#;
        let outcome = summarizer(MockGenerator::new(response)).summarize("pitch").await;

        assert_eq!(
            outcome.record.get(SchemaField::SdgsTargeted),
            Some(&FieldValue::Unknown)
        );
    }

    #[tokio::test]
    async fn test_prompt_carries_pitch_and_field_names() {
        let generator = MockGenerator::new("{}");
        let summarizer = summarizer(generator.clone());
        summarizer.summarize("solar microgrids in Kenya").await;

        let request = generator.last_request().unwrap();
        assert!(request.user.contains("solar microgrids in Kenya"));
        assert!(request.user.contains("Project Name"));
        assert_eq!(request.temperature, 0.0);
        assert_eq!(generator.call_count(), 1);
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("1,250,000"), Some(1_250_000.0));
        assert_eq!(coerce_number("$2.5"), Some(2.5));
        assert_eq!(coerce_number("12.5%"), Some(12.5));
        assert_eq!(coerce_number(" 2027 "), Some(2027.0));
        assert_eq!(coerce_number("about 2 million"), None);
        assert_eq!(coerce_number(""), None);
    }
}
