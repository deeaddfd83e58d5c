//! End-to-end intake run: document bytes to complete record

use crate::config::SummarizerConfig;
use crate::summarizer::{Summarizer, SummaryOutcome};
use pitchroom_domain::traits::TextGenerator;
use pitchroom_extract::{extract_text, ExtractError};
use tracing::info;

/// Runs one uploaded document through extraction and summarization
pub struct IntakePipeline<G>
where
    G: TextGenerator,
{
    summarizer: Summarizer<G>,
}

impl<G> IntakePipeline<G>
where
    G: TextGenerator + Send + Sync + 'static,
{
    /// Create a pipeline over a generation backend
    pub fn new(generator: G, config: SummarizerConfig) -> Self {
        Self {
            summarizer: Summarizer::new(generator, config),
        }
    }

    /// Run one document through the pipeline
    ///
    /// Extraction failures for structured formats propagate; everything past
    /// text extraction degrades instead of failing.
    pub async fn run(&self, bytes: &[u8], extension: &str) -> Result<SummaryOutcome, ExtractError> {
        let text = extract_text(bytes, extension)?;
        info!(chars = text.len(), extension, "document text extracted");
        Ok(self.summarizer.summarize(&text).await)
    }
}
