//! Pitchroom Extraction Pipeline
//!
//! Converts extracted pitch text into a complete, typed extraction record
//! through one bounded model call.
//!
//! # Architecture
//!
//! ```text
//! Bytes → Text Extractor → Summarizer → Repair Parser → Vocab Matcher
//!       → Defaulting → complete ExtractionRecord
//! ```
//!
//! Every run completes. A backend failure, timeout or unparseable response
//! degrades the record to all-sentinel values instead of aborting the
//! enclosing submission.
//!
//! # Example Usage
//!
//! ```
//! use pitchroom_pipeline::{IntakePipeline, SummarizerConfig};
//! use pitchroom_llm::MockGenerator;
//!
//! # async fn example() {
//! let generator = MockGenerator::new("{\"Project Name\": \"Acme\"}");
//! let pipeline = IntakePipeline::new(generator, SummarizerConfig::default());
//! let outcome = pipeline.run(b"raw bytes", "txt").await.unwrap();
//! assert!(outcome.record.is_complete());
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod defaults;
pub mod matcher;
pub mod pipeline;
pub mod prompt;
pub mod repair;
pub mod summarizer;

pub use config::SummarizerConfig;
pub use defaults::fill_missing;
pub use matcher::VocabMatcher;
pub use pipeline::IntakePipeline;
pub use prompt::PromptBuilder;
pub use repair::repair_parse;
pub use summarizer::{Summarizer, SummaryOutcome};
