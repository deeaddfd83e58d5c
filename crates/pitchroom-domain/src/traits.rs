//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates.

use crate::record::ExtractionRecord;
use crate::stage::ReviewStage;
use crate::submission::{SavedSubmission, StoredDocument, SubmissionMeta};

/// A single text-generation request
///
/// The pipeline is written against this narrow capability so the backend
/// (hosted API, local model, test mock) is swappable without touching it.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// System/role instruction
    pub system: String,
    /// User content (the pitch text)
    pub user: String,
    /// Sampling temperature; the pipeline always asks for 0.0
    pub temperature: f32,
    /// Output token budget
    pub max_tokens: u32,
}

/// Trait for text-generation backends
///
/// Implemented by the infrastructure layer (pitchroom-llm)
pub trait TextGenerator {
    /// Error type for generation operations
    type Error: std::fmt::Display;

    /// Generate a text completion for the request
    fn generate(&self, request: &GenerationRequest) -> Result<String, Self::Error>;
}

/// Trait for persisting submissions
///
/// Implemented by the infrastructure layer (pitchroom-store)
pub trait SubmissionStore {
    /// Error type for store operations
    type Error;

    /// Persist a new submission: documents, metadata and the final record
    fn save(
        &self,
        meta: &SubmissionMeta,
        documents: &[StoredDocument],
        record: &ExtractionRecord,
    ) -> Result<SavedSubmission, Self::Error>;

    /// Replace an existing submission's metadata and record wholesale
    fn update(
        &self,
        id: &str,
        meta: &SubmissionMeta,
        record: &ExtractionRecord,
    ) -> Result<(), Self::Error>;

    /// Check an edit PIN against a submission's stored credential
    fn verify_pin(&self, id: &str, pin: &str) -> Result<bool, Self::Error>;

    /// Set the review stage of a submission
    fn set_status(&self, id: &str, stage: ReviewStage) -> Result<(), Self::Error>;
}

/// Trait for outbound notifications on new submissions
///
/// E-mail delivery is an external collaborator; the default implementation
/// just logs. Notification failures must never block intake.
pub trait Notifier {
    /// Error type for notification operations
    type Error;

    /// Send a notification with the given subject and body
    fn notify(&self, subject: &str, body: &str) -> Result<(), Self::Error>;
}
