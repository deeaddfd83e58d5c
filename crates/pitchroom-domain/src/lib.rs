//! Pitchroom Domain Layer
//!
//! This crate contains the core domain model for the project-intake pipeline.
//! It defines the fixed extraction schema, the typed record produced for each
//! submission, the controlled vocabularies used for reconciliation, the stage
//! state machines, and the trait interfaces that infrastructure crates
//! implement.
//!
//! ## Key Concepts
//!
//! - **Schema Field**: one named slot of the fixed 20-field extraction output
//! - **Extraction Record**: the complete field → value structure for one
//!   submission; every field is present after defaulting, absent values are
//!   the `Unknown` sentinel
//! - **Controlled Vocabulary**: a fixed set of canonical category labels
//!   (SDGs, maturity stages, sectors, regions) that free-text model output
//!   is reconciled against
//! - **Pipeline Stage**: the forward-only state machine a submission's
//!   pipeline run walks through
//!
//! ## Architecture
//!
//! Infrastructure implementations (document extraction, text generation,
//! filesystem storage) live in other crates and plug in through the traits
//! defined in [`traits`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod record;
pub mod schema;
pub mod stage;
pub mod submission;
pub mod traits;
pub mod vocab;

// Re-exports for convenience
pub use record::{ExtractionRecord, FieldValue, UNKNOWN_SENTINEL};
pub use schema::{SchemaField, ValueShape};
pub use stage::{PipelineStage, ReviewStage};
pub use submission::{SavedSubmission, StoredDocument, SubmissionMeta};
pub use vocab::Vocabulary;
