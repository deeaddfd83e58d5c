//! Pitchroom Storage Layer
//!
//! Implements the `SubmissionStore` trait on plain files. Each submission
//! lives in its own timestamped folder under the store root:
//!
//! ```text
//! <root>/<Project>_<YYYYmmdd_HHMMSS>/
//!     <uploaded documents>
//!     info.txt            submitter metadata, one "Key: value" line each
//!     summary.json        the extraction record
//!     credentials.json    the 4-digit edit PIN
//!     status.json         the review stage
//! ```
//!
//! Records are replaced whole on update, never patched field by field.
//! Durability is whatever the filesystem gives; simultaneous writers are
//! out of scope.
//!
//! # Examples
//!
//! ```no_run
//! use pitchroom_store::FsStore;
//!
//! let store = FsStore::new("./submissions").unwrap();
//! let submissions = store.list().unwrap();
//! ```

#![warn(missing_docs)]

pub mod export;

use chrono::Local;
use pitchroom_domain::traits::SubmissionStore;
use pitchroom_domain::{
    ExtractionRecord, ReviewStage, SavedSubmission, StoredDocument, SubmissionMeta,
};
use rand::Rng;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use export::export_csv;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Submission not found
    #[error("Submission not found: {0}")]
    NotFound(String),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// PIN did not match
    #[error("Invalid PIN")]
    InvalidPin,
}

/// A submission as read back from the store
#[derive(Debug, Clone)]
pub struct Submission {
    /// Folder name, also the submission identifier
    pub id: String,
    /// Submitter metadata
    pub meta: SubmissionMeta,
    /// The extraction record
    pub record: ExtractionRecord,
    /// Current review stage
    pub status: ReviewStage,
}

/// Filesystem-backed implementation of `SubmissionStore`
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Open a store rooted at the given directory, creating it if absent
    pub fn new(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The store's root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn submission_dir(&self, id: &str) -> Result<PathBuf, StoreError> {
        // Identifiers are folder names; reject anything that could escape
        // the root
        if id.is_empty() || id.contains('/') || id.contains('\\') || id.contains("..") {
            return Err(StoreError::InvalidData(format!("Bad submission id: {}", id)));
        }
        Ok(self.root.join(id))
    }

    fn existing_dir(&self, id: &str) -> Result<PathBuf, StoreError> {
        let dir = self.submission_dir(id)?;
        if !dir.is_dir() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(dir)
    }

    fn write_info(dir: &Path, meta: &SubmissionMeta) -> Result<(), StoreError> {
        let mut info = String::new();
        info.push_str(&format!("Project: {}\n", meta.project));
        info.push_str(&format!("Email: {}\n", meta.email));
        info.push_str(&format!("Country HQ: {}\n", meta.country_hq));
        info.push_str(&format!("Sector: {}\n", meta.sector));
        if let Some(date) = &meta.incorporation_date {
            info.push_str(&format!("Incorporation date: {}\n", date));
        }
        info.push_str("NDA: Accepted\n");
        fs::write(dir.join("info.txt"), info)?;
        Ok(())
    }

    fn read_info(dir: &Path) -> Result<SubmissionMeta, StoreError> {
        let content = fs::read_to_string(dir.join("info.txt"))?;
        let mut meta = SubmissionMeta::default();
        for line in content.lines() {
            let Some((key, value)) = line.split_once(": ") else {
                continue;
            };
            match key {
                "Project" => meta.project = value.to_string(),
                "Email" => meta.email = value.to_string(),
                "Country HQ" => meta.country_hq = value.to_string(),
                "Sector" => meta.sector = value.to_string(),
                "Incorporation date" => meta.incorporation_date = Some(value.to_string()),
                _ => {}
            }
        }
        Ok(meta)
    }

    fn write_record(dir: &Path, record: &ExtractionRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&Value::Object(record.to_json_object()))
            .map_err(|e| StoreError::InvalidData(e.to_string()))?;
        fs::write(dir.join("summary.json"), json)?;
        Ok(())
    }

    fn read_record(dir: &Path) -> Result<ExtractionRecord, StoreError> {
        let content = fs::read_to_string(dir.join("summary.json"))?;
        let value: Value = serde_json::from_str(&content)
            .map_err(|e| StoreError::InvalidData(format!("summary.json: {}", e)))?;
        let object = value
            .as_object()
            .ok_or_else(|| StoreError::InvalidData("summary.json is not an object".to_string()))?;
        Ok(ExtractionRecord::from_json_object(object))
    }

    /// Read the review stage, defaulting to `Identified` when unset
    pub fn status(&self, id: &str) -> Result<ReviewStage, StoreError> {
        let dir = self.existing_dir(id)?;
        let path = dir.join("status.json");
        if !path.is_file() {
            return Ok(ReviewStage::default());
        }
        let content = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content)
            .map_err(|e| StoreError::InvalidData(format!("status.json: {}", e)))?;
        let name = value
            .get("status")
            .and_then(Value::as_str)
            .ok_or_else(|| StoreError::InvalidData("status.json has no status".to_string()))?;
        ReviewStage::parse(name)
            .ok_or_else(|| StoreError::InvalidData(format!("Unknown review stage: {}", name)))
    }

    /// Load one submission
    pub fn load(&self, id: &str) -> Result<Submission, StoreError> {
        let dir = self.existing_dir(id)?;
        Ok(Submission {
            id: id.to_string(),
            meta: Self::read_info(&dir)?,
            record: Self::read_record(&dir)?,
            status: self.status(id)?,
        })
    }

    /// Load every submission, ordered by identifier
    ///
    /// Folders missing their metadata or record files are skipped rather
    /// than failing the whole listing.
    pub fn list(&self) -> Result<Vec<Submission>, StoreError> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                if let Ok(name) = entry.file_name().into_string() {
                    ids.push(name);
                }
            }
        }
        ids.sort();

        let mut submissions = Vec::new();
        for id in ids {
            if let Ok(submission) = self.load(&id) {
                submissions.push(submission);
            }
        }
        Ok(submissions)
    }
}

impl SubmissionStore for FsStore {
    type Error = StoreError;

    fn save(
        &self,
        meta: &SubmissionMeta,
        documents: &[StoredDocument],
        record: &ExtractionRecord,
    ) -> Result<SavedSubmission, Self::Error> {
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let id = format!("{}_{}", meta.project.replace(' ', "_"), stamp);
        let dir = self.submission_dir(&id)?;
        fs::create_dir_all(&dir)?;

        for document in documents {
            // Uploaded file names are kept verbatim apart from path
            // separators
            let name = document.name.replace(['/', '\\'], "_");
            fs::write(dir.join(name), &document.bytes)?;
        }

        Self::write_info(&dir, meta)?;
        Self::write_record(&dir, record)?;

        let pin = format!("{:04}", rand::thread_rng().gen_range(0..10_000));
        let credentials = serde_json::json!({ "pin": pin });
        fs::write(dir.join("credentials.json"), credentials.to_string())?;

        let status = serde_json::json!({ "status": ReviewStage::default().as_str() });
        fs::write(dir.join("status.json"), status.to_string())?;

        Ok(SavedSubmission { id, pin })
    }

    fn update(
        &self,
        id: &str,
        meta: &SubmissionMeta,
        record: &ExtractionRecord,
    ) -> Result<(), Self::Error> {
        let dir = self.existing_dir(id)?;
        Self::write_info(&dir, meta)?;
        Self::write_record(&dir, record)?;
        Ok(())
    }

    fn verify_pin(&self, id: &str, pin: &str) -> Result<bool, Self::Error> {
        let dir = self.existing_dir(id)?;
        let content = fs::read_to_string(dir.join("credentials.json"))?;
        let value: Value = serde_json::from_str(&content)
            .map_err(|e| StoreError::InvalidData(format!("credentials.json: {}", e)))?;
        let stored = value
            .get("pin")
            .and_then(Value::as_str)
            .ok_or_else(|| StoreError::InvalidData("credentials.json has no pin".to_string()))?;
        Ok(stored == pin)
    }

    fn set_status(&self, id: &str, stage: ReviewStage) -> Result<(), Self::Error> {
        let dir = self.existing_dir(id)?;
        let status = serde_json::json!({ "status": stage.as_str() });
        fs::write(dir.join("status.json"), status.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitchroom_domain::{FieldValue, SchemaField};
    use tempfile::TempDir;

    fn meta() -> SubmissionMeta {
        SubmissionMeta {
            project: "Acme Solar".to_string(),
            email: "founder@acme.test".to_string(),
            country_hq: "Kenya".to_string(),
            sector: "Energy".to_string(),
            incorporation_date: Some("2021-03-01".to_string()),
        }
    }

    fn record() -> ExtractionRecord {
        let mut record = ExtractionRecord::all_unknown();
        record.set(SchemaField::ProjectName, FieldValue::Text("Acme Solar".to_string()));
        record.set(SchemaField::Revenues, FieldValue::Number(250_000.0));
        record
    }

    fn store() -> (TempDir, FsStore) {
        let dir = TempDir::new().unwrap();
        let store = FsStore::new(dir.path().join("submissions")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_save_creates_folder_layout() {
        let (_tmp, store) = store();
        let documents = vec![StoredDocument {
            name: "deck.pdf".to_string(),
            bytes: vec![1, 2, 3],
        }];
        let saved = store.save(&meta(), &documents, &record()).unwrap();

        assert!(saved.id.starts_with("Acme_Solar_"));
        assert_eq!(saved.pin.len(), 4);
        assert!(saved.pin.chars().all(|c| c.is_ascii_digit()));

        let dir = store.root().join(&saved.id);
        assert!(dir.join("deck.pdf").is_file());
        assert!(dir.join("info.txt").is_file());
        assert!(dir.join("summary.json").is_file());
        assert!(dir.join("credentials.json").is_file());
        assert!(dir.join("status.json").is_file());
    }

    #[test]
    fn test_save_load_round_trip() {
        let (_tmp, store) = store();
        let saved = store.save(&meta(), &[], &record()).unwrap();
        let loaded = store.load(&saved.id).unwrap();

        assert_eq!(loaded.meta, meta());
        assert_eq!(loaded.record, record());
        assert_eq!(loaded.status, ReviewStage::Identified);
    }

    #[test]
    fn test_verify_pin() {
        let (_tmp, store) = store();
        let saved = store.save(&meta(), &[], &record()).unwrap();

        assert!(store.verify_pin(&saved.id, &saved.pin).unwrap());
        assert!(!store.verify_pin(&saved.id, "wrong").unwrap());
    }

    #[test]
    fn test_update_replaces_record_whole() {
        let (_tmp, store) = store();
        let saved = store.save(&meta(), &[], &record()).unwrap();

        let mut updated_meta = meta();
        updated_meta.country_hq = "Uganda".to_string();
        let mut updated_record = ExtractionRecord::all_unknown();
        updated_record.set(SchemaField::Problem, FieldValue::Text("Grid gaps".to_string()));
        store.update(&saved.id, &updated_meta, &updated_record).unwrap();

        let loaded = store.load(&saved.id).unwrap();
        assert_eq!(loaded.meta.country_hq, "Uganda");
        assert_eq!(loaded.record, updated_record);
        // The old revenue figure must be gone
        assert_eq!(loaded.record.get(SchemaField::Revenues), Some(&FieldValue::Unknown));
    }

    #[test]
    fn test_set_status() {
        let (_tmp, store) = store();
        let saved = store.save(&meta(), &[], &record()).unwrap();

        store.set_status(&saved.id, ReviewStage::IntroCall).unwrap();
        assert_eq!(store.status(&saved.id).unwrap(), ReviewStage::IntroCall);
    }

    #[test]
    fn test_status_defaults_to_identified() {
        let (_tmp, store) = store();
        let saved = store.save(&meta(), &[], &record()).unwrap();
        std::fs::remove_file(store.root().join(&saved.id).join("status.json")).unwrap();

        assert_eq!(store.status(&saved.id).unwrap(), ReviewStage::default());
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let (_tmp, store) = store();
        assert!(matches!(
            store.load("missing"),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.set_status("missing", ReviewStage::Raised),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_traversal_id_is_rejected() {
        let (_tmp, store) = store();
        assert!(matches!(
            store.load("../outside"),
            Err(StoreError::InvalidData(_))
        ));
    }

    #[test]
    fn test_list_skips_broken_folders() {
        let (_tmp, store) = store();
        store.save(&meta(), &[], &record()).unwrap();
        std::fs::create_dir(store.root().join("Broken_20200101_000000")).unwrap();

        let submissions = store.list().unwrap();
        assert_eq!(submissions.len(), 1);
        assert!(submissions[0].id.starts_with("Acme_Solar_"));
    }

    #[test]
    fn test_document_name_is_sanitized() {
        let (_tmp, store) = store();
        let documents = vec![StoredDocument {
            name: "../evil.pdf".to_string(),
            bytes: vec![0],
        }];
        let saved = store.save(&meta(), &documents, &record()).unwrap();
        assert!(store.root().join(&saved.id).join(".._evil.pdf").is_file());
    }
}
