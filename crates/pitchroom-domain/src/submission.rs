//! Submission metadata types shared between the pipeline and storage

use serde::{Deserialize, Serialize};

/// Submitter-provided metadata accompanying an upload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionMeta {
    /// Registered project name
    pub project: String,
    /// Contact e-mail
    pub email: String,
    /// Headquarters country
    pub country_hq: String,
    /// Primary sector / theme
    pub sector: String,
    /// Date of incorporation, free-form
    pub incorporation_date: Option<String>,
}

/// One uploaded document: raw bytes plus the declared filename
///
/// Ephemeral; consumed once by text extraction and then only kept on disk.
#[derive(Debug, Clone)]
pub struct StoredDocument {
    /// Declared filename, including extension
    pub name: String,
    /// Raw content
    pub bytes: Vec<u8>,
}

impl StoredDocument {
    /// Lower-cased file extension, without the dot
    pub fn extension(&self) -> String {
        std::path::Path::new(&self.name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    }
}

/// Identifier and edit credential handed back after a save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedSubmission {
    /// Submission identifier (folder name)
    pub id: String,
    /// 4-digit edit PIN for the submitter
    pub pin: String,
}
