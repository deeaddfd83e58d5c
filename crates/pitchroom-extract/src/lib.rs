//! Pitchroom Document Text Extractor
//!
//! Converts an uploaded binary document into plain text by declared file
//! extension. Only embedded/structured text is extracted; there is no OCR.
//!
//! # Contract
//!
//! - `pdf`: text of all pages, in page order, newline-separated
//! - `docx`: paragraph text in document order
//! - `pptx`: text of every text-bearing shape, in slide order
//! - `xls`/`xlsx`: first sheet serialized to delimited text; any decoding
//!   failure is swallowed and yields an empty string
//! - anything else: empty string (unsupported is not an error)
//!
//! Failures for pdf/docx/pptx propagate as [`ExtractError`]; the caller
//! decides whether to continue with empty text. No resource handles survive
//! the call.

#![warn(missing_docs)]

mod office;
mod pdf;
mod sheet;

use thiserror::Error;

/// Errors that can occur during document text extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Malformed or unreadable PDF
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    /// Malformed or unreadable Word document
    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    /// Malformed or unreadable presentation
    #[error("PPTX extraction failed: {0}")]
    Pptx(String),
}

/// Extract all human-readable text from a document
///
/// `extension` is the declared file extension, with or without a leading
/// dot, matched case-insensitively.
pub fn extract_text(bytes: &[u8], extension: &str) -> Result<String, ExtractError> {
    let ext = extension.trim_start_matches('.').to_lowercase();
    match ext.as_str() {
        "pdf" => pdf::extract(bytes),
        "docx" => office::extract_docx(bytes),
        "pptx" => office::extract_pptx(bytes),
        "xls" | "xlsx" => Ok(sheet::extract(bytes)),
        other => {
            tracing::debug!("unsupported document extension '{}'", other);
            Ok(String::new())
        }
    }
}
