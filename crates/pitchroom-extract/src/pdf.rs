//! PDF text extraction via lopdf

use crate::ExtractError;
use lopdf::Document;
use tracing::debug;

/// Extract the text of every page, in page order, newline-separated
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut document =
        Document::load_mem(bytes).map_err(|e| ExtractError::Pdf(format!("load failed: {}", e)))?;

    // Unprotected-but-flagged PDFs decrypt with an empty password
    if document.is_encrypted() && document.decrypt("").is_err() {
        return Err(ExtractError::Pdf("password-protected document".to_string()));
    }

    document.decompress();

    let mut page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
    page_numbers.sort_unstable();

    let mut pages = Vec::with_capacity(page_numbers.len());
    for page in page_numbers {
        match document.extract_text(&[page]) {
            Ok(text) => pages.push(text.trim_end().to_string()),
            Err(e) => {
                // A single undecodable page should not sink the document
                debug!("skipping page {}: {}", page, e);
            }
        }
    }

    Ok(pages.join("\n"))
}
