//! DOCX and PPTX text extraction
//!
//! Both formats are zip archives of XML parts. Text lives in run elements
//! (`<w:t>` for WordprocessingML, `<a:t>` for DrawingML); paragraphs map to
//! `<w:p>` / `<a:p>`. SAX-style event processing, no DOM.

use crate::ExtractError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// Extract paragraph text from a Word document, in document order
pub fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::Docx(format!("not a zip archive: {}", e)))?;
    let xml = read_part(&mut archive, "word/document.xml")
        .map_err(|e| ExtractError::Docx(format!("word/document.xml: {}", e)))?;
    Ok(collect_runs(&xml, b"w:t", b"w:p"))
}

/// Extract the text of every text-bearing shape across all slides, in slide
/// order
pub fn extract_pptx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::Pptx(format!("not a zip archive: {}", e)))?;

    // Slide parts are ppt/slides/slide<N>.xml; archive order is arbitrary,
    // so sort numerically by N
    let mut slides: Vec<(u32, String)> = archive
        .file_names()
        .filter_map(|name| {
            let n = name
                .strip_prefix("ppt/slides/slide")?
                .strip_suffix(".xml")?
                .parse::<u32>()
                .ok()?;
            Some((n, name.to_string()))
        })
        .collect();
    slides.sort_unstable_by_key(|(n, _)| *n);

    let mut parts = Vec::with_capacity(slides.len());
    for (_, name) in slides {
        let xml = read_part(&mut archive, &name)
            .map_err(|e| ExtractError::Pptx(format!("{}: {}", name, e)))?;
        let text = collect_runs(&xml, b"a:t", b"a:p");
        if !text.is_empty() {
            parts.push(text);
        }
    }

    Ok(parts.join("\n"))
}

fn read_part<R: Read + std::io::Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<String, String> {
    let mut part = archive.by_name(name).map_err(|e| e.to_string())?;
    let mut xml = String::new();
    part.read_to_string(&mut xml).map_err(|e| e.to_string())?;
    Ok(xml)
}

/// Accumulate text of every `run_tag` element, inserting a newline at the
/// end of each `para_tag` element
fn collect_runs(xml: &str, run_tag: &[u8], para_tag: &[u8]) -> String {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut out = String::new();
    let mut in_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.name().as_ref() == run_tag => in_run = true,
            Ok(Event::End(ref e)) if e.name().as_ref() == run_tag => in_run = false,
            Ok(Event::End(ref e)) if e.name().as_ref() == para_tag => {
                if !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            Ok(Event::Text(t)) if in_run => {
                if let Ok(text) = t.unescape() {
                    out.push_str(&text);
                }
            }
            Ok(Event::Eof) => break,
            // Malformed markup past this point: keep what we have
            Err(_) => break,
            _ => {}
        }
    }

    out.trim_end().to_string()
}
