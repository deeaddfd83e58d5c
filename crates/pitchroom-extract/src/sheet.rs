//! Spreadsheet extraction via calamine
//!
//! The first sheet is serialized to comma-delimited text. Spreadsheets are
//! the one format where every failure is swallowed: pitch decks exported to
//! xls are frequently half-corrupt, and an empty string is more useful to
//! the pipeline than an error.

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;
use tracing::debug;

/// Serialize the first sheet to delimited text; empty string on any failure
pub fn extract(bytes: &[u8]) -> String {
    match try_extract(bytes) {
        Ok(text) => text,
        Err(e) => {
            debug!("spreadsheet extraction swallowed: {}", e);
            String::new()
        }
    }
}

fn try_extract(bytes: &[u8]) -> Result<String, calamine::Error> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let first = match workbook.sheet_names().first() {
        Some(name) => name.clone(),
        None => return Ok(String::new()),
    };
    let range = workbook.worksheet_range(&first)?;

    let mut lines = Vec::new();
    for row in range.rows() {
        let cells: Vec<String> = row.iter().map(cell_to_string).collect();
        lines.push(cells.join(","));
    }
    Ok(lines.join("\n"))
}

fn cell_to_string(cell: &Data) -> String {
    let raw = match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 => format!("{:.0}", f),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    };
    // Delimited text, so cells carrying the delimiter get quoted
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_yield_empty() {
        assert_eq!(extract(b"definitely not a workbook"), "");
    }

    #[test]
    fn test_empty_input_yields_empty() {
        assert_eq!(extract(b""), "");
    }

    #[test]
    fn test_truncated_xlsx_header_yields_empty() {
        // Valid zip magic, invalid workbook
        assert_eq!(extract(b"PK\x03\x04broken"), "");
    }

    #[test]
    fn test_cell_quoting() {
        assert_eq!(cell_to_string(&Data::String("a,b".to_string())), "\"a,b\"");
        assert_eq!(
            cell_to_string(&Data::String("say \"hi\"".to_string())),
            "\"say \"\"hi\"\"\""
        );
        assert_eq!(cell_to_string(&Data::Float(2500.0)), "2500");
        assert_eq!(cell_to_string(&Data::Empty), "");
    }
}
