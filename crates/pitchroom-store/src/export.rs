//! Delimited export of submissions for reporting

use crate::Submission;
use pitchroom_domain::{FieldValue, SchemaField};

/// Metadata columns preceding the schema fields
const LEAD_COLUMNS: [&str; 5] = ["Project", "Country HQ", "Sector", "Status", "Email"];

/// Render submissions as CSV text
///
/// Columns are the metadata columns followed by the 20 schema fields in
/// order. List values join with "; "; numeric values carry no currency or
/// percent adornment; cells holding the delimiter, quotes or newlines are
/// quoted.
pub fn export_csv(submissions: &[Submission]) -> String {
    let mut out = String::new();

    let header: Vec<String> = LEAD_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .chain(SchemaField::ALL.iter().map(|f| f.as_str().to_string()))
        .collect();
    push_row(&mut out, &header);

    for submission in submissions {
        let mut row = vec![
            submission.meta.project.clone(),
            submission.meta.country_hq.clone(),
            submission.meta.sector.clone(),
            submission.status.as_str().to_string(),
            submission.meta.email.clone(),
        ];
        for field in SchemaField::ALL {
            let value = submission
                .record
                .get(field)
                .cloned()
                .unwrap_or(FieldValue::Unknown);
            row.push(value.display());
        }
        push_row(&mut out, &row);
    }

    out
}

fn push_row(out: &mut String, cells: &[String]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape(cell));
    }
    out.push('\n');
}

fn escape(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitchroom_domain::{ExtractionRecord, ReviewStage, SubmissionMeta};

    fn submission() -> Submission {
        let mut record = ExtractionRecord::all_unknown();
        record.set(SchemaField::ProjectName, FieldValue::Text("Acme, Inc".to_string()));
        record.set(SchemaField::Revenues, FieldValue::Number(250_000.0));
        record.set(
            SchemaField::SdgsTargeted,
            FieldValue::List(vec![
                "No poverty (SDG 1)".to_string(),
                "Climate action (SDG 13)".to_string(),
            ]),
        );

        Submission {
            id: "Acme_20250101_120000".to_string(),
            meta: SubmissionMeta {
                project: "Acme".to_string(),
                email: "founder@acme.test".to_string(),
                country_hq: "Kenya".to_string(),
                sector: "Energy".to_string(),
                incorporation_date: None,
            },
            record,
            status: ReviewStage::IntroCall,
        }
    }

    #[test]
    fn test_header_columns() {
        let csv = export_csv(&[]);
        let header = csv.lines().next().unwrap();
        assert!(header.starts_with("Project,Country HQ,Sector,Status,Email,Project Name,"));
        assert!(header.ends_with("Barrier(s) to entry"));
        assert_eq!(header.split(',').count(), 25);
    }

    #[test]
    fn test_one_row_per_submission() {
        let csv = export_csv(&[submission()]);
        assert_eq!(csv.lines().count(), 2);

        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("Acme,Kenya,Energy,Intro call,founder@acme.test,"));
        assert!(row.contains("\"Acme, Inc\""));
        assert!(row.contains("250000"));
        assert!(row.contains("No poverty (SDG 1); Climate action (SDG 13)"));
        assert!(row.contains("Unknown"));
    }

    #[test]
    fn test_quote_escaping() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
