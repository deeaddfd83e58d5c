//! Record completion
//!
//! The last pipeline step before handoff: every schema field must be present
//! so downstream display and export code never branches on absence.

use pitchroom_domain::{ExtractionRecord, FieldValue, SchemaField};

/// Fill every absent schema field with the sentinel
///
/// Existing values, including list values, are untouched. Pure, total and
/// idempotent.
pub fn fill_missing(mut record: ExtractionRecord) -> ExtractionRecord {
    for field in SchemaField::ALL {
        if record.get(field).is_none() {
            record.set(field, FieldValue::Unknown);
        }
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_becomes_all_unknown() {
        let filled = fill_missing(ExtractionRecord::new());
        assert!(filled.is_complete());
        assert!(filled.iter().all(|(_, v)| v.is_unknown()));
    }

    #[test]
    fn test_existing_values_untouched() {
        let mut record = ExtractionRecord::new();
        record.set(SchemaField::ProjectName, FieldValue::Text("Acme".to_string()));
        record.set(
            SchemaField::SdgsTargeted,
            FieldValue::List(vec!["Climate action (SDG 13)".to_string()]),
        );

        let filled = fill_missing(record);
        assert!(filled.is_complete());
        assert_eq!(
            filled.get(SchemaField::ProjectName),
            Some(&FieldValue::Text("Acme".to_string()))
        );
        assert_eq!(
            filled.get(SchemaField::SdgsTargeted),
            Some(&FieldValue::List(vec!["Climate action (SDG 13)".to_string()]))
        );
        assert_eq!(filled.get(SchemaField::Problem), Some(&FieldValue::Unknown));
    }

    #[test]
    fn test_idempotent() {
        let mut record = ExtractionRecord::new();
        record.set(SchemaField::Revenues, FieldValue::Number(42.0));
        let once = fill_missing(record);
        let twice = fill_missing(once.clone());
        assert_eq!(once, twice);
    }
}
