//! Typed field values and the extraction record
//!
//! Model output is loosely typed JSON; the record pins each value to a tagged
//! union so downstream filtering and export code gets compile-time
//! exhaustiveness instead of string-keyed guessing.

use crate::schema::SchemaField;
use serde_json::Value;
use std::collections::BTreeMap;

/// Placeholder inserted for any field the pipeline could not determine
pub const UNKNOWN_SENTINEL: &str = "Unknown";

/// Value of a single schema field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free text
    Text(String),
    /// Numeric value (revenues, market size, IRR, year, ...)
    Number(f64),
    /// Short list of strings (e.g. matched SDG labels)
    List(Vec<String>),
    /// The sentinel for an absent or unparseable value
    Unknown,
}

impl FieldValue {
    /// Convert a JSON value into a field value
    ///
    /// Strings map to `Text`, numbers to `Number`, arrays to a `List` of the
    /// stringified scalar elements. Anything else (null, bool, nested
    /// objects) is treated as undetermined.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) if s == UNKNOWN_SENTINEL => FieldValue::Unknown,
            Value::String(s) => FieldValue::Text(s.clone()),
            Value::Number(n) => n.as_f64().map(FieldValue::Number).unwrap_or(FieldValue::Unknown),
            Value::Array(items) => {
                let list: Vec<String> = items
                    .iter()
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect();
                FieldValue::List(list)
            }
            _ => FieldValue::Unknown,
        }
    }

    /// Convert the field value back into JSON
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(s) => Value::String(s.clone()),
            FieldValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(n.to_string())),
            FieldValue::List(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            FieldValue::Unknown => Value::String(UNKNOWN_SENTINEL.to_string()),
        }
    }

    /// Render the value for display or delimited export
    ///
    /// Lists join with "; " the way the review screen shows them.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{:.0}", n)
                } else {
                    n.to_string()
                }
            }
            FieldValue::List(items) => items.join("; "),
            FieldValue::Unknown => UNKNOWN_SENTINEL.to_string(),
        }
    }

    /// Whether this value is the sentinel
    pub fn is_unknown(&self) -> bool {
        matches!(self, FieldValue::Unknown)
    }
}

/// The complete field → value structure produced by the pipeline for one
/// submission
///
/// Created fresh per submission; replaced whole on update, never patched
/// field-by-field once persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionRecord {
    fields: BTreeMap<SchemaField, FieldValue>,
}

impl ExtractionRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record with every field set to the sentinel
    pub fn all_unknown() -> Self {
        let mut record = Self::new();
        for field in SchemaField::ALL {
            record.set(field, FieldValue::Unknown);
        }
        record
    }

    /// Get a field's value, if present
    pub fn get(&self, field: SchemaField) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    /// Set a field's value
    pub fn set(&mut self, field: SchemaField, value: FieldValue) {
        self.fields.insert(field, value);
    }

    /// Number of fields present
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields are present
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether every schema field is present
    pub fn is_complete(&self) -> bool {
        SchemaField::ALL.iter().all(|f| self.fields.contains_key(f))
    }

    /// Iterate fields in schema order, skipping absent ones
    pub fn iter(&self) -> impl Iterator<Item = (SchemaField, &FieldValue)> {
        SchemaField::ALL
            .iter()
            .filter_map(move |f| self.fields.get(f).map(|v| (*f, v)))
    }

    /// Build a record from a JSON object keyed by field display names
    ///
    /// Keys that are not schema field names are ignored; the model is free
    /// to return extra keys and they must not poison the record.
    pub fn from_json_object(object: &serde_json::Map<String, Value>) -> Self {
        let mut record = Self::new();
        for (key, value) in object {
            if let Some(field) = SchemaField::parse(key) {
                record.set(field, FieldValue::from_json(value));
            }
        }
        record
    }

    /// Serialize the record to a JSON object keyed by field display names,
    /// in schema order
    pub fn to_json_object(&self) -> serde_json::Map<String, Value> {
        let mut object = serde_json::Map::new();
        for (field, value) in self.iter() {
            object.insert(field.as_str().to_string(), value.to_json());
        }
        object
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(
            FieldValue::from_json(&json!("solar microgrids")),
            FieldValue::Text("solar microgrids".to_string())
        );
        assert_eq!(FieldValue::from_json(&json!(1_250_000)), FieldValue::Number(1_250_000.0));
        assert_eq!(FieldValue::from_json(&json!(null)), FieldValue::Unknown);
        assert_eq!(FieldValue::from_json(&json!("Unknown")), FieldValue::Unknown);
    }

    #[test]
    fn test_from_json_array_keeps_scalars() {
        let value = FieldValue::from_json(&json!(["SDG 7", "SDG 1", {"nested": true}]));
        assert_eq!(
            value,
            FieldValue::List(vec!["SDG 7".to_string(), "SDG 1".to_string()])
        );
    }

    #[test]
    fn test_json_round_trip() {
        let mut record = ExtractionRecord::new();
        record.set(SchemaField::ProjectName, FieldValue::Text("Acme".to_string()));
        record.set(SchemaField::Revenues, FieldValue::Number(120_000.0));
        record.set(
            SchemaField::SdgsTargeted,
            FieldValue::List(vec!["No poverty (SDG 1)".to_string()]),
        );
        record.set(SchemaField::Problem, FieldValue::Unknown);

        let object = record.to_json_object();
        let parsed = ExtractionRecord::from_json_object(&object);
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_from_json_object_ignores_foreign_keys() {
        let mut object = serde_json::Map::new();
        object.insert("Project Name".to_string(), json!("Acme"));
        object.insert("Confidence".to_string(), json!(0.9));

        let record = ExtractionRecord::from_json_object(&object);
        assert_eq!(record.len(), 1);
        assert_eq!(
            record.get(SchemaField::ProjectName),
            Some(&FieldValue::Text("Acme".to_string()))
        );
    }

    #[test]
    fn test_all_unknown_is_complete() {
        let record = ExtractionRecord::all_unknown();
        assert!(record.is_complete());
        assert!(record.iter().all(|(_, v)| v.is_unknown()));
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(FieldValue::Number(2027.0).display(), "2027");
        assert_eq!(FieldValue::Number(12.5).display(), "12.5");
        assert_eq!(
            FieldValue::List(vec!["a".to_string(), "b".to_string()]).display(),
            "a; b"
        );
        assert_eq!(FieldValue::Unknown.display(), "Unknown");
    }
}
