//! Lenient parsing of model output into a JSON object
//!
//! Models wrap their JSON in prose more often than they return it clean.
//! Parsing is two-stage: strict parse of the whole string, then strict parse
//! of the first-`{`-to-last-`}` substring. Anything else yields an empty
//! object; this function never errors.

use serde_json::{Map, Value};
use tracing::debug;

/// Parse a raw model response into a JSON object, salvaging an embedded
/// object when the response is not pure JSON
pub fn repair_parse(raw: &str) -> Map<String, Value> {
    if let Ok(Value::Object(object)) = serde_json::from_str::<Value>(raw) {
        return object;
    }

    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
        if start < end {
            if let Ok(Value::Object(object)) = serde_json::from_str::<Value>(&raw[start..=end]) {
                debug!("salvaged JSON object from wrapped response");
                return object;
            }
        }
    }

    debug!("response carried no parseable JSON object");
    Map::new()
}
