use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single field of a record: the field type tag plus its raw value.
///
/// The value stays untyped JSON; per-type decoding is left to callers that
/// actually care about a field's shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldValue {
    #[serde(rename = "type")]
    pub field_type: String,
    pub value: Value,
}

impl FieldValue {
    pub fn new(field_type: impl Into<String>, value: Value) -> Self {
        Self {
            field_type: field_type.into(),
            value,
        }
    }
}

/// One record: a map from field code to field value.
///
/// Serialized as a transparent object wrapper, matching the wire shape
/// `{"<code>": {"type": "...", "value": ...}, ...}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub BTreeMap<String, FieldValue>);

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get a field by its code.
    pub fn get(&self, code: &str) -> Option<&FieldValue> {
        self.0.get(code)
    }

    /// Insert a field, replacing any previous value under the same code.
    pub fn insert(&mut self, code: impl Into<String>, value: FieldValue) {
        self.0.insert(code.into(), value);
    }

    /// Iterate over all (code, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_serde_roundtrip() {
        let mut record = Record::new();
        record.insert(
            "status",
            FieldValue::new("DROP_DOWN", json!("completed")),
        );
        record.insert("title", FieldValue::new("SINGLE_LINE_TEXT", json!("hello")));

        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();

        assert_eq!(back, record);
        assert_eq!(back.get("status").unwrap().value, json!("completed"));
    }

    #[test]
    fn record_parses_wire_shape() {
        let json = r#"{"$id":{"type":"__ID__","value":"7"}}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.len(), 1);
        assert_eq!(record.get("$id").unwrap().field_type, "__ID__");
    }

    #[test]
    fn empty_record() {
        let record = Record::new();
        assert!(record.is_empty());
        assert_eq!(serde_json::to_string(&record).unwrap(), "{}");
    }
}
