use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One form field definition from the form-fields endpoint.
///
/// Field properties are heterogeneous per field type; only the common
/// members are typed and the rest is kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldProperty {
    #[serde(rename = "type")]
    pub field_type: String,
    pub code: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_property_keeps_type_specific_members() {
        let json = r#"{
            "type": "DROP_DOWN",
            "code": "status",
            "label": "Status",
            "required": true,
            "options": {"completed": {"label": "completed", "index": "0"}}
        }"#;

        let prop: FieldProperty = serde_json::from_str(json).unwrap();
        assert_eq!(prop.field_type, "DROP_DOWN");
        assert_eq!(prop.code, "status");
        assert!(prop.required);
        assert!(prop.extra.contains_key("options"));
    }

    #[test]
    fn field_property_defaults_optional_members() {
        let json = r#"{"type": "SINGLE_LINE_TEXT", "code": "title"}"#;
        let prop: FieldProperty = serde_json::from_str(json).unwrap();

        assert_eq!(prop.label, "");
        assert!(!prop.required);
    }
}
