use serde::{Deserialize, Serialize};

/// One record-list view definition from the views endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewInfo {
    #[serde(rename = "type")]
    pub view_type: String,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub filter_cond: String,
    #[serde(default)]
    pub sort: String,
    #[serde(default)]
    pub index: String,
    #[serde(default)]
    pub fields: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_info_parses_list_view() {
        let json = r#"{
            "type": "LIST",
            "id": "20",
            "name": "All records",
            "filterCond": "status = \"open\"",
            "sort": "$id desc",
            "index": "0",
            "fields": ["title", "status"]
        }"#;

        let view: ViewInfo = serde_json::from_str(json).unwrap();
        assert_eq!(view.view_type, "LIST");
        assert_eq!(view.fields.len(), 2);
        assert_eq!(view.filter_cond, "status = \"open\"");
    }
}
