use serde::{Deserialize, Serialize};

use crate::AppId;

/// Summary metadata for one app, as returned by the app listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub app_id: AppId,
    /// App code; empty when none has been assigned.
    #[serde(default)]
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Containing space, if the app lives in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub modified_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_info_parses_listing_entry() {
        let json = r#"{
            "appId": "3333",
            "code": "",
            "name": "displayMessage",
            "description": "",
            "spaceId": null,
            "createdAt": "2024-01-05T09:00:00Z",
            "modifiedAt": "2024-02-01T12:30:00Z"
        }"#;

        let info: AppInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.app_id, AppId::new(3333));
        assert_eq!(info.name, "displayMessage");
        assert!(info.space_id.is_none());
    }
}
