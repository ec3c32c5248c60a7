use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use kin_model::{AppId, AppInfo, FieldProperty, Record, RecordId, Revision, ViewInfo};

use crate::error::ApiError;

/// One page of records from the list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GetRecordsResponse {
    pub records: Vec<Record>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRecordResponse {
    pub revision: Revision,
}

/// One entry of a bulk update request.
#[derive(Debug, Clone, Serialize)]
pub struct RecordUpdate {
    pub id: RecordId,
    pub record: Record,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<Revision>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatedRecord {
    pub id: RecordId,
    pub revision: Revision,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAllRecordsResponse {
    pub records: Vec<UpdatedRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormFieldsResponse {
    pub properties: BTreeMap<String, FieldProperty>,
    pub revision: Revision,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViewsResponse {
    pub views: BTreeMap<String, ViewInfo>,
    pub revision: Revision,
}

/// Record-level REST operations against one kintone host.
///
/// This trait abstracts the transport, allowing users to:
/// - Use the provided `RestClient`
/// - Substitute scripted implementations in tests or custom transports
///   with additional logic (caching, rate limiting, etc.)
#[async_trait]
pub trait RecordApi: Send + Sync {
    /// Fetch one page of records matching `query`.
    ///
    /// The query string is passed through verbatim; callers are responsible
    /// for any `limit`/`offset` clauses it carries.
    async fn get_records(
        &self,
        app: AppId,
        fields: &[String],
        query: &str,
    ) -> Result<GetRecordsResponse, ApiError>;

    /// Update a single record, optionally guarded by an expected revision.
    async fn update_record(
        &self,
        app: AppId,
        id: RecordId,
        record: &Record,
        revision: Option<&str>,
    ) -> Result<UpdateRecordResponse, ApiError>;

    /// Update several records of one app in a single request.
    async fn update_all_records(
        &self,
        app: AppId,
        updates: &[RecordUpdate],
    ) -> Result<UpdateAllRecordsResponse, ApiError>;

    /// List apps visible to the authenticated principal.
    async fn get_apps(&self) -> Result<Vec<AppInfo>, ApiError>;

    /// Fetch the form field definitions of an app.
    ///
    /// With `preview` set, reads the pre-deployment settings.
    async fn get_form_fields(
        &self,
        app: AppId,
        preview: bool,
    ) -> Result<FormFieldsResponse, ApiError>;

    /// Fetch the record-list views of an app.
    async fn get_views(&self, app: AppId) -> Result<ViewsResponse, ApiError>;
}
