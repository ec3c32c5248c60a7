use std::sync::Arc;

use tracing::debug;

use kin_client::{
    ApiError, FormFieldsResponse, RecordApi, RecordUpdate, UpdateAllRecordsResponse,
    UpdateRecordResponse, ViewsResponse,
};
use kin_model::{AppId, AppInfo, Record, RecordId, RecordQuery};

/// Server-side page limit of the record list endpoint.
pub const MAX_READ_LIMIT: usize = 500;

/// Hard ceiling on the total number of records one aggregated fetch returns.
pub const MAX_TOTAL_RECORDS: usize = 10_000;

/// High-level record operations on top of a [`RecordApi`] transport.
///
/// The main entry point is [`RecordFetcher::fetch_all`], which hides the
/// list endpoint's page limit behind a single call. The remaining methods
/// are thin delegations kept here so callers deal with one handle.
pub struct RecordFetcher<C> {
    api: Arc<C>,
}

impl<C> RecordFetcher<C>
where
    C: RecordApi,
{
    pub fn new(api: Arc<C>) -> Self {
        Self { api }
    }

    /// Fetch every record matching `query`, paging through the list
    /// endpoint until a short page or [`MAX_TOTAL_RECORDS`].
    ///
    /// `query.filter` must not carry `limit`/`offset` clauses of its own;
    /// a pagination clause is appended per page. Pages are requested
    /// strictly one at a time and concatenated in offset order. Any
    /// transport error aborts the whole call; partially accumulated pages
    /// are discarded.
    ///
    /// End of data is detected by a page shorter than [`MAX_READ_LIMIT`].
    /// If a deployment's actual page limit differs, detection breaks:
    /// either the fetch stops early or issues one extra empty call.
    pub async fn fetch_all(
        &self,
        app: AppId,
        query: &RecordQuery,
    ) -> Result<Vec<Record>, ApiError> {
        let mut all_records = Vec::new();
        let mut offset = 0;

        while all_records.len() < MAX_TOTAL_RECORDS {
            let paginated = query.paginated(MAX_READ_LIMIT, offset);
            let page = self
                .api
                .get_records(app, &query.fields, &paginated)
                .await?
                .records;

            let page_len = page.len();
            all_records.extend(page);

            if page_len < MAX_READ_LIMIT {
                break;
            }
            offset += MAX_READ_LIMIT;
        }

        debug!("fetched {} records: app={}", all_records.len(), app);
        Ok(all_records)
    }

    pub async fn update_record(
        &self,
        app: AppId,
        id: RecordId,
        record: &Record,
        revision: Option<&str>,
    ) -> Result<UpdateRecordResponse, ApiError> {
        self.api.update_record(app, id, record, revision).await
    }

    pub async fn update_all_records(
        &self,
        app: AppId,
        updates: &[RecordUpdate],
    ) -> Result<UpdateAllRecordsResponse, ApiError> {
        self.api.update_all_records(app, updates).await
    }

    pub async fn get_apps(&self) -> Result<Vec<AppInfo>, ApiError> {
        self.api.get_apps().await
    }

    pub async fn fetch_fields(
        &self,
        app: AppId,
        preview: bool,
    ) -> Result<FormFieldsResponse, ApiError> {
        self.api.get_form_fields(app, preview).await
    }

    pub async fn get_views(&self, app: AppId) -> Result<ViewsResponse, ApiError> {
        self.api.get_views(app).await
    }
}
