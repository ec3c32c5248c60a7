use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use kin_model::{AppId, Record, RecordId};

use crate::api::{
    FormFieldsResponse, GetRecordsResponse, RecordApi, RecordUpdate, UpdateAllRecordsResponse,
    UpdateRecordResponse, ViewsResponse,
};
use crate::config::ClientConfig;
use crate::error::ApiError;

/// REST transport against the `/k/v1` endpoints of one host.
pub struct RestClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl RestClient {
    /// Create a client for the given host configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let url = reqwest::Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;
        if url.host_str().is_none() {
            return Err(ApiError::InvalidBaseUrl(config.base_url));
        }

        let config = ClientConfig {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth: config.auth,
        };

        Ok(Self {
            http: reqwest::Client::new(),
            config,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/k/v1/{}.json", self.config.base_url, path)
    }

    async fn get<T>(&self, path: &str, params: &[(String, String)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .http
            .get(self.endpoint(path))
            .header(self.config.auth.header_name(), self.config.auth.header_value())
            .query(params)
            .send()
            .await?;

        decode(response).await
    }

    async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .put(self.endpoint(path))
            .header(self.config.auth.header_name(), self.config.auth.header_value())
            .json(body)
            .send()
            .await?;

        decode(response).await
    }
}

#[async_trait]
impl RecordApi for RestClient {
    async fn get_records(
        &self,
        app: AppId,
        fields: &[String],
        query: &str,
    ) -> Result<GetRecordsResponse, ApiError> {
        debug!("listing records: app={}, query={:?}", app, query);
        self.get("records", &record_params(app, fields, query)).await
    }

    async fn update_record(
        &self,
        app: AppId,
        id: RecordId,
        record: &Record,
        revision: Option<&str>,
    ) -> Result<UpdateRecordResponse, ApiError> {
        #[derive(Serialize)]
        struct Request<'a> {
            app: AppId,
            id: RecordId,
            record: &'a Record,
            #[serde(skip_serializing_if = "Option::is_none")]
            revision: Option<&'a str>,
        }

        debug!("updating record: app={}, id={}", app, id);
        self.put(
            "record",
            &Request {
                app,
                id,
                record,
                revision,
            },
        )
        .await
    }

    async fn update_all_records(
        &self,
        app: AppId,
        updates: &[RecordUpdate],
    ) -> Result<UpdateAllRecordsResponse, ApiError> {
        #[derive(Serialize)]
        struct Request<'a> {
            app: AppId,
            records: &'a [RecordUpdate],
        }

        debug!("updating {} records: app={}", updates.len(), app);
        self.put("records", &Request { app, records: updates }).await
    }

    async fn get_apps(&self) -> Result<Vec<kin_model::AppInfo>, ApiError> {
        #[derive(Deserialize)]
        struct Response {
            apps: Vec<kin_model::AppInfo>,
        }

        debug!("listing apps");
        let response: Response = self.get("apps", &[]).await?;
        Ok(response.apps)
    }

    async fn get_form_fields(
        &self,
        app: AppId,
        preview: bool,
    ) -> Result<FormFieldsResponse, ApiError> {
        let path = if preview {
            "preview/app/form/fields"
        } else {
            "app/form/fields"
        };

        debug!("fetching form fields: app={}, preview={}", app, preview);
        self.get(path, &[("app".to_string(), app.to_string())]).await
    }

    async fn get_views(&self, app: AppId) -> Result<ViewsResponse, ApiError> {
        debug!("fetching views: app={}", app);
        self.get("app/views", &[("app".to_string(), app.to_string())])
            .await
    }
}

fn record_params(app: AppId, fields: &[String], query: &str) -> Vec<(String, String)> {
    let mut params = vec![("app".to_string(), app.to_string())];
    if !query.is_empty() {
        params.push(("query".to_string(), query.to_string()));
    }
    for (i, field) in fields.iter().enumerate() {
        params.push((format!("fields[{i}]"), field.clone()));
    }
    params
}

async fn decode<T>(response: reqwest::Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(remote_error(status, &body));
    }

    serde_json::from_str(&body)
        .map_err(|e| ApiError::InvalidResponse(format!("failed to parse response: {}, body: {}", e, body)))
}

fn remote_error(status: reqwest::StatusCode, body: &str) -> ApiError {
    #[derive(Deserialize)]
    struct ErrorBody {
        code: String,
        id: String,
        message: String,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(e) => ApiError::Remote {
            code: e.code,
            id: e.id,
            message: e.message,
        },
        Err(_) => ApiError::InvalidResponse(format!("http {}: {}", status, body)),
    }
}
