mod auth;
pub use auth::Auth;

mod config;
pub use config::ClientConfig;

mod error;
pub use error::ApiError;

mod api;
pub use api::RecordApi;
pub use api::{
    FormFieldsResponse, GetRecordsResponse, RecordUpdate, UpdateAllRecordsResponse,
    UpdateRecordResponse, UpdatedRecord, ViewsResponse,
};

mod rest;
pub use rest::RestClient;
