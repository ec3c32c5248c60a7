use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("remote rejected request: {code} ({id}): {message}")]
    Remote {
        code: String,
        id: String,
        message: String,
    },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
}
