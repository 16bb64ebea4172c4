//! API Errors

use thiserror::Error;

/// Common result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors from talking to the tagging backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be sent or the body could not be read
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Body was not the JSON shape we expected
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend asked the client to go elsewhere (usually to sign in)
    #[error("Redirected to {location}")]
    Redirect { location: String },

    /// Backend reported an error in the response body
    #[error("Backend error: {0}")]
    Backend(String),
}

impl ApiError {
    pub fn is_redirect(&self) -> bool {
        matches!(self, ApiError::Redirect { .. })
    }
}
