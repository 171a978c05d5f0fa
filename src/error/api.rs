//! API call failures.

use thiserror::Error;

use crate::traits::HttpError;

/// Result alias for fallible API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Why an API call produced no data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The service could not be reached.
    #[error("Connection error: backend not reachable at {url}: {message}")]
    Connection { url: String, message: String },

    /// The request did not complete within its timeout.
    #[error("Request to {url} timed out: {message}")]
    Timeout { url: String, message: String },

    /// The service answered with a status other than 200.
    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// The body could not be parsed into the expected shape.
    #[error("Invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },

    /// Any other transport failure (bad URL, body read error, ...).
    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },
}

impl ApiError {
    /// Classify a transport error for the request to `url`.
    pub fn from_http(err: HttpError, url: &str) -> Self {
        let url = url.to_string();
        match err {
            HttpError::ConnectionFailed(message) => ApiError::Connection { url, message },
            HttpError::Timeout(message) => ApiError::Timeout { url, message },
            HttpError::InvalidUrl(message)
            | HttpError::Io(message)
            | HttpError::Other(message) => ApiError::Request { url, message },
        }
    }

    /// Build an `InvalidResponse` from a body parse failure.
    pub fn invalid_response(err: serde_json::Error, url: &str) -> Self {
        ApiError::InvalidResponse {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    /// Short error code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Connection { .. } => "E_API_CONN",
            ApiError::Timeout { .. } => "E_API_TIMEOUT",
            ApiError::HttpStatus { .. } => "E_API_HTTP",
            ApiError::InvalidResponse { .. } => "E_API_INVALID",
            ApiError::Request { .. } => "E_API_REQUEST",
        }
    }

    /// The URL the failed request targeted.
    pub fn url(&self) -> &str {
        match self {
            ApiError::Connection { url, .. }
            | ApiError::Timeout { url, .. }
            | ApiError::HttpStatus { url, .. }
            | ApiError::InvalidResponse { url, .. }
            | ApiError::Request { url, .. } => url,
        }
    }
}
