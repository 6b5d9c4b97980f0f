//! API error types for the WestWine REST API client.

use thiserror::Error;

/// API-specific error type for the WestWine REST API client.
///
/// HTTP status codes never produce an error: a response with any status is
/// handed back to the caller (parsed or raw). Only transport failures and
/// (de)serialization problems are reported here.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP/network error from reqwest, passed through unmodified
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON (or not the requested type)
    #[error("Deserialization error: {0}")]
    Deserialize(#[source] reqwest::Error),

    /// Request payload could not be serialized to JSON
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ApiError {
    /// Whether this error came from the network layer (connect, DNS, I/O).
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Http(_))
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
