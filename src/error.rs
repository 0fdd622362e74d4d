use serde::Deserialize;
use thiserror::Error;

/// Coarse classification of failures, matching where in the pipeline they
/// were detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connection-level failure or a non-success HTTP status.
    Transport,
    /// Malformed or schema-mismatched payload.
    Decode,
    /// The stream ended without the expected termination sentinel.
    Protocol,
}

/// Error detail as returned by the API in a JSON error body.
#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(default)]
    pub r#type: Option<String>,
    #[serde(default)]
    pub param: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Error)]
pub enum AnthropicError {
    /// Errors from the HTTP client
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Invalid request errors from the API
    #[error("invalid request: {message}")]
    InvalidRequest {
        message: String,
        param: Option<String>,
        code: Option<String>,
    },

    /// Authentication error
    #[error("authentication error: {0}")]
    Authentication(String),

    /// Permission denied
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Resource not found
    #[error("resource not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded
    #[error("rate limit exceeded")]
    RateLimit,

    /// API overloaded
    #[error("API overloaded: {0}")]
    Overloaded(String),

    /// Generic API error
    #[error("API error: {0}")]
    Api(String),

    /// Unexpected response from the API
    #[error("unexpected response from API: {0}")]
    UnexpectedResponse(String),

    /// Invalid event data in a stream frame
    #[error("invalid event data: {0}")]
    InvalidEventData(String),

    /// The connection closed before the end-of-stream sentinel arrived
    #[error("stream closed before the end-of-stream sentinel")]
    UnexpectedEndOfStream,
}

impl AnthropicError {
    /// Classifies the error by the pipeline stage that produced it.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(_)
            | Self::InvalidRequest { .. }
            | Self::Authentication(_)
            | Self::PermissionDenied(_)
            | Self::NotFound(_)
            | Self::RateLimit
            | Self::Overloaded(_)
            | Self::Api(_)
            | Self::UnexpectedResponse(_) => ErrorKind::Transport,
            Self::Json(_) | Self::InvalidEventData(_) => ErrorKind::Decode,
            Self::UnexpectedEndOfStream => ErrorKind::Protocol,
        }
    }
}

/// Parse a non-success response body from the API.
/// Handles both the structured JSON error format and plain text bodies.
pub fn parse_error_response(status: reqwest::StatusCode, bytes: bytes::Bytes) -> AnthropicError {
    if let Ok(payload) = serde_json::from_slice::<ApiErrorResponse>(&bytes) {
        match payload.error.r#type.as_deref() {
            Some("invalid_request_error") => AnthropicError::InvalidRequest {
                message: payload.error.message,
                param: payload.error.param,
                code: payload.error.code,
            },
            Some("authentication_error") => AnthropicError::Authentication(payload.error.message),
            Some("permission_error") => AnthropicError::PermissionDenied(payload.error.message),
            Some("not_found_error") => AnthropicError::NotFound(payload.error.message),
            Some("rate_limit_error") => AnthropicError::RateLimit,
            Some("api_error") => AnthropicError::Api(payload.error.message),
            Some("overloaded_error") => AnthropicError::Overloaded(payload.error.message),
            _ => AnthropicError::UnexpectedResponse(payload.error.message),
        }
    } else {
        let error_text = String::from_utf8_lossy(&bytes).to_string();
        match status.as_u16() {
            429 => AnthropicError::RateLimit,
            401 => AnthropicError::Authentication(error_text),
            403 => AnthropicError::PermissionDenied(error_text),
            404 => AnthropicError::NotFound(error_text),
            _ => AnthropicError::UnexpectedResponse(format!(
                "HTTP status {}: {}",
                status.as_u16(),
                error_text
            )),
        }
    }
}
