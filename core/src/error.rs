//! Error types for the RH API client.
//!
//! # Design
//! `ApiError` is the failure half of [`ApiResult`](crate::ApiResult). Callers
//! branch on the status carried next to it, or on [`ApiError::kind`]; the
//! message is whatever the server supplied and is opaque to the client.
//! `TransportError` never leaves the client: it is logged and collapsed into
//! `ApiError::Network`.

use thiserror::Error;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error";
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";
pub const DOWNLOAD_ERROR_MESSAGE: &str = "Download failed";

/// Coarse classification of an `ApiError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Network,
    Unauthorized,
    Forbidden,
    NotFound,
    Validation,
    Server,
    Decode,
    Encode,
}

/// Failure reported by an API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response was received.
    #[error("Network error")]
    Network,

    /// The server answered 401.
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    /// Any other 4xx; the message usually explains which field was rejected.
    #[error("{0}")]
    Validation(String),

    /// 5xx, or a status outside the 4xx range the client does not expect.
    #[error("{0}")]
    Server(String),

    /// A 2xx body did not match the expected payload type.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Encode(String),
}

impl ApiError {
    /// Classify a non-2xx status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 => ApiError::Unauthorized(message),
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            400..=499 => ApiError::Validation(message),
            _ => ApiError::Server(message),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network => ErrorKind::Network,
            ApiError::Unauthorized(_) => ErrorKind::Unauthorized,
            ApiError::Forbidden(_) => ErrorKind::Forbidden,
            ApiError::NotFound(_) => ErrorKind::NotFound,
            ApiError::Validation(_) => ErrorKind::Validation,
            ApiError::Server(_) => ErrorKind::Server,
            ApiError::Decode(_) => ErrorKind::Decode,
            ApiError::Encode(_) => ErrorKind::Encode,
        }
    }

    /// Human-readable text for display.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Failure to complete an HTTP round-trip at all.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP transport failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("connection failed: {0}")]
    Connection(String),
}

/// Invalid client configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base URL is empty")]
    EmptyBaseUrl,

    #[error("base URL must start with http:// or https://, got {0}")]
    InvalidScheme(String),
}
