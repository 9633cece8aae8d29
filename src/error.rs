//! Error types for talking to the admin API.

use thiserror::Error;

use crate::constants::ERR_NO_ENDPOINT;

/// Failure raised by a [`Transport`](crate::transport::Transport) before any
/// HTTP status was received.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct TransportError(pub String);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("API base URL must not be empty")]
    EmptyBaseUrl,

    #[error("API base URL must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),

    #[error("Endpoint template '{0}' must contain {{path}}")]
    InvalidTemplate(String),

    #[error("Fetch limit must be a positive integer, got '{0}'")]
    InvalidFetchLimit(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16, url: String },

    #[error("Invalid JSON response: {0}")]
    Decode(String),

    #[error("Unexpected response format from {url}")]
    Envelope { url: String },

    #[error("ID mismatch: requested {expected}, received {found}")]
    IdMismatch { expected: String, found: String },

    #[error("Record not found")]
    NotFound { url: String },

    #[error("{}", ERR_NO_ENDPOINT)]
    NoEndpoint,
}

impl ApiError {
    /// URL of the candidate that produced the error, when one is known.
    pub fn url(&self) -> Option<&str> {
        match self {
            ApiError::HttpStatus { url, .. }
            | ApiError::Envelope { url }
            | ApiError::NotFound { url } => Some(url),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            ApiError::NotFound { .. } => Some(404),
            _ => None,
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Network(err.0)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
