//! Load state shared by every page, and the data behind the error screen.

use crate::constants::ERR_LOAD_TITLE;
use crate::error::{ApiError, Result};

/// What the error screen shows: a message, optional debug pairs and whether
/// a retry makes sense.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorInfo {
    pub title: String,
    pub message: String,
    pub retryable: bool,
    pub debug: Vec<(String, String)>,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: ERR_LOAD_TITLE.to_string(),
            message: message.into(),
            retryable: true,
            debug: Vec::new(),
        }
    }

    pub fn from_error(err: &ApiError) -> Self {
        let mut info = Self::new(err.to_string());
        info.title = match err {
            ApiError::NotFound { .. } => "Not found".to_string(),
            ApiError::IdMismatch { .. } => "Unexpected record".to_string(),
            _ => ERR_LOAD_TITLE.to_string(),
        };
        info.retryable = !matches!(err, ApiError::NotFound { .. });

        let kind = match err {
            ApiError::Network(_) => "network",
            ApiError::HttpStatus { .. } => "http_status",
            ApiError::Decode(_) => "decode",
            ApiError::Envelope { .. } => "envelope",
            ApiError::IdMismatch { .. } => "id_mismatch",
            ApiError::NotFound { .. } => "not_found",
            ApiError::NoEndpoint => "no_endpoint",
        };
        info = info.with_debug("kind", kind);
        if let Some(status) = err.status() {
            info = info.with_debug("status", status.to_string());
        }
        if let Some(url) = err.url() {
            info = info.with_debug("url", url);
        }
        info
    }

    pub fn with_debug(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.debug.push((key.into(), value.into()));
        self
    }
}

impl From<&ApiError> for ErrorInfo {
    fn from(err: &ApiError) -> Self {
        Self::from_error(err)
    }
}

/// `Loading` until a fetch settles; only an explicit retry or a refresh
/// after a mutation goes back to `Loading`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PageState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(ErrorInfo),
}

impl<T> PageState<T> {
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(value) => PageState::Ready(value),
            Err(err) => PageState::Failed(ErrorInfo::from_error(&err)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            PageState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            PageState::Failed(info) => Some(info),
            _ => None,
        }
    }
}
