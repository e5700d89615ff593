//! API error types for the Redmine client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when interacting with the Redmine API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The client configuration is invalid (endpoint or authentication).
    ///
    /// Always detected before any network I/O.
    #[error("{0}")]
    InvalidConfig(String),

    /// A query parameter could not be added because the URL does not parse.
    #[error("could not add query parameter '{key}' to URL '{url}': {source}")]
    InvalidUrl {
        key: String,
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Connection, TLS or body-read failure.
    #[error("request failed for {context}: {source}")]
    Request {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote service answered 404.
    #[error("Not Found: {0}")]
    NotFound(String),

    /// A non-2xx, non-404 response.
    ///
    /// The message is the newline-joined list of errors reported by Redmine,
    /// or the canonical reason of the status code when the body was empty.
    #[error("{message}")]
    Remote { status: StatusCode, message: String },

    /// A response body was not the JSON we expected.
    #[error("invalid response for {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A request body could not be serialized.
    #[error("could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A file to upload could not be read.
    #[error("could not read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An additional project field that Redmine does not know.
    #[error("unsupported additional project field {0} found")]
    UnsupportedField(String),
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Check whether this error means "resource absent".
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }

    /// The HTTP status reported by the remote side, if there was one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::NotFound(_) => Some(StatusCode::NOT_FOUND),
            ApiError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build a remote error from the decoded error list.
    pub(crate) fn remote(status: StatusCode, errors: &[String]) -> Self {
        ApiError::Remote {
            status,
            message: errors.join("\n"),
        }
    }

    /// Build a remote error for an empty error body.
    pub(crate) fn remote_without_body(status: StatusCode) -> Self {
        let message = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string());
        ApiError::Remote { status, message }
    }
}
