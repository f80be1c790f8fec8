//! The single failure kind the browser handles: a fetch that did not
//! produce usable data.
//!
//! Variants exist for log detail only. Callers treat every variant the same
//! way (log once, keep prior state).

use crate::traits::HttpError;

/// Longest response-body excerpt kept on a status error.
const BODY_EXCERPT_CHARS: usize = 200;

/// A recipe API request failed.
///
/// `endpoint` is the request path without its query string so the API key
/// never ends up in a log line.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request URL could not be built.
    #[error("invalid request URL for {endpoint}: {message}")]
    InvalidUrl { endpoint: String, message: String },

    /// The transport failed before a response arrived.
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: HttpError,
    },

    /// The server answered with a non-2xx status.
    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The body was not the expected JSON document.
    #[error("malformed response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Build a status error, keeping only a short excerpt of the body.
    pub fn status(endpoint: impl Into<String>, status: u16, body: &str) -> Self {
        FetchError::Status {
            endpoint: endpoint.into(),
            status,
            body: body.chars().take(BODY_EXCERPT_CHARS).collect(),
        }
    }

    /// Short error code for structured log fields.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl { .. } => "E_FETCH_URL",
            FetchError::Transport { .. } => "E_FETCH_TRANSPORT",
            FetchError::Status { .. } => "E_FETCH_STATUS",
            FetchError::Decode { .. } => "E_FETCH_DECODE",
        }
    }

    /// Request path the failure belongs to.
    pub fn endpoint(&self) -> &str {
        match self {
            FetchError::InvalidUrl { endpoint, .. }
            | FetchError::Transport { endpoint, .. }
            | FetchError::Status { endpoint, .. }
            | FetchError::Decode { endpoint, .. } => endpoint,
        }
    }
}
