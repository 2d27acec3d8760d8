//! API error types
//!
//! Every failure a request can hit maps onto one variant. Remote failures keep
//! the HTTP status code so callers can always report it.

use std::io;

use serde::Deserialize;
use thiserror::Error;

/// Error returned by every client operation
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request URL could not be built
    #[error("creating request: {0}")]
    InvalidUrl(String),

    /// Connection, DNS, TLS, or body transfer failure
    #[error("{context}: {source}")]
    Http {
        /// What the client was doing
        context: &'static str,
        /// Underlying HTTP client error
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a status code of 400 or above
    #[error("API error ({status}): {message}")]
    Remote {
        /// HTTP status code
        status: u16,
        /// First message from the error envelope, or the raw body
        message: String,
    },

    /// Local file could not be read or written
    #[error("{context}: {source}")]
    Io {
        /// What the client was doing, including the path
        context: String,
        /// Underlying OS error
        #[source]
        source: io::Error,
    },

    /// The request payload could not be serialized
    #[error("marshaling request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body was not the expected JSON
    #[error("parsing response: {0}")]
    Decode(#[from] serde_json::Error),

    /// An attachment record carried no download URL
    #[error("attachment has no download URL")]
    MissingDownloadUrl,

    /// A pre-signed download answered with a failure status
    #[error("download failed with status {0}")]
    DownloadStatus(u16),
}

/// Error envelope returned by the API: `{"errors": [{"message", "help"}]}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorEnvelope {
    /// Reported errors, most relevant first
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

/// One entry of an [`ErrorEnvelope`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorDetail {
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Optional hint on how to fix the request
    #[serde(default)]
    pub help: Option<String>,
}

impl ApiError {
    /// Build the error for a failed response.
    ///
    /// Uses the first envelope message when the body parses and lists at least
    /// one error, otherwise the raw body.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorEnvelope>(body)
            .ok()
            .and_then(|envelope| envelope.errors.into_iter().next())
            .map_or_else(|| String::from_utf8_lossy(body).into_owned(), |detail| detail.message);

        Self::Remote { status, message }
    }

    /// HTTP status code, when the error came from a response
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } | Self::DownloadStatus(status) => Some(*status),
            _ => None,
        }
    }
}
