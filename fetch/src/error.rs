//! Error types for fetching explanation pages.

use thiserror::Error;

/// Failure to obtain an explanation page.
///
/// Every variant carries the requested URL so the message alone identifies
/// what was being fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The configured origin does not form a valid endpoint URL.
    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Connection, TLS, or other transport failure.
    #[error("error fetching explanation from {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("error fetching explanation from {url}: HTTP status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body could not be read as text.
    #[error("error reading explanation body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// The URL that was being fetched.
    pub fn url(&self) -> &str {
        match self {
            Self::InvalidUrl { url, .. }
            | Self::Request { url, .. }
            | Self::Status { url, .. }
            | Self::Body { url, .. } => url,
        }
    }
}

/// Convenience alias for results with [`FetchError`].
pub type Result<T> = std::result::Result<T, FetchError>;
