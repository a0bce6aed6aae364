use thiserror::Error;

/// Failure to obtain listing markup. This is the only error a parse call surfaces.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The site answered with a non-success status.
    #[error("failed to load page {url}: HTTP {status}")]
    Status { status: u16, url: String },

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be decoded as text.
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl FetchError {
    /// HTTP status code, when the failure came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
