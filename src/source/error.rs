use thiserror::Error;

/// Errors that can occur while retrieving the current user.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The configured locator could not be turned into a request
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Transport-level failure (DNS, connect, TLS, body read)
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status. The code leads so it
    /// survives truncation of a long URL.
    #[error("HTTP {status} from '{url}'")]
    Status { url: String, status: u16 },

    /// Body was not a valid user record
    #[error("Invalid user payload from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Request exceeded the configured total timeout
    #[error("Request to '{url}' timed out after {duration_secs}s")]
    Timeout { url: String, duration_secs: u64 },
}

impl FetchError {
    /// Whether the failure happened before any response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Request { .. } | FetchError::Timeout { .. })
    }
}
