//! Error types for the peerster-api crate.
//!
//! Every variant carries a display-ready message; callers decide whether a
//! failure is worth surfacing or simply retrying on the next poll.

/// Errors that can occur while talking to a node.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The node answered with a non-success status code.
    #[error("unexpected status {status} from {path}")]
    Status {
        /// Endpoint path that was requested.
        path: String,
        /// Numeric HTTP status code.
        status: u16,
    },

    /// The response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid client configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for peerster-api results.
pub type Result<T> = std::result::Result<T, ApiError>;
