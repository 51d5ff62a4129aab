//! Error types for the peerster-ui front end.

use peerster_api::ApiError;

/// Top-level error type for the UI.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// Node API request failed.
    #[error("node API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A surface refused or failed to render an item.
    #[error("render error: {0}")]
    Render(String),

    /// Invalid tab group construction or activation.
    #[error("tab error: {0}")]
    Tab(String),

    /// User input rejected before reaching the node.
    #[error("invalid input: {0}")]
    Input(String),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, UiError>;
