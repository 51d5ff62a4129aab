//! Shared HTTP client construction.

use crate::config::ApiConfig;
use crate::error::ApiError;
use std::time::Duration;

/// User-Agent sent when the config does not override it.
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] for polling a node.
///
/// The client has the configured timeout and User-Agent, and never follows
/// redirects: the node serves everything from one origin, so a redirect
/// means the address is wrong.
///
/// # Errors
///
/// Returns [`ApiError::Http`] if the client cannot be constructed.
pub fn build_client(config: &ApiConfig) -> Result<reqwest::Client, ApiError> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(|e| ApiError::Http(format!("failed to build HTTP client: {e}")))
}
