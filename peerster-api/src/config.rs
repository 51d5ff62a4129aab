//! Client configuration with sensible defaults.
//!
//! [`ApiConfig`] names the node to poll and bounds how long a single request
//! may take. The defaults match a node started with its stock UI port.

use crate::error::ApiError;
use url::Url;

/// Default address of a locally running node's UI server.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Configuration for a [`NodeClient`](crate::NodeClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Node address. Either a full `http://` / `https://` URL or a bare
    /// `host:port`, which is treated as plain HTTP.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. `None` uses the crate name and version.
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_seconds: 5,
            user_agent: None,
        }
    }
}

impl ApiConfig {
    /// Build a config for `base_url` with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `base_url` must parse as an `http` or `https` URL with a host
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.timeout_seconds == 0 {
            return Err(ApiError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        self.parsed_base_url().map(|_| ())
    }

    /// Parse `base_url`, adding an `http://` scheme when none is given.
    pub fn parsed_base_url(&self) -> Result<Url, ApiError> {
        let raw = self.base_url.trim();
        if raw.is_empty() {
            return Err(ApiError::Config("base_url must not be empty".into()));
        }
        let with_scheme = match split_scheme(raw) {
            (Some(_), _) => raw.to_owned(),
            (None, host) => format!("http://{host}"),
        };
        let url = Url::parse(&with_scheme)
            .map_err(|e| ApiError::Config(format!("invalid base_url '{raw}': {e}")))?;
        if url.host_str().is_none() {
            return Err(ApiError::Config(format!("base_url '{raw}' has no host")));
        }
        Ok(url)
    }
}

/// Split an address into an optional `http`/`https` scheme and the rest.
fn split_scheme(addr: &str) -> (Option<&str>, &str) {
    if let Some(host) = addr.strip_prefix("https://") {
        (Some("https"), host)
    } else if let Some(host) = addr.strip_prefix("http://") {
        (Some("http"), host)
    } else {
        (None, addr)
    }
}
