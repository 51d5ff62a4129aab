//! Configuration for the terminal front end.
//!
//! Loaded from TOML; every section and field has a default, so an empty file
//! (or no file at all) yields a working setup against a local node.

use crate::error::{Result, UiError};
use peerster_api::ApiConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Which node to poll and how patiently.
    pub node: NodeConfig,
    /// Refresh cadence.
    pub poll: PollConfig,
    /// Log filter and destination.
    pub log: LogConfig,
}

/// Node connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Node UI address, `http://host:port` or bare `host:port`.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            base_url: peerster_api::config::DEFAULT_BASE_URL.to_owned(),
            timeout_seconds: 5,
        }
    }
}

/// Polling settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Delay between the end of one refresh and the start of the next.
    pub interval_ms: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self { interval_ms: 3000 }
    }
}

impl PollConfig {
    /// The interval as a [`Duration`].
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence.
    pub filter: String,
    /// Log file. `None` uses [`crate::app_dirs::default_log_file`].
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "peerster_ui=info,peerster_api=info".to_owned(),
            file: None,
        }
    }
}

impl LogConfig {
    /// The configured log file or the platform default.
    pub fn file_path(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(crate::app_dirs::default_log_file)
    }
}

impl UiConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| UiError::Config(e.to_string()))
    }

    /// Load `path` if it exists, otherwise return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| UiError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `<config dir>/peerster-ui/config.toml`.
    pub fn default_config_path() -> PathBuf {
        crate::app_dirs::config_dir().join("config.toml")
    }

    /// Check values that would make the poller misbehave.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] for a zero poll interval, and the node
    /// client's own validation errors for a bad address or timeout.
    pub fn validate(&self) -> Result<()> {
        if self.poll.interval_ms == 0 {
            return Err(UiError::Config(
                "poll.interval_ms must be greater than 0".into(),
            ));
        }
        self.api_config().validate()?;
        Ok(())
    }

    /// Client settings derived from `[node]`.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.node.base_url.clone(),
            timeout_seconds: self.node.timeout_seconds,
            user_agent: None,
        }
    }
}
