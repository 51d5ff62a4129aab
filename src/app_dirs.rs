//! Application directory paths.
//!
//! Uses the [`dirs`] crate for platform-appropriate locations.
//!
//! | Purpose | Linux | macOS |
//! |---------|-------|-------|
//! | Config | `~/.config/peerster-ui/` | `~/Library/Application Support/peerster-ui/` |
//! | Data / logs | `~/.local/share/peerster-ui/` | `~/Library/Application Support/peerster-ui/` |
//!
//! # Environment Overrides
//!
//! - `PEERSTER_UI_CONFIG_DIR`: overrides [`config_dir`]
//! - `PEERSTER_UI_DATA_DIR`: overrides [`data_dir`]

use std::path::PathBuf;

const APP_DIR: &str = "peerster-ui";

/// Application config directory.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("PEERSTER_UI_CONFIG_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::config_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| std::env::temp_dir().join("peerster-ui-config"))
}

/// Application data directory (log files live here).
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("PEERSTER_UI_DATA_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::data_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| std::env::temp_dir().join("peerster-ui-data"))
}

/// Default log file path (`data_dir()/peerster-ui.log`).
#[must_use]
pub fn default_log_file() -> PathBuf {
    data_dir().join("peerster-ui.log")
}
