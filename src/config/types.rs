//! Core configuration types and loading.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use super::defaults::{
    DEFAULT_FRIENDS_FILE, default_open_timeout_secs, default_pacing_millis,
    default_write_timeout_secs,
};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Friends file location.
    #[serde(default)]
    pub friends: FriendsConfig,
    /// Timing of writes into ii's `in` FIFO.
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Friends file configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FriendsConfig {
    /// Path to the friends file. Defaults to `friends.txt` beside the binary.
    pub file: Option<PathBuf>,
}

impl FriendsConfig {
    /// Configured friends file, or `friends.txt` next to the executable.
    pub fn file_or_default(&self) -> PathBuf {
        if let Some(file) = &self.file {
            return file.clone();
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_FRIENDS_FILE)))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FRIENDS_FILE))
    }
}

/// Dispatch timing configuration.
///
/// ii only reads its `in` FIFO while it is running, so both opening it and
/// writing to it can block. Each is bounded separately:
/// - `open_timeout_secs`: wait for a reader to attach (default: 60)
/// - `write_timeout_secs`: per-line write deadline (default: 5)
/// - `pacing_millis`: pause after each successful line (default: 2000)
#[derive(Debug, Clone, Deserialize)]
pub struct DispatchConfig {
    #[serde(default = "default_open_timeout_secs")]
    pub open_timeout_secs: u64,

    #[serde(default = "default_write_timeout_secs")]
    pub write_timeout_secs: u64,

    #[serde(default = "default_pacing_millis")]
    pub pacing_millis: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            open_timeout_secs: default_open_timeout_secs(),
            write_timeout_secs: default_write_timeout_secs(),
            pacing_millis: default_pacing_millis(),
        }
    }
}

impl DispatchConfig {
    pub fn open_timeout(&self) -> Duration {
        Duration::from_secs(self.open_timeout_secs)
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_secs(self.write_timeout_secs)
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_millis)
    }
}
