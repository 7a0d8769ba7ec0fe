// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logger configuration, loaded from TOML and the environment.
//!
//! ```toml
//! threshold = "warn"
//! timeout_ms = 1000
//! file = "/var/log/twine.log"
//! echo_stdout = true
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use twine_worker::{StartStopMode, WorkerConfig};

use crate::env;
use crate::error::ConfigError;
use crate::level::LogLevel;

/// Default wake-up interval of the logger's worker.
pub const DEFAULT_LOGGER_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Name of the worker thread.
    pub name: String,
    /// Records below this level are dropped at drain time.
    pub threshold: LogLevel,
    /// Color decoration on terminals that support it.
    pub use_color: bool,
    pub timeout_ms: u64,
    pub start_stop_timeout_ms: u64,
    /// Deliver `Hello!`, `Bye Bye!` and threshold notices.
    pub announce: bool,
    /// Append to this file instead of writing to stdout.
    pub file: Option<PathBuf>,
    /// Also print delivered lines on stdout while `file` is in use.
    pub echo_stdout: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: "Logger".to_string(),
            threshold: LogLevel::Info,
            use_color: true,
            timeout_ms: DEFAULT_LOGGER_TIMEOUT.as_millis() as u64,
            start_stop_timeout_ms: twine_worker::DEFAULT_START_STOP_TIMEOUT.as_millis() as u64,
            announce: true,
            file: None,
            echo_stdout: false,
        }
    }
}

impl LoggerConfig {
    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply `TWINE_LOG_THRESHOLD`, `TWINE_LOG_FILE` and `TWINE_LOG_TIMEOUT_MS`.
    ///
    /// An unparseable threshold is reported and ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(raw) = env::threshold() {
            match raw.parse() {
                Ok(level) => self.threshold = level,
                Err(e) => tracing::warn!(error = %e, "ignoring TWINE_LOG_THRESHOLD"),
            }
        }
        if let Some(file) = env::log_file() {
            self.file = Some(file);
        }
        if let Some(timeout) = env::timeout_ms() {
            self.timeout_ms = timeout.as_millis() as u64;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn start_stop_timeout(&self) -> Duration {
        Duration::from_millis(self.start_stop_timeout_ms)
    }

    /// Settings for the logger's worker. Start and stop are always synchronous.
    pub fn worker_config(&self) -> WorkerConfig {
        WorkerConfig::new(self.name.clone())
            .timeout(self.timeout())
            .mode(StartStopMode::Sync)
            .start_stop_timeout(self.start_stop_timeout())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
