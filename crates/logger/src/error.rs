// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the logging pipeline

use std::path::PathBuf;

use thiserror::Error;

/// Failure of a sink to connect or to deliver one entry
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("sink is not connected")]
    NotConnected,
    #[error("sink panicked")]
    Panicked,
    #[error("{0}")]
    Custom(String),
}

/// Errors from loading logger configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid log level: {0}")]
    InvalidLevel(String),
}

/// Errors reported to callers of the logger's setup methods
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to open log file {}: {source}", path.display())]
    OpenLogFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}
