// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the logger crate.

use std::path::PathBuf;
use std::time::Duration;

/// Threshold override (`TWINE_LOG_THRESHOLD=warn`), unparsed
pub fn threshold() -> Option<String> {
    std::env::var("TWINE_LOG_THRESHOLD")
        .ok()
        .filter(|s| !s.trim().is_empty())
}

/// Log file override
pub fn log_file() -> Option<PathBuf> {
    std::env::var_os("TWINE_LOG_FILE")
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// Wake-up interval override
pub fn timeout_ms() -> Option<Duration> {
    std::env::var("TWINE_LOG_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}
