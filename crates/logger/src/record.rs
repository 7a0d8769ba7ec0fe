// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use twine_core::CallerId;

use crate::level::LogLevel;

/// One committed log line, immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub caller: CallerId,
    pub level: LogLevel,
    pub message: String,
    /// Local time of the commit, `YYYY/MM/DD HH:MM:SS`.
    pub time: String,
}
